//! WorkItem Repository
//!
//! SQLite-backed implementation of Repository<WorkItem> plus the
//! progress/time operations the sync layer reconciles against.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, WorkItem, WorkItemStatus};

const COLUMNS: &str =
    "id, title, status, time_spend, target_value, target_progress, memo, created_at, updated_at";

pub struct WorkItemRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl WorkItemRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Set progress to an absolute value and return the updated snapshot.
    ///
    /// Bounds are validated in the domain layer; reaching the target flips
    /// status to completed so the snapshot stays consistent.
    pub async fn update_progress(&self, id: u32, progress: i32) -> DomainResult<WorkItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut item = find(conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Work item {} not found", id)))?;

        item.set_progress(progress)?;
        item.updated_at = Some(chrono::Local::now().timestamp_millis());
        persist(conn, &item)?;

        log::debug!("work item {} progress -> {}/{}", id, progress, item.target_value);
        Ok(item)
    }

    /// Mark an item as actively worked on and return the snapshot
    pub async fn resume(&self, id: u32) -> DomainResult<WorkItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut item = find(conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Work item {} not found", id)))?;

        item.status = WorkItemStatus::InProgress;
        item.updated_at = Some(chrono::Local::now().timestamp_millis());
        persist(conn, &item)?;

        Ok(item)
    }

    /// Accumulate worked time (seconds); rejects negative input
    pub async fn log_time(&self, id: u32, seconds: i64) -> DomainResult<WorkItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut item = find(conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Work item {} not found", id)))?;

        item.add_time(seconds)?;
        item.updated_at = Some(chrono::Local::now().timestamp_millis());
        persist(conn, &item)?;

        Ok(item)
    }
}

#[async_trait]
impl Repository<WorkItem> for WorkItemRepository {
    async fn create(&self, entity: &WorkItem) -> DomainResult<WorkItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO work_items (title, status, time_spend, target_value, target_progress, memo, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.title,
                entity.status.as_str(),
                entity.time_spend,
                entity.target_value,
                entity.target_progress,
                entity.memo,
                now,
                now
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        find(conn, id)?.ok_or_else(|| DomainError::Internal("Created row missing".to_string()))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<WorkItem>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;
        find(conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<WorkItem>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM work_items ORDER BY created_at ASC, id ASC",
                COLUMNS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut items = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            items.push(row_to_work_item(row)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &WorkItem) -> DomainResult<WorkItem> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        persist(conn, entity)?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute("DELETE FROM work_items WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

fn connection<'a>(guard: &'a Option<Connection>) -> DomainResult<&'a Connection> {
    guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))
}

fn find(conn: &Connection, id: u32) -> DomainResult<Option<WorkItem>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM work_items WHERE id = ?", COLUMNS))
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt
        .query(params![id])
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    match rows.next() {
        Ok(Some(row)) => Ok(Some(row_to_work_item(row)?)),
        _ => Ok(None),
    }
}

fn persist(conn: &Connection, entity: &WorkItem) -> DomainResult<()> {
    conn.execute(
        "UPDATE work_items SET title = ?, status = ?, time_spend = ?, target_value = ?, target_progress = ?, memo = ?, updated_at = ? WHERE id = ?",
        params![
            entity.title,
            entity.status.as_str(),
            entity.time_spend,
            entity.target_value,
            entity.target_progress,
            entity.memo,
            entity.updated_at,
            entity.id
        ],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;
    Ok(())
}

fn row_to_work_item(row: &Row) -> DomainResult<WorkItem> {
    let target_value: i32 = row.get(4).unwrap_or(1);
    let target_progress: i32 = row.get(5).unwrap_or(0);

    Ok(WorkItem {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        title: row.get(1).unwrap_or_default(),
        status: WorkItemStatus::from_str(&row.get::<_, String>(2).unwrap_or_default()),
        time_spend: row.get(3).unwrap_or(0),
        target_value,
        target_progress,
        progress_percent: WorkItem::percent(target_progress, target_value),
        memo: row.get::<_, Option<String>>(6).ok().flatten(),
        created_at: row.get::<_, Option<i64>>(7).ok().flatten(),
        updated_at: row.get::<_, Option<i64>>(8).ok().flatten(),
    })
}
