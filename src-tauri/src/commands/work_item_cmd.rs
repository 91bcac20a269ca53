//! Tauri Commands for WorkItem CRUD + Progress
//!
//! Exposes WorkItem operations to the frontend via Tauri IPC.

use tauri::State;

use crate::domain::{WorkItem, WorkItemStatus};
use crate::repository::{Repository, WorkItemRepository};
use crate::AppState;

fn repo(state: &State<'_, AppState>) -> WorkItemRepository {
    WorkItemRepository::new(state.db_state.conn.clone())
}

/// Create a new work item
#[tauri::command]
pub async fn create_work_item(
    state: State<'_, AppState>,
    title: String,
    target_value: Option<i32>,
) -> Result<WorkItem, String> {
    let item = WorkItem::new(
        0, // ID will be assigned by database
        title,
        target_value.unwrap_or(1),
    );
    repo(&state).create(&item).await.map_err(|e| e.to_string())
}

/// List all work items
#[tauri::command]
pub async fn list_work_items(state: State<'_, AppState>) -> Result<Vec<WorkItem>, String> {
    repo(&state).list().await.map_err(|e| e.to_string())
}

/// Get work item by ID
#[tauri::command]
pub async fn get_work_item(
    state: State<'_, AppState>,
    id: u32,
) -> Result<Option<WorkItem>, String> {
    repo(&state).find_by_id(id).await.map_err(|e| e.to_string())
}

/// Update work item fields (partial update)
#[tauri::command]
pub async fn update_work_item(
    state: State<'_, AppState>,
    id: u32,
    title: Option<String>,
    status: Option<String>,
    memo: Option<String>,
) -> Result<WorkItem, String> {
    let repo = repo(&state);

    // First get existing item
    let existing = repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Work item {} not found", id))?;

    // Update fields
    let updated = WorkItem {
        id: existing.id,
        title: title.unwrap_or(existing.title),
        status: status
            .map(|s| WorkItemStatus::from_str(&s))
            .unwrap_or(existing.status),
        time_spend: existing.time_spend,
        target_value: existing.target_value,
        target_progress: existing.target_progress,
        progress_percent: existing.progress_percent,
        memo: memo.or(existing.memo),
        created_at: existing.created_at,
        updated_at: Some(chrono::Local::now().timestamp_millis()),
    };

    repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete work item
#[tauri::command]
pub async fn delete_work_item(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    repo(&state).delete(id).await.map_err(|e| e.to_string())
}

/// Set progress to an absolute value and return the authoritative snapshot
///
/// The frontend sends the value it already applied optimistically; the
/// returned snapshot (with the recomputed percentage) overwrites it.
#[tauri::command]
pub async fn update_progress(
    state: State<'_, AppState>,
    id: u32,
    progress: i32,
) -> Result<WorkItem, String> {
    repo(&state)
        .update_progress(id, progress)
        .await
        .map_err(|e| e.to_string())
}

/// Mark a work item as actively worked on
#[tauri::command]
pub async fn resume_work_item(state: State<'_, AppState>, id: u32) -> Result<WorkItem, String> {
    repo(&state).resume(id).await.map_err(|e| e.to_string())
}

/// Accumulate worked time in seconds
#[tauri::command]
pub async fn log_time(
    state: State<'_, AppState>,
    id: u32,
    seconds: i64,
) -> Result<WorkItem, String> {
    repo(&state).log_time(id, seconds).await.map_err(|e| e.to_string())
}
