//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations. The connection is created
//! empty at startup and filled in by a background init task, so commands
//! arriving before init report "not initialized" instead of blocking.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the database at `db_path` and bring the schema up to date
pub fn init_db(db_path: &PathBuf) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    run_migrations(&conn)?;

    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // Work items table - create if not exists
    conn.execute(
        "CREATE TABLE IF NOT EXISTS work_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'todo',
            time_spend INTEGER NOT NULL DEFAULT 0,
            target_value INTEGER NOT NULL DEFAULT 1,
            target_progress INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER,
            updated_at INTEGER
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Memo column arrived after the first release
    if !column_exists(conn, "work_items", "memo") {
        conn.execute("ALTER TABLE work_items ADD COLUMN memo TEXT", [])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
    }

    Ok(())
}
