//! Dayflow Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;

use tauri::{Emitter, Manager};

mod commands;
mod domain;
mod repository;

use repository::{init_db, DbState};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle.path().app_data_dir().unwrap();
    std::fs::create_dir_all(&app_dir).unwrap();
    app_dir.join("dayflow.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging (fmt subscriber with the log bridge)
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .init();

            let db_path = get_db_path(&app_handle);
            log::info!("Database at {:?}", db_path);

            // Create initial empty DbState (managed)
            let db_state = DbState::new();

            // Manage state IMMEDIATELY
            app.manage(AppState {
                db_state: db_state.clone(),
            });

            log::info!("State managed, app will start immediately");

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                log::info!("Background: starting DB initialization");

                match init_db(&db_path) {
                    Ok(conn) => {
                        {
                            let mut conn_guard = db_state.conn.lock().await;
                            *conn_guard = Some(conn);
                        }
                        log::info!("Background: DB initialized successfully");

                        // Emit event to notify frontend
                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::error!("Failed to emit db-initialized: {}", e);
                        }
                    }
                    Err(e) => {
                        log::error!("Background: DB init failed: {}", e);
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // WorkItem CRUD
            commands::create_work_item,
            commands::list_work_items,
            commands::get_work_item,
            commands::update_work_item,
            commands::delete_work_item,
            // Progress + activity
            commands::update_progress,
            commands::resume_work_item,
            commands::log_time,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
