//! Tauri Commands
//!
//! IPC handlers exposed to the frontend. Each returns Result<_, String>;
//! the message is what the UI surfaces in a transient notice.

mod work_item_cmd;

pub use work_item_cmd::*;
