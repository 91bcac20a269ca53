//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod work_item;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Message carried by a rejected command promise (the backend's error
/// string), with a generic fallback when there is none to show.
fn reject_message(err: JsValue) -> String {
    err.as_string()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Request failed".to_string())
}

// Re-export all public items
pub use work_item::*;
