//! WorkItem Commands
//!
//! Frontend bindings for work item CRUD, progress, and activity.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{invoke, reject_message};
use crate::models::WorkItem;

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateWorkItemArgs<'a> {
    pub title: &'a str,
    #[serde(rename = "targetValue")]
    pub target_value: Option<i32>,
}

#[derive(Serialize)]
pub struct IdArgs {
    pub id: u32,
}

#[derive(Serialize)]
pub struct UpdateWorkItemArgs<'a> {
    pub id: u32,
    pub title: Option<&'a str>,
    pub status: Option<&'a str>,
    pub memo: Option<&'a str>,
}

#[derive(Serialize)]
pub struct UpdateProgressArgs {
    pub id: u32,
    pub progress: i32,
}

#[derive(Serialize)]
pub struct LogTimeArgs {
    pub id: u32,
    pub seconds: i64,
}

// ========================
// WorkItem Commands
// ========================

pub async fn list_work_items() -> Result<Vec<WorkItem>, String> {
    let result = invoke("list_work_items", JsValue::NULL).await.map_err(reject_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_work_item(args: &CreateWorkItemArgs<'_>) -> Result<WorkItem, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_work_item", js_args).await.map_err(reject_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_work_item(args: &UpdateWorkItemArgs<'_>) -> Result<WorkItem, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_work_item", js_args).await.map_err(reject_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_work_item(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_work_item", js_args).await.map_err(reject_message)?;
    Ok(())
}

/// Set progress to an absolute value; the returned snapshot carries the
/// authoritative recomputed percentage.
pub async fn update_progress(id: u32, progress: i32) -> Result<WorkItem, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&UpdateProgressArgs { id, progress }).map_err(|e| e.to_string())?;
    let result = invoke("update_progress", js_args).await.map_err(reject_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn resume_work_item(id: u32) -> Result<WorkItem, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("resume_work_item", js_args).await.map_err(reject_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn log_time(id: u32, seconds: i64) -> Result<WorkItem, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&LogTimeArgs { id, seconds }).map_err(|e| e.to_string())?;
    let result = invoke("log_time", js_args).await.map_err(reject_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
