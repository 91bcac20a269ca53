//! Work Item Row Component
//!
//! A single row: status, title, time, progress controls, actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ProgressControls;
use crate::modal::{open_modal, Modal, ModalProps};
use crate::models::{format_duration, WorkItem};
use crate::store::{store_touch_recent, store_update_work_item, use_app_store};

/// A single work item row
#[component]
pub fn WorkItemRow(item: WorkItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let title = item.title.clone();
    let status = item.status.clone();
    let completed = item.is_complete();
    let editor_props = ModalProps::ItemEditor {
        item_id: id,
        title: item.title.clone(),
        status: item.status.clone(),
    };
    let delete_props = ModalProps::ConfirmDelete {
        item_id: id,
        title: item.title.clone(),
    };

    // Resume: mark active on the backend, then put it at the front of the
    // recently-worked-on list with the returned snapshot
    let on_resume = move |_| {
        spawn_local(async move {
            if let Ok(resumed) = commands::resume_work_item(id).await {
                store_update_work_item(&store, resumed.clone());
                store_touch_recent(&store, resumed);
            }
        });
    };

    // Quick pomodoro-style time logging
    let on_log_time = move |_| {
        spawn_local(async move {
            if let Ok(updated) = commands::log_time(id, 25 * 60).await {
                store_update_work_item(&store, updated);
            }
        });
    };

    view! {
        <div class=move || if completed { "item-row completed" } else { "item-row" }>
            <span class=format!("status-badge {}", status)>{status.clone()}</span>
            <span class="item-title">{title}</span>
            <span class="item-time">{format_duration(item.time_spend)}</span>

            <span class="item-progress">
                {format!("{}/{} ({}%)", item.target_progress, item.target_value, item.progress_percent)}
            </span>

            <ProgressControls id=id />

            <button class="resume-btn" on:click=on_resume>"resume"</button>
            <button class="log-btn" on:click=on_log_time>"+25m"</button>
            <button
                class="edit-btn"
                on:click=move |_| open_modal(&store, Modal::ItemEditor, Some(editor_props.clone()))
            >
                "edit"
            </button>
            <button
                class="delete-btn"
                on:click=move |_| open_modal(&store, Modal::ConfirmDelete, Some(delete_props.clone()))
            >
                "×"
            </button>
        </div>
    }
}
