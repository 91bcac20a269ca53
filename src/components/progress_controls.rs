//! Progress Controls Component
//!
//! The affordance layer for optimistic progress mutations. All three
//! buttons are disabled while a mutation for this item is in flight, so
//! overlapping calls never reach the controller.

use leptos::prelude::*;

use crate::progress::{complete_now, decrement_progress, increment_progress, progress_pending};
use crate::store::use_app_store;

/// Step / complete buttons for one work item
#[component]
pub fn ProgressControls(id: u32) -> impl IntoView {
    let store = use_app_store();

    let pending = Memo::new(move |_| progress_pending(&store, id));
    let btn_class = move || {
        if pending.get() { "step-btn loading" } else { "step-btn" }
    };

    view! {
        <span class="progress-controls">
            <button
                class=btn_class
                disabled=move || pending.get()
                on:click=move |_| decrement_progress(store, id)
            >
                "-"
            </button>
            <button
                class=btn_class
                disabled=move || pending.get()
                on:click=move |_| increment_progress(store, id)
            >
                "+"
            </button>
            <button
                class=btn_class
                disabled=move || pending.get()
                on:click=move |_| complete_now(store, id)
            >
                "✓"
            </button>
        </span>
    }
}
