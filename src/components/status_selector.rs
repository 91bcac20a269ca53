//! Status Selector Component
//!
//! Reusable status selector buttons.

use leptos::prelude::*;

/// Status options
pub const STATUSES: &[(&str, &str)] = &[
    ("todo", "To do"),
    ("in-progress", "In progress"),
    ("paused", "Paused"),
    ("completed", "Done"),
];

/// Status selector buttons for work items
#[component]
pub fn StatusSelector(
    current_status: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {STATUSES.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || current_status.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
