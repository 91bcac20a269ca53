//! New Item Form Component
//!
//! Form for creating new work items with an optional progress target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateWorkItemArgs};
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating new work items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (target_value, set_target_value) = signal(String::from("1"));

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        let target = target_value.get().parse::<i32>().ok().filter(|t| *t >= 1);

        spawn_local(async move {
            let args = CreateWorkItemArgs {
                title: &title,
                target_value: target,
            };
            if let Ok(created) = commands::create_work_item(&args).await {
                // Fine-grained update: push new item to store
                store.items().write().push(created);
                set_new_title.set(String::new());
                set_target_value.set(String::from("1"));
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Add a task or goal..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <input
                type="number"
                class="target-input"
                min="1"
                prop:value=move || target_value.get()
                on:input=move |ev| set_target_value.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
