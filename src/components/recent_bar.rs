//! Recent Bar Component
//!
//! The "recently worked on" strip fed by the bounded recency cache.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_touch_recent, store_update_work_item, use_app_store, AppStateStoreFields};

#[component]
pub fn RecentBar() -> impl IntoView {
    let store = use_app_store();

    let entries = Memo::new(move |_| store.recent().read().all().to_vec());

    view! {
        <div class="recent-bar">
            <span class="recent-label">"Recent:"</span>
            <For
                each=move || entries.get()
                key=|item| (item.id, item.title.clone(), item.progress_percent)
                children=move |item| {
                    let id = item.id;
                    view! {
                        <button
                            class="recent-chip"
                            on:click=move |_| {
                                spawn_local(async move {
                                    if let Ok(resumed) = commands::resume_work_item(id).await {
                                        store_update_work_item(&store, resumed.clone());
                                        store_touch_recent(&store, resumed);
                                    }
                                });
                            }
                        >
                            {item.title.clone()}
                            <span class="recent-percent">{format!(" {}%", item.progress_percent)}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
