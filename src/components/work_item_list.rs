//! Work Item List Component
//!
//! The main list, filtered by the current view tab.

use leptos::prelude::*;

use crate::components::WorkItemRow;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WorkItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let filtered = Memo::new(move |_| {
        let filter = ctx.view_filter.get();
        store
            .items()
            .get()
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="work-item-list">
            <For
                each=move || filtered.get()
                key=|item| {
                    // Use a tuple of all mutable fields to ensure changes cause re-render
                    (
                        item.id,
                        item.title.clone(),
                        item.status.clone(),
                        item.time_spend,
                        item.target_progress,
                        item.progress_percent,
                    )
                }
                children=move |item| view! { <WorkItemRow item=item /> }
            />
            <p class="item-count">
                {move || format!("{} items", filtered.get().len())}
            </p>
        </div>
    }
}
