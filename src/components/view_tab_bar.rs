//! View Tab Bar Component
//!
//! Tabs for switching the main list between All / Active / Done. A tab
//! switch is a navigation: every open modal is reset so nothing reappears
//! in the new context.

use leptos::prelude::*;

use crate::context::{AppContext, ViewFilter};
use crate::modal::reset_modals;
use crate::store::use_app_store;

const TABS: &[ViewFilter] = &[ViewFilter::All, ViewFilter::Active, ViewFilter::Completed];

#[component]
pub fn ViewTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="view-tab-bar">
            {TABS.iter().map(|tab| {
                let tab = *tab;
                let is_active = move || ctx.view_filter.get() == tab;
                let tab_class = move || {
                    if is_active() { "view-tab active" } else { "view-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| {
                            ctx.set_view(tab);
                            reset_modals(&store);
                        }
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
