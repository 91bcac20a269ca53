//! Dayflow Frontend App
//!
//! Main application component: provides the store and context, loads the
//! item list, and lays out the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ModalHost, NewItemForm, RecentBar, ToastStack, ViewTabBar, WorkItemList};
use crate::context::{AppContext, ViewFilter};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (view_filter, set_view_filter) = signal(ViewFilter::All);

    // Provide context to all children
    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (view_filter, set_view_filter),
    );
    provide_context(ctx);

    // Load items on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading work items, trigger={}", trigger).into());
        spawn_local(async move {
            match commands::list_work_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    store.items().set(loaded);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[APP] Load failed: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Dayflow"</h1>
                <ViewTabBar />
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"↻"</button>
            </header>

            <RecentBar />

            <main class="main-content">
                <NewItemForm />
                <WorkItemList />
            </main>

            <ModalHost />
            <ToastStack />
        </div>
    }
}
