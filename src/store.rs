//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each field has
//! exactly one writer path: the helper functions below and the operation
//! sets in `modal`, `progress`, and `notify`. Components never mutate
//! store internals directly.

use leptos::prelude::*;
use reactive_stores::Store;
use ui_sync::{InFlight, ModalRegistry, Recency};

use crate::modal::{Modal, ModalProps};
use crate::models::WorkItem;
use crate::notify::Notice;

/// How many recently-worked-on items the dashboard keeps
pub const RECENT_CAPACITY: usize = 5;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// All work items
    pub items: Vec<WorkItem>,
    /// Bounded most-recently-worked-on list
    pub recent: Recency<WorkItem>,
    /// Named modal visibility + payload slots
    pub modals: ModalRegistry<Modal, ModalProps>,
    /// Pending optimistic progress mutations, keyed by item id
    pub inflight: InFlight<u32, i32>,
    /// Transient notifications
    pub notices: Vec<Notice>,
    /// Monotonic notice id counter
    pub next_notice_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            recent: Recency::new(RECENT_CAPACITY),
            modals: ModalRegistry::new(),
            inflight: InFlight::new(),
            notices: Vec::new(),
            next_notice_id: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Overwrite a work item in the store by ID.
///
/// No-ops when the id is gone, so a late command resolution can never
/// resurrect a deleted item. The recency entry is refreshed in place
/// (same position) when present.
pub fn store_update_work_item(store: &AppStore, updated: WorkItem) {
    store.items().write().iter_mut()
        .find(|item| item.id == updated.id)
        .map(|item| *item = updated.clone());
    store.recent().write().refresh(updated);
}

/// Remove a work item from the store by ID, evicting its recency entry
pub fn store_remove_work_item(store: &AppStore, id: u32) {
    store.items().write().retain(|item| item.id != id);
    store.recent().write().remove(id);
}

/// Move an item to the front of the recently-worked-on list
pub fn store_touch_recent(store: &AppStore, item: WorkItem) {
    store.recent().write().touch(item);
}
