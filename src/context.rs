//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::WorkItem;

/// Which slice of the item list the main view shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewFilter {
    All,
    Active,
    Completed,
}

impl ViewFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ViewFilter::All => "All",
            ViewFilter::Active => "Active",
            ViewFilter::Completed => "Done",
        }
    }

    pub fn matches(&self, item: &WorkItem) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Active => !item.is_complete(),
            ViewFilter::Completed => item.is_complete(),
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current list filter - read
    pub view_filter: ReadSignal<ViewFilter>,
    set_view_filter: WriteSignal<ViewFilter>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        view_filter: (ReadSignal<ViewFilter>, WriteSignal<ViewFilter>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            view_filter: view_filter.0,
            set_view_filter: view_filter.1,
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch the main view filter
    pub fn set_view(&self, filter: ViewFilter) {
        self.set_view_filter.set(filter);
    }
}
