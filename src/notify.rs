//! Transient Notices
//!
//! One-shot, dismissable notifications. Remote failures land here with
//! the backend's message; nothing in this store is persistent.

use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

/// Fallback when a failure carries no usable message
pub const NOTICE_FALLBACK: &str = "Something went wrong. Please try again.";

/// A single transient notification
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Queue a notice; ids are monotonic so dismissal is unambiguous
pub fn push_notice(store: &AppStore, message: impl Into<String>) {
    let message = message.into();
    let message = if message.is_empty() {
        NOTICE_FALLBACK.to_string()
    } else {
        message
    };

    let id = {
        let counter_field = store.next_notice_id();
        let mut counter = counter_field.write();
        *counter += 1;
        *counter
    };
    store.notices().write().push(Notice { id, message });
}

pub fn dismiss_notice(store: &AppStore, id: u64) {
    store.notices().write().retain(|n| n.id != id);
}
