//! Application Modals
//!
//! The closed set of modal kinds and their typed payloads, plus the
//! store-level operation set wrapping the registry. Components subscribe
//! through `use_modal` so a write to one modal does not re-render others.

use leptos::prelude::*;
use ui_sync::{ModalKey, ModalSlot};

use crate::store::{AppStateStoreFields, AppStore};

/// Every modal the dashboard can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modal {
    /// Delete confirmation for a work item
    ConfirmDelete,
    /// Title/status editor for a work item
    ItemEditor,
    /// Shown once when an item reaches its target
    Celebrate,
}

impl ModalKey for Modal {
    const ALL: &'static [Self] = &[Modal::ConfirmDelete, Modal::ItemEditor, Modal::Celebrate];
}

/// Contextual payload supplied by the opener, consumed by the renderer
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalProps {
    #[default]
    None,
    ConfirmDelete {
        item_id: u32,
        title: String,
    },
    ItemEditor {
        item_id: u32,
        title: String,
        status: String,
    },
    Celebrate {
        title: String,
    },
}

// ========================
// Store Operation Set
// ========================

pub fn open_modal(store: &AppStore, kind: Modal, props: Option<ModalProps>) {
    store.modals().write().show(kind, props);
}

pub fn close_modal(store: &AppStore, kind: Modal) {
    store.modals().write().hide(kind);
}

/// Release the payload (and any data it references) without hiding
pub fn clear_modal_props(store: &AppStore, kind: Modal) {
    store.modals().write().clear_payload(kind);
}

/// Hide everything and drop every payload - navigation / context switch
pub fn reset_modals(store: &AppStore) {
    store.modals().write().reset_all();
}

/// Per-kind subscription: the memo only notifies when this modal's own
/// slot changes, not on every registry write.
pub fn use_modal(store: AppStore, kind: Modal) -> Memo<ModalSlot<ModalProps>> {
    Memo::new(move |_| store.modals().read().slot(kind).clone())
}
