//! Modal Host Component
//!
//! Renders every registered modal from its registry slot. Each modal
//! subscribes to its own slot only, so showing or hiding one never
//! re-renders the others.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, UpdateWorkItemArgs};
use crate::components::StatusSelector;
use crate::modal::{clear_modal_props, close_modal, use_modal, Modal, ModalProps};
use crate::notify::push_notice;
use crate::store::{store_remove_work_item, store_update_work_item, use_app_store};

#[component]
pub fn ModalHost() -> impl IntoView {
    view! {
        <ConfirmDeleteModal />
        <ItemEditorModal />
        <CelebrateModal />
    }
}

/// "Really delete?" confirmation
#[component]
fn ConfirmDeleteModal() -> impl IntoView {
    let store = use_app_store();
    let slot = use_modal(store, Modal::ConfirmDelete);

    let item_title = move || match slot.get().payload {
        ModalProps::ConfirmDelete { title, .. } => title,
        _ => String::new(),
    };

    let on_confirm = move |_| {
        let ModalProps::ConfirmDelete { item_id, .. } = slot.get_untracked().payload else {
            return;
        };
        spawn_local(async move {
            match commands::delete_work_item(item_id).await {
                Ok(()) => {
                    store_remove_work_item(&store, item_id);
                    close_modal(&store, Modal::ConfirmDelete);
                    // Payload is spent once the action ran
                    clear_modal_props(&store, Modal::ConfirmDelete);
                }
                Err(msg) => {
                    close_modal(&store, Modal::ConfirmDelete);
                    push_notice(&store, msg);
                }
            }
        });
    };

    view! {
        <Show when=move || slot.get().visible>
            <div class="modal-overlay">
                <div class="modal confirm-delete-modal">
                    <p>{move || format!("Delete \"{}\"?", item_title())}</p>
                    <button class="confirm-btn" on:click=on_confirm>"✓"</button>
                    // Cancel keeps the payload so a re-open shows the same context
                    <button
                        class="cancel-btn"
                        on:click=move |_| close_modal(&store, Modal::ConfirmDelete)
                    >
                        "✗"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Title/status editor
#[component]
fn ItemEditorModal() -> impl IntoView {
    let store = use_app_store();
    let slot = use_modal(store, Modal::ItemEditor);

    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_status, set_edit_status) = signal(String::from("todo"));

    // Track which item we're editing to avoid resetting fields on
    // unrelated slot updates
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);

    Effect::new(move |_| {
        if let ModalProps::ItemEditor { item_id, title, status } = slot.get().payload {
            if editing_id.get_untracked() != Some(item_id) {
                set_editing_id.set(Some(item_id));
                set_edit_title.set(title);
                set_edit_status.set(status);
            }
        } else {
            set_editing_id.set(None);
        }
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing_id.get_untracked() else {
            return;
        };
        let title = edit_title.get().trim().to_string();
        if title.is_empty() {
            return;
        }
        let status = edit_status.get();

        spawn_local(async move {
            let args = UpdateWorkItemArgs {
                id,
                title: Some(&title),
                status: Some(&status),
                memo: None,
            };
            match commands::update_work_item(&args).await {
                Ok(updated) => {
                    store_update_work_item(&store, updated);
                    close_modal(&store, Modal::ItemEditor);
                    clear_modal_props(&store, Modal::ItemEditor);
                }
                Err(msg) => push_notice(&store, msg),
            }
        });
    };

    view! {
        <Show when=move || slot.get().visible>
            <div class="modal-overlay">
                <form class="modal item-editor-modal" on:submit=on_save>
                    <input
                        type="text"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                    />
                    <StatusSelector
                        current_status=edit_status
                        on_change=move |status| set_edit_status.set(status)
                    />
                    <button type="submit">"Save"</button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| close_modal(&store, Modal::ItemEditor)
                    >
                        "Cancel"
                    </button>
                </form>
            </div>
        </Show>
    }
}

/// Shown once when an item reaches its target
#[component]
fn CelebrateModal() -> impl IntoView {
    let store = use_app_store();
    let slot = use_modal(store, Modal::Celebrate);

    let item_title = move || match slot.get().payload {
        ModalProps::Celebrate { title } => title,
        _ => String::new(),
    };

    view! {
        <Show when=move || slot.get().visible>
            <div class="modal-overlay">
                <div class="modal celebrate-modal">
                    <p>{move || format!("\"{}\" is complete!", item_title())}</p>
                    <button
                        on:click=move |_| {
                            close_modal(&store, Modal::Celebrate);
                            clear_modal_props(&store, Modal::Celebrate);
                        }
                    >
                        "Nice"
                    </button>
                </div>
            </div>
        </Show>
    }
}
