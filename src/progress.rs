//! Optimistic Progress Mutations
//!
//! Applies a progress change to the store immediately, dispatches the
//! remote update, and reconciles the authoritative snapshot back in on
//! success. On failure the captured pre-mutation value is restored and a
//! notice is shown. While a mutation for an item is pending, further
//! mutations for that item are refused; the affordance layer reads
//! `progress_pending` to disable its buttons.
//!
//! The remote call carries the absolute new value, never a delta, so a
//! user retry after a failure is idempotent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::modal::{open_modal, Modal, ModalProps};
use crate::notify::push_notice;
use crate::store::{store_update_work_item, AppStateStoreFields, AppStore};

/// Progress after one step, or None when the step would leave bounds
pub fn plan_step(progress: i32, target: i32, delta: i32) -> Option<i32> {
    let next = progress + delta;
    (0..=target).contains(&next).then_some(next)
}

/// Jump straight to the target, or None when already there
pub fn plan_completion(progress: i32, target: i32) -> Option<i32> {
    (progress < target).then_some(target)
}

/// Move progress up by one unit; no-op at the target
pub fn increment_progress(store: AppStore, id: u32) {
    step_progress(store, id, 1);
}

/// Move progress down by one unit; no-op at zero
pub fn decrement_progress(store: AppStore, id: u32) {
    step_progress(store, id, -1);
}

/// Jump to the target in a single mutation; no-op when already complete
pub fn complete_now(store: AppStore, id: u32) {
    let Some((progress, target)) = current_progress(&store, id) else {
        return;
    };
    let Some(next) = plan_completion(progress, target) else {
        return;
    };
    submit_progress(store, id, next, progress);
}

/// The `loading` flag for one item's progress mutation
pub fn progress_pending(store: &AppStore, id: u32) -> bool {
    store.inflight().read().is_pending(id)
}

fn step_progress(store: AppStore, id: u32, delta: i32) {
    let Some((progress, target)) = current_progress(&store, id) else {
        return;
    };
    // Out-of-bounds requests are ignored outright: no store write, no call
    let Some(next) = plan_step(progress, target, delta) else {
        return;
    };
    submit_progress(store, id, next, progress);
}

fn current_progress(store: &AppStore, id: u32) -> Option<(i32, i32)> {
    store
        .items()
        .read_untracked()
        .iter()
        .find(|item| item.id == id)
        .map(|item| (item.target_progress, item.target_value))
}

fn submit_progress(store: AppStore, id: u32, next: i32, prior: i32) {
    // Re-entrancy guard: one in-flight mutation per item
    if !store.inflight().write().begin(id, prior) {
        return;
    }

    // Optimistic local write, then fire the remote call
    store.items().write().iter_mut()
        .find(|item| item.id == id)
        .map(|item| item.target_progress = next);

    spawn_local(async move {
        match commands::update_progress(id, next).await {
            Ok(updated) => {
                let prior = store.inflight().write().finish(id);
                let completed_now =
                    updated.is_complete() && prior.map(|p| p < updated.target_value).unwrap_or(false);

                // Authoritative snapshot overwrites the optimistic value;
                // no-ops if the item was deleted meanwhile
                store_update_work_item(&store, updated.clone());

                let celebrate_open = store.modals().read_untracked().slot(Modal::Celebrate).visible;
                if completed_now && !celebrate_open {
                    open_modal(
                        &store,
                        Modal::Celebrate,
                        Some(ModalProps::Celebrate { title: updated.title }),
                    );
                }
            }
            Err(msg) => {
                web_sys::console::log_1(
                    &format!("[SYNC] progress update for #{} failed: {}", id, msg).into(),
                );
                // Roll back to the captured pre-mutation value, unless the
                // item no longer exists locally
                if let Some(prior) = store.inflight().write().finish(id) {
                    store.items().write().iter_mut()
                        .find(|item| item.id == id)
                        .map(|item| item.target_progress = prior);
                }
                push_notice(&store, msg);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_within_bounds() {
        assert_eq!(plan_step(3, 10, 1), Some(4));
        assert_eq!(plan_step(3, 10, -1), Some(2));
    }

    #[test]
    fn test_step_blocked_at_bounds() {
        // increment at target
        assert_eq!(plan_step(10, 10, 1), None);
        // decrement at zero
        assert_eq!(plan_step(0, 10, -1), None);
    }

    #[test]
    fn test_step_near_target() {
        // target_value=10, progress=9: one step is valid and lands exactly
        // on the target
        assert_eq!(plan_step(9, 10, 1), Some(10));
    }

    #[test]
    fn test_completion_jumps_to_target() {
        assert_eq!(plan_completion(0, 10), Some(10));
        assert_eq!(plan_completion(7, 10), Some(10));
    }

    #[test]
    fn test_completion_noop_at_target() {
        assert_eq!(plan_completion(10, 10), None);
    }

    #[test]
    fn test_rapid_double_increment_yields_single_submission() {
        use ui_sync::InFlight;

        let mut inflight: InFlight<u32, i32> = InFlight::new();

        // First click: 9 -> 10 passes the bounds guard and claims the slot
        let next = plan_step(9, 10, 1).unwrap();
        assert_eq!(next, 10);
        assert!(inflight.begin(7, 9));

        // Second click while loading is refused before any dispatch
        assert!(!inflight.begin(7, next));

        // Resolution clears the flag and yields the rollback point
        assert_eq!(inflight.finish(7), Some(9));
        assert!(!inflight.is_pending(7));
    }
}
