//! Modal Registry
//!
//! Name-keyed table of modal visibility + contextual payload. The set of
//! valid names is a closed enum supplied by the application, so operating
//! on an unknown modal is unrepresentable.

use std::collections::HashMap;
use std::hash::Hash;

/// Closed set of modal kinds. `ALL` drives slot pre-registration.
pub trait ModalKey: Copy + Eq + Hash + 'static {
    const ALL: &'static [Self];
}

/// Visibility + payload for one modal kind
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalSlot<P> {
    pub visible: bool,
    pub payload: P,
}

/// Registry of independent modal slots, one per kind
///
/// Multiple different modals may be visible at once; re-opening a modal
/// that is already visible without an intervening `hide` is a caller bug.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalRegistry<K: ModalKey, P> {
    slots: HashMap<K, ModalSlot<P>>,
}

impl<K: ModalKey, P: Clone + Default> ModalRegistry<K, P> {
    pub fn new() -> Self {
        let slots = K::ALL
            .iter()
            .map(|kind| (*kind, ModalSlot::default()))
            .collect();
        Self { slots }
    }

    fn slot_mut(&mut self, kind: K) -> &mut ModalSlot<P> {
        self.slots.get_mut(&kind).expect("modal kind registered at construction")
    }

    /// Current state of one modal.
    pub fn slot(&self, kind: K) -> &ModalSlot<P> {
        self.slots.get(&kind).expect("modal kind registered at construction")
    }

    /// Make `kind` visible. `Some(props)` replaces the payload; `None`
    /// keeps whatever payload the slot already holds.
    pub fn show(&mut self, kind: K, props: Option<P>) {
        let slot = self.slot_mut(kind);
        debug_assert!(!slot.visible, "modal shown twice without an intervening hide");
        slot.visible = true;
        if let Some(props) = props {
            slot.payload = props;
        }
    }

    /// Hide `kind`. The payload stays readable until explicitly cleared,
    /// so a closing animation or immediate re-open can still use it.
    pub fn hide(&mut self, kind: K) {
        self.slot_mut(kind).visible = false;
    }

    /// Reset the payload for `kind` without touching visibility. Releases
    /// captured callbacks/data once they have been consumed.
    pub fn clear_payload(&mut self, kind: K) {
        self.slot_mut(kind).payload = P::default();
    }

    /// Force every modal to hidden with an empty payload. Used on
    /// navigation or sign-out so nothing reappears in the new context.
    pub fn reset_all(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = ModalSlot::default();
        }
    }
}

impl<K: ModalKey, P: Clone + Default> Default for ModalRegistry<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Kind {
        Confirm,
        Editor,
    }

    impl ModalKey for Kind {
        const ALL: &'static [Self] = &[Kind::Confirm, Kind::Editor];
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Props {
        title: String,
    }

    fn props(title: &str) -> Props {
        Props {
            title: title.to_string(),
        }
    }

    #[test]
    fn test_starts_hidden_and_empty() {
        let registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        for kind in Kind::ALL {
            let slot = registry.slot(*kind);
            assert!(!slot.visible);
            assert_eq!(slot.payload, Props::default());
        }
    }

    #[test]
    fn test_payload_survives_hide() {
        let mut registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        registry.show(Kind::Confirm, Some(props("Delete X?")));
        registry.hide(Kind::Confirm);

        let slot = registry.slot(Kind::Confirm);
        assert!(!slot.visible);
        assert_eq!(slot.payload.title, "Delete X?");
    }

    #[test]
    fn test_bare_reshow_keeps_previous_payload() {
        let mut registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        registry.show(Kind::Confirm, Some(props("Delete X?")));
        registry.hide(Kind::Confirm);
        registry.show(Kind::Confirm, None);

        let slot = registry.slot(Kind::Confirm);
        assert!(slot.visible);
        assert_eq!(slot.payload.title, "Delete X?");
    }

    #[test]
    fn test_explicit_payload_replaces() {
        let mut registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        registry.show(Kind::Confirm, Some(props("first")));
        registry.hide(Kind::Confirm);
        registry.show(Kind::Confirm, Some(Props::default()));

        assert_eq!(registry.slot(Kind::Confirm).payload, Props::default());
    }

    #[test]
    fn test_clear_payload_leaves_visibility() {
        let mut registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        registry.show(Kind::Editor, Some(props("editing")));
        registry.clear_payload(Kind::Editor);

        let slot = registry.slot(Kind::Editor);
        assert!(slot.visible);
        assert_eq!(slot.payload, Props::default());
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        registry.show(Kind::Confirm, Some(props("confirm")));
        registry.show(Kind::Editor, Some(props("edit")));
        registry.hide(Kind::Confirm);

        assert!(!registry.slot(Kind::Confirm).visible);
        assert!(registry.slot(Kind::Editor).visible);
        assert_eq!(registry.slot(Kind::Editor).payload.title, "edit");
    }

    #[test]
    fn test_reset_all_hides_and_empties() {
        let mut registry: ModalRegistry<Kind, Props> = ModalRegistry::new();
        registry.show(Kind::Confirm, Some(props("confirm")));
        registry.show(Kind::Editor, Some(props("edit")));
        registry.reset_all();

        for kind in Kind::ALL {
            let slot = registry.slot(*kind);
            assert!(!slot.visible);
            assert_eq!(slot.payload, Props::default());
        }
    }
}
