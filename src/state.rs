//! Interaction state of the menu.
//!
//! [`InteractionState`] is the stored form; [`MenuState`] is the three-state
//! view of it used by the keyboard/pointer state machine.

use std::collections::BTreeSet;

/// Resting state is `Closed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    PanelOpen,
    PanelOpenWithDropdown(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Mobile panel visible.
    pub panel_open: bool,
    /// Entry whose dropdown is open in mobile mode. At most one.
    pub open_dropdown: Option<String>,
    /// Entries whose link reports `aria-expanded="true"`.
    pub expanded: BTreeSet<String>,
    /// Entry matching the current location.
    pub active: Option<String>,
}

impl InteractionState {
    pub fn menu_state(&self) -> MenuState {
        match (self.panel_open, &self.open_dropdown) {
            (false, _) => MenuState::Closed,
            (true, None) => MenuState::PanelOpen,
            (true, Some(id)) => MenuState::PanelOpenWithDropdown(id.clone()),
        }
    }

    pub fn is_dropdown_open(&self, id: &str) -> bool {
        self.open_dropdown.as_deref() == Some(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Close every dropdown and clear every expanded indicator.
    pub fn collapse_all(&mut self) {
        self.open_dropdown = None;
        self.expanded.clear();
    }

    /// Close the others, then open `id`; or close `id` if it was the open one.
    pub fn toggle_open(&mut self, id: &str) {
        if self.is_dropdown_open(id) {
            self.open_dropdown = None;
            self.expanded.remove(id);
        } else {
            // Opening also drops indicators left by desktop keyboard reveal
            self.expanded.clear();
            self.open_dropdown = Some(id.to_string());
            self.expanded.insert(id.to_string());
        }
    }

    /// Drop every piece of state referring to `id`.
    pub fn forget(&mut self, id: &str) {
        if self.is_dropdown_open(id) {
            self.open_dropdown = None;
        }
        if self.is_active(id) {
            self.active = None;
        }
        self.expanded.remove(id);
    }

    /// Re-key state after an entry id changed.
    pub fn rename(&mut self, old: &str, new: &str) {
        if self.is_dropdown_open(old) {
            self.open_dropdown = Some(new.to_string());
        }
        if self.is_active(old) {
            self.active = Some(new.to_string());
        }
        if self.expanded.remove(old) {
            self.expanded.insert(new.to_string());
        }
    }
}
