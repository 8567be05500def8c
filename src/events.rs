//! Keyboard and pointer dispatch.
//!
//! All events for the menu go through [`NavigationMenu::handle_event`] on the
//! single menu instance, so re-rendering never leaves stale or duplicated
//! handlers behind.

use tracing::trace;

use crate::document::Document;
use crate::menu::NavigationMenu;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` style name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }

    fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// What a pointer action landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    MobileToggle,
    /// A top-level link, by entry id.
    NavLink(String),
    DropdownItem,
    /// Anywhere else inside the navigation region.
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    KeyDown {
        key: Key,
        /// Entry id of the focused top-level link, if focus is on one.
        focused: Option<String>,
    },
    Click(ClickTarget),
}

impl NavEvent {
    pub fn key(name: &str) -> Self {
        NavEvent::KeyDown {
            key: Key::from_name(name),
            focused: None,
        }
    }

    pub fn key_on(name: &str, entry_id: &str) -> Self {
        NavEvent::KeyDown {
            key: Key::from_name(name),
            focused: Some(entry_id.to_string()),
        }
    }

    pub fn click_link(entry_id: &str) -> Self {
        NavEvent::Click(ClickTarget::NavLink(entry_id.to_string()))
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host should suppress the default action (following the link,
    /// scrolling on Space).
    pub default_prevented: bool,
    /// Menu state changed and the tree was rebuilt.
    pub handled: bool,
}

impl EventOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled(default_prevented: bool) -> Self {
        Self {
            default_prevented,
            handled: true,
        }
    }
}

impl NavigationMenu {
    pub fn handle_event(&mut self, doc: &mut Document, event: &NavEvent) -> EventOutcome {
        trace!(?event, "navigation event");
        match event {
            NavEvent::KeyDown { key, focused } => self.handle_key(doc, key, focused.as_deref()),
            NavEvent::Click(target) => self.handle_click(doc, target),
        }
    }

    fn handle_key(&mut self, doc: &mut Document, key: &Key, focused: Option<&str>) -> EventOutcome {
        if *key == Key::Escape {
            return if self.close_panel(doc) {
                EventOutcome::handled(false)
            } else {
                EventOutcome::ignored()
            };
        }
        if !key.activates() {
            return EventOutcome::ignored();
        }
        let Some(id) = focused else {
            return EventOutcome::ignored();
        };
        if !self.is_dropdown_parent(id) {
            return EventOutcome::ignored();
        }
        if doc.viewport.is_mobile() {
            self.toggle_dropdown(doc, id);
        } else {
            self.toggle_expanded(doc, id);
        }
        EventOutcome::handled(true)
    }

    fn handle_click(&mut self, doc: &mut Document, target: &ClickTarget) -> EventOutcome {
        match target {
            ClickTarget::MobileToggle => {
                self.toggle_mobile_open(doc);
                EventOutcome::handled(false)
            }
            ClickTarget::NavLink(id) => {
                if doc.viewport.is_mobile() && self.toggle_dropdown(doc, id) {
                    EventOutcome::handled(true)
                } else {
                    EventOutcome::ignored()
                }
            }
            ClickTarget::Outside => {
                if self.close_panel(doc) {
                    EventOutcome::handled(false)
                } else {
                    EventOutcome::ignored()
                }
            }
            ClickTarget::DropdownItem | ClickTarget::Inside => EventOutcome::ignored(),
        }
    }
}
