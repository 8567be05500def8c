//! The navigation menu component.
//!
//! [`NavigationMenu`] owns the configuration and the interaction state. Every
//! operation that changes either one re-renders into the document before
//! returning, so the rendered tree never lags behind.

use tracing::{debug, warn};

use crate::document::Document;
use crate::error::{NavError, NavResult};
use crate::model::{EntryPatch, MenuConfiguration, MenuEntry};
use crate::render::render_menu;
use crate::state::{InteractionState, MenuState};

/// Container the site pages provide for the menu.
pub const DEFAULT_CONTAINER_ID: &str = "dynamicNavigation";

/// Replace the content of container `container_id` with the rendered menu.
///
/// A missing container is logged and reported; the document is left as is.
pub fn render_into(
    doc: &mut Document,
    container_id: &str,
    config: &MenuConfiguration,
    state: &InteractionState,
) -> NavResult<()> {
    let tree = render_menu(config, state);
    if doc.replace_children(container_id, vec![tree.into()]) {
        debug!(container = container_id, entries = config.len(), "rendered navigation");
        Ok(())
    } else {
        warn!(container = container_id, "navigation container not found");
        Err(NavError::MissingContainer(container_id.to_string()))
    }
}

/// Page name used as a fallback match: the final path segment without `.html`.
///
/// `/pages/about.html` gives `about`; `/` gives an empty string.
pub fn derive_page_name(location: &str) -> &str {
    let last = location.rsplit('/').next().unwrap_or(location);
    last.strip_suffix(".html").unwrap_or(last)
}

#[derive(Debug, Clone)]
pub struct NavigationMenu {
    config: MenuConfiguration,
    state: InteractionState,
    container_id: String,
}

impl NavigationMenu {
    pub fn new(config: MenuConfiguration) -> Self {
        Self {
            config,
            state: InteractionState::default(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }

    /// Render into a different container than [`DEFAULT_CONTAINER_ID`].
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn menu_state(&self) -> MenuState {
        self.state.menu_state()
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Id of the active entry, if any.
    pub fn active(&self) -> Option<&str> {
        self.state.active.as_deref()
    }

    pub fn render(&self, doc: &mut Document) -> NavResult<()> {
        render_into(doc, &self.container_id, &self.config, &self.state)
    }

    // Mutations and toggles have already succeeded by the time we re-render;
    // a missing container is only worth the diagnostic `render_into` emits.
    fn refresh(&self, doc: &mut Document) {
        let _ = self.render(doc);
    }

    /// Mark the entry matching `location` as active.
    ///
    /// Exact `url` match wins; otherwise the derived page name is compared
    /// against entry ids. The first match in configuration order is taken.
    /// Returns whether an entry is now active.
    pub fn set_active(&mut self, doc: &mut Document, location: &str) -> bool {
        self.state.active = None;
        let exact = self.config.items().iter().find(|e| e.url == location);
        let found = exact.or_else(|| {
            let page = derive_page_name(location);
            if page.is_empty() {
                return None;
            }
            self.config.items().iter().find(|e| e.id == page)
        });
        self.state.active = found.map(|e| e.id.clone());
        debug!(location, active = ?self.state.active, "set active entry");
        self.refresh(doc);
        self.state.active.is_some()
    }

    /// Flip the mobile panel. Every toggle collapses all dropdowns.
    /// Returns the new panel state.
    pub fn toggle_mobile_open(&mut self, doc: &mut Document) -> bool {
        self.state.panel_open = !self.state.panel_open;
        self.state.collapse_all();
        debug!(open = self.state.panel_open, "toggled mobile panel");
        self.refresh(doc);
        self.state.panel_open
    }

    /// Close the mobile panel if it is open. Returns whether anything changed.
    pub fn close_panel(&mut self, doc: &mut Document) -> bool {
        if !self.state.panel_open {
            return false;
        }
        self.toggle_mobile_open(doc);
        true
    }

    /// Open or close the dropdown of `entry_id` in mobile mode, keeping at
    /// most one open. No-op on desktop widths, for unknown ids and for entries
    /// without children. Returns whether the state changed.
    pub fn toggle_dropdown(&mut self, doc: &mut Document, entry_id: &str) -> bool {
        if !doc.viewport.is_mobile() {
            return false;
        }
        if !self.is_dropdown_parent(entry_id) {
            return false;
        }
        self.state.toggle_open(entry_id);
        debug!(entry = entry_id, open = self.state.is_dropdown_open(entry_id), "toggled dropdown");
        self.refresh(doc);
        true
    }

    /// Flip only the expanded indicator of a dropdown parent (desktop keyboard
    /// reveal). Returns whether the state changed.
    pub fn toggle_expanded(&mut self, doc: &mut Document, entry_id: &str) -> bool {
        if !self.is_dropdown_parent(entry_id) {
            return false;
        }
        if !self.state.expanded.remove(entry_id) {
            self.state.expanded.insert(entry_id.to_string());
        }
        self.refresh(doc);
        true
    }

    pub fn is_dropdown_parent(&self, entry_id: &str) -> bool {
        self.config
            .get(entry_id)
            .is_some_and(MenuEntry::is_dropdown_parent)
    }

    /// Insert `entry` at `position` (end when `None`) and re-render.
    ///
    /// Duplicate ids are rejected and leave the configuration unchanged.
    pub fn add_entry(
        &mut self,
        doc: &mut Document,
        entry: MenuEntry,
        position: Option<usize>,
    ) -> NavResult<()> {
        let id = entry.id.clone();
        if let Err(err) = self.config.insert(entry, position) {
            warn!(entry = %id, error = %err, "rejected menu entry");
            return Err(err);
        }
        self.refresh(doc);
        Ok(())
    }

    /// Remove the entry with `entry_id` and re-render. Absent ids are a no-op.
    pub fn remove_entry(&mut self, doc: &mut Document, entry_id: &str) -> bool {
        if self.config.remove(entry_id).is_none() {
            return false;
        }
        self.state.forget(entry_id);
        self.refresh(doc);
        true
    }

    /// Merge `patch` into the entry with `entry_id` and re-render.
    ///
    /// `Ok(false)` when the entry does not exist. State keyed on the entry
    /// follows an id rename; an entry that lost its children is collapsed.
    pub fn update_entry(
        &mut self,
        doc: &mut Document,
        entry_id: &str,
        patch: EntryPatch,
    ) -> NavResult<bool> {
        let new_id = patch.id.clone();
        match self.config.update(entry_id, patch) {
            Ok(false) => return Ok(false),
            Ok(true) => {}
            Err(err) => {
                warn!(entry = entry_id, error = %err, "rejected menu entry update");
                return Err(err);
            }
        }
        let current_id = match new_id {
            Some(new_id) if new_id != entry_id => {
                self.state.rename(entry_id, &new_id);
                new_id
            }
            _ => entry_id.to_string(),
        };
        if !self.is_dropdown_parent(&current_id) {
            let active = self.state.active.take();
            self.state.forget(&current_id);
            self.state.active = active;
        }
        self.refresh(doc);
        Ok(true)
    }
}
