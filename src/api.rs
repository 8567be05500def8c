//! Page-level entry points.
//!
//! [`Page`] plays the role of the host page: it holds the document and, once
//! [`Page::ready`] has run, the navigation menu. Other page code reaches the
//! menu only through [`NavigationApi`].

use tracing::info;

use crate::document::Document;
use crate::error::NavResult;
use crate::events::{EventOutcome, NavEvent};
use crate::menu::NavigationMenu;
use crate::model::{EntryPatch, MenuConfiguration, MenuEntry};

/// Operations other page code may call on the navigation.
pub trait NavigationApi {
    /// Re-render into the container.
    fn generate(&mut self) -> NavResult<()>;
    fn set_active(&mut self, location: &str) -> bool;
    fn add_item(&mut self, entry: MenuEntry, position: Option<usize>) -> NavResult<()>;
    fn remove_item(&mut self, id: &str) -> bool;
    fn update_item(&mut self, id: &str, patch: EntryPatch) -> NavResult<bool>;
    /// Snapshot of the current configuration.
    fn get_config(&self) -> MenuConfiguration;
    /// Toggle the mobile panel; returns the new panel state.
    fn toggle(&mut self) -> bool;
}

/// A menu paired with the document it renders into.
pub struct NavHandle<'a> {
    menu: &'a mut NavigationMenu,
    document: &'a mut Document,
}

impl<'a> NavHandle<'a> {
    pub fn new(menu: &'a mut NavigationMenu, document: &'a mut Document) -> Self {
        Self { menu, document }
    }

    pub fn menu(&self) -> &NavigationMenu {
        &*self.menu
    }
}

impl NavigationApi for NavHandle<'_> {
    fn generate(&mut self) -> NavResult<()> {
        self.menu.render(self.document)
    }

    fn set_active(&mut self, location: &str) -> bool {
        self.menu.set_active(self.document, location)
    }

    fn add_item(&mut self, entry: MenuEntry, position: Option<usize>) -> NavResult<()> {
        self.menu.add_entry(self.document, entry, position)
    }

    fn remove_item(&mut self, id: &str) -> bool {
        self.menu.remove_entry(self.document, id)
    }

    fn update_item(&mut self, id: &str, patch: EntryPatch) -> NavResult<bool> {
        self.menu.update_entry(self.document, id, patch)
    }

    fn get_config(&self) -> MenuConfiguration {
        self.menu.config().clone()
    }

    fn toggle(&mut self) -> bool {
        self.menu.toggle_mobile_open(self.document)
    }
}

/// Host page owning the document and the navigation built from `config`.
pub struct Page {
    pub document: Document,
    navigation: NavigationMenu,
    ready: bool,
}

impl Page {
    pub fn new(document: Document, config: MenuConfiguration) -> Self {
        Self {
            document,
            navigation: NavigationMenu::new(config),
            ready: false,
        }
    }

    /// Like [`Page::new`] but rendering into container `container_id`.
    pub fn with_container(document: Document, config: MenuConfiguration, container_id: &str) -> Self {
        Self {
            document,
            navigation: NavigationMenu::new(config).with_container(container_id),
            ready: false,
        }
    }

    /// Document-ready: render the menu and mark the entry for the current
    /// location. Runs once; later calls do nothing.
    pub fn ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        let menu = &mut self.navigation;
        // A missing container has been logged; the menu still tracks state.
        let _ = menu.render(&mut self.document);
        let location = self.document.location.clone();
        menu.set_active(&mut self.document, &location);
        info!(
            entries = menu.config().len(),
            active = ?menu.active(),
            "navigation initialized"
        );
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The navigation API, available after [`Page::ready`].
    pub fn navigation(&mut self) -> Option<NavHandle<'_>> {
        if !self.ready {
            return None;
        }
        Some(NavHandle::new(&mut self.navigation, &mut self.document))
    }

    pub fn menu(&self) -> Option<&NavigationMenu> {
        self.ready.then_some(&self.navigation)
    }

    /// Route a host event to the menu. Ignored before [`Page::ready`].
    pub fn dispatch(&mut self, event: &NavEvent) -> EventOutcome {
        if !self.ready {
            return EventOutcome::default();
        }
        self.navigation.handle_event(&mut self.document, event)
    }
}
