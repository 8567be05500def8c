//! Configuration-driven site navigation menu.
//!
//! A [`menu::NavigationMenu`] renders a [`model::MenuConfiguration`] into a
//! container of a [`document::Document`] as a structured element tree and
//! keeps the mobile panel, dropdown and active-entry state in sync with it.
//!
//! The binary `sitenav` prints the rendered menu or the configuration.

pub mod api;
pub mod config;
pub mod document;
pub mod dom;
pub mod error;
pub mod events;
pub mod logging;
pub mod menu;
pub mod model;
pub mod render;
pub mod state;

pub use api::{NavHandle, NavigationApi, Page};
pub use document::{Document, MOBILE_BREAKPOINT, Viewport};
pub use error::NavError;
pub use events::{ClickTarget, EventOutcome, Key, NavEvent};
pub use menu::{DEFAULT_CONTAINER_ID, NavigationMenu};
pub use model::{EntryPatch, MenuConfiguration, MenuEntry, SubEntry};
pub use state::MenuState;
