use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{NavError, NavResult};

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

/// A link inside a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntry {
    pub text: String,
    pub url: String,
}

impl SubEntry {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A top-level menu entry.
///
/// In configuration files the child list may also be spelled `dropdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub text: String,
    pub url: String,
    pub id: String,
    #[serde(default, alias = "dropdown", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SubEntry>,
}

impl MenuEntry {
    pub fn new(text: impl Into<String>, url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SubEntry>) -> Self {
        self.children = children;
        self
    }

    /// True when the entry has at least one child link.
    pub fn is_dropdown_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// Id of the nested list element rendered for this entry.
    pub fn dropdown_dom_id(&self) -> String {
        format!("dropdown-{}", self.id)
    }

    /// Shallow merge: every field present in `patch` replaces ours.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(children) = patch.children {
            self.children = children;
        }
    }
}

/// Partial update for [`MenuEntry`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "dropdown")]
    pub children: Option<Vec<SubEntry>>,
}

impl EntryPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MenuConfiguration
// ────────────────────────────────────────────────────────────────────────────

/// Accepted on-disk shapes: a bare array or `{ "items": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigRepr {
    Wrapped { items: Vec<MenuEntry> },
    Bare(Vec<MenuEntry>),
}

impl TryFrom<ConfigRepr> for MenuConfiguration {
    type Error = NavError;

    fn try_from(repr: ConfigRepr) -> NavResult<Self> {
        let items = match repr {
            ConfigRepr::Wrapped { items } => items,
            ConfigRepr::Bare(items) => items,
        };
        MenuConfiguration::new(items)
    }
}

/// Ordered top-level entries. Order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRepr")]
pub struct MenuConfiguration {
    items: Vec<MenuEntry>,
}

impl MenuConfiguration {
    /// Build a configuration, checking id uniqueness and labels.
    pub fn new(items: Vec<MenuEntry>) -> NavResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            validate_entry(item)?;
            if !seen.insert(item.id.as_str()) {
                return Err(NavError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Insert at `position` (clamped to the end), or append when `None`.
    /// Rejects duplicate ids and empty labels without touching the list.
    pub fn insert(&mut self, entry: MenuEntry, position: Option<usize>) -> NavResult<()> {
        validate_entry(&entry)?;
        if self.contains(&entry.id) {
            return Err(NavError::DuplicateId(entry.id));
        }
        let at = position.map_or(self.items.len(), |p| p.min(self.items.len()));
        self.items.insert(at, entry);
        Ok(())
    }

    /// Remove the entry with `id`, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<MenuEntry> {
        let idx = self.position(id)?;
        Some(self.items.remove(idx))
    }

    /// Merge `patch` into the entry with `id`. `Ok(false)` when no such entry.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> NavResult<bool> {
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        if let Some(new_id) = patch.id.as_deref() {
            if new_id != id && self.contains(new_id) {
                return Err(NavError::DuplicateId(new_id.to_string()));
            }
        }
        let mut merged = self.items[idx].clone();
        merged.apply(patch);
        validate_entry(&merged)?;
        self.items[idx] = merged;
        Ok(true)
    }

    /// The navigation shipped with the site.
    pub fn site_default() -> Self {
        let items = vec![
            MenuEntry::new("Home", "/index.html", "home"),
            MenuEntry::new("Calendar", "/pages/calendar.html", "calendar").with_children(vec![
                SubEntry::new("Event Calendar", "/pages/calendar.html"),
                SubEntry::new("Meeting Dates", "/pages/meetings.html"),
                SubEntry::new("School Calendar", "/pages/school-calendar.html"),
            ]),
            MenuEntry::new("About", "/pages/about.html", "about").with_children(vec![
                SubEntry::new("Executive Board", "/pages/board.html"),
                SubEntry::new("Committees", "/pages/committees.html"),
                SubEntry::new("PTSA Handbook", "/pages/handbook.html"),
                SubEntry::new("What We Fund", "/pages/funding.html"),
            ]),
            MenuEntry::new("Get Involved", "/pages/get-involved.html", "get-involved")
                .with_children(vec![
                    SubEntry::new("Volunteer Opportunities", "/pages/volunteer.html"),
                    SubEntry::new("Room Parents", "/pages/room-parents.html"),
                    SubEntry::new("Adopt-A-Class", "/pages/adopt-class.html"),
                    SubEntry::new("Join a Committee", "/pages/join-committee.html"),
                ]),
            MenuEntry::new("Programs", "/pages/programs.html", "programs").with_children(vec![
                SubEntry::new("Adopt-A-Class", "/pages/adopt-class.html"),
                SubEntry::new("Fundraising", "/pages/fundraising.html"),
                SubEntry::new("Sponsorship", "/pages/sponsorship.html"),
                SubEntry::new("Business Directory", "/pages/business-directory.html"),
            ]),
            MenuEntry::new("Store", "/pages/store.html", "store"),
            MenuEntry::new("Resources", "/pages/resources.html", "resources").with_children(vec![
                SubEntry::new("Budget & Finances", "/pages/budget.html"),
                SubEntry::new("Forms & Documents", "/pages/forms.html"),
                SubEntry::new("Meeting Minutes", "/pages/minutes.html"),
                SubEntry::new("Recommended Partners", "/pages/partners.html"),
            ]),
        ];
        Self { items }
    }
}

fn validate_entry(entry: &MenuEntry) -> NavResult<()> {
    if entry.text.trim().is_empty() {
        return Err(NavError::EmptyLabel(entry.id.clone()));
    }
    if entry.id.is_empty() {
        return Err(NavError::InvalidConfig(format!(
            "entry `{}` has an empty id",
            entry.text
        )));
    }
    Ok(())
}
