//! Host page model: mount points, viewport and current location.

use indexmap::IndexMap;

use crate::dom::{Element, Node};

/// Width at or below which mobile interaction mode applies.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1024 }
    }
}

/// A page with uniquely identified containers.
///
/// Containers are registered up front (they are part of the static page); the
/// navigation only ever replaces their children.
#[derive(Debug, Clone)]
pub struct Document {
    containers: IndexMap<String, Element>,
    pub viewport: Viewport,
    /// Current location path, e.g. `/pages/about.html`.
    pub location: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            containers: IndexMap::new(),
            viewport: Viewport::default(),
            location: "/".to_string(),
        }
    }
}

impl Document {
    pub fn new(location: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            containers: IndexMap::new(),
            viewport,
            location: location.into(),
        }
    }

    /// Register an empty `<nav>` container with the given id.
    pub fn with_container(mut self, id: &str) -> Self {
        self.add_container(id, "nav");
        self
    }

    pub fn add_container(&mut self, id: &str, tag: &str) {
        let el = Element::new(tag).class("navigation").attr("id", id);
        self.containers.insert(id.to_string(), el);
    }

    pub fn container(&self, id: &str) -> Option<&Element> {
        self.containers.get(id)
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport.width = width;
    }

    /// Replace every child of container `id`. Returns `false` when the
    /// container does not exist.
    pub fn replace_children(&mut self, id: &str, children: Vec<Node>) -> bool {
        match self.containers.get_mut(id) {
            Some(el) => {
                el.children = children;
                true
            }
            None => false,
        }
    }

    /// Whether the element with `element_id` lies inside container `container_id`.
    pub fn contains(&self, container_id: &str, element_id: &str) -> bool {
        self.container(container_id)
            .and_then(|c| c.find_by_id(element_id))
            .is_some()
    }

    /// Serialized HTML of a container, or `None` when it does not exist.
    pub fn container_html(&self, id: &str) -> Option<String> {
        self.container(id).map(Element::to_html)
    }
}
