//! Minimal structured element tree.
//!
//! Markup is built node by node (create element, set attribute, append child)
//! and only turned into text by [`Element::to_html`], which escapes every text
//! node and attribute value.

use indexmap::IndexMap;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with ordered attributes and children.
///
/// `class` is kept as an ordered list rather than a plain attribute so classes
/// can be toggled without string surgery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of [`Element::add_class`].
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Builder form of [`Element::append`].
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.append(node);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        fn rec(el: &Element, out: &mut String) {
            for node in &el.children {
                match node {
                    Node::Text(t) => out.push_str(t),
                    Node::Element(child) => rec(child, out),
                }
            }
        }
        rec(self, &mut out);
        out
    }

    /// Direct element children, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first (pre-order) walk over this element and its descendants.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        fn rec<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
            out.push(el);
            for child in el.element_children() {
                rec(child, out);
            }
        }
        rec(self, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|el| el.id() == Some(id))
    }

    /// All descendants (including `self`) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// Serialize to HTML with two-space indentation.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(1024);
        write_element(&mut out, self, 0);
        out
    }
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn write_open_tag(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);
    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&el.classes.join(" ")));
        out.push('"');
    }
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
}

fn write_element(out: &mut String, el: &Element, level: usize) {
    indent(out, level);
    write_open_tag(out, el);

    let inline = el.children.iter().all(|n| matches!(n, Node::Text(_)));
    if inline {
        // Text-only elements stay on one line
        for node in &el.children {
            if let Node::Text(t) = node {
                out.push_str(&html_escape::encode_text(t));
            }
        }
    } else {
        out.push('\n');
        for node in &el.children {
            match node {
                Node::Element(child) => write_element(out, child, level + 1),
                Node::Text(t) => {
                    indent(out, level + 1);
                    out.push_str(&html_escape::encode_text(t));
                    out.push('\n');
                }
            }
        }
        indent(out, level);
    }
    out.push_str(&format!("</{}>\n", el.tag));
}
