//! Build the navigation subtree from a configuration and interaction state.
//!
//! The output is a pure function of its inputs, so rendering the same
//! configuration and state twice yields identical trees.

use crate::dom::Element;
use crate::model::{MenuConfiguration, MenuEntry, SubEntry};
use crate::state::InteractionState;

/// Id of the top-level list element.
pub const MENU_LIST_ID: &str = "navMenu";
pub const DROPDOWN_INDICATOR: &str = "▼";
pub const MOBILE_TOGGLE_LABEL: &str = "☰";

/// Build `div.nav-container` holding the mobile toggle and the menu list.
pub fn render_menu(config: &MenuConfiguration, state: &InteractionState) -> Element {
    let toggle = Element::new("button")
        .class("mobile-toggle")
        .attr("type", "button")
        .attr("aria-label", "Toggle mobile menu")
        .attr("aria-expanded", bool_attr(state.panel_open))
        .attr("aria-controls", MENU_LIST_ID)
        .text(MOBILE_TOGGLE_LABEL);

    let mut list = Element::new("ul")
        .class("nav-menu")
        .attr("id", MENU_LIST_ID)
        .attr("role", "menubar");
    if state.panel_open {
        list.add_class("mobile-open");
    }
    for entry in config.items() {
        list.append(render_item(entry, state));
    }

    Element::new("div")
        .class("nav-container")
        .child(toggle)
        .child(list)
}

fn render_item(entry: &MenuEntry, state: &InteractionState) -> Element {
    let mut item = Element::new("li").class("nav-item").attr("role", "none");
    if entry.is_dropdown_parent() && state.is_dropdown_open(&entry.id) {
        item.add_class("dropdown-open");
    }

    let mut link = Element::new("a")
        .class("nav-link")
        .attr("href", entry.url.as_str())
        .attr("role", "menuitem");
    if entry.is_dropdown_parent() {
        link.set_attr("aria-haspopup", "true");
        link.set_attr("aria-expanded", bool_attr(state.is_expanded(&entry.id)));
        link.set_attr("aria-controls", entry.dropdown_dom_id());
    }
    link.set_attr("data-page", entry.id.as_str());
    if state.is_active(&entry.id) {
        link.add_class("active");
        link.set_attr("aria-current", "page");
    } else {
        link.set_attr("aria-current", "false");
    }
    link = link.text(entry.text.as_str());

    if !entry.is_dropdown_parent() {
        return item.child(link);
    }

    link.append(
        Element::new("span")
            .class("dropdown-indicator")
            .attr("aria-hidden", "true")
            .text(DROPDOWN_INDICATOR),
    );
    let mut dropdown = Element::new("div")
        .class("dropdown")
        .attr("id", entry.dropdown_dom_id())
        .attr("role", "menu")
        .attr("aria-label", format!("{} submenu", entry.text));
    for child in &entry.children {
        dropdown.append(render_child(child));
    }
    item.child(link).child(dropdown)
}

fn render_child(child: &SubEntry) -> Element {
    Element::new("a")
        .class("dropdown-item")
        .attr("href", child.url.as_str())
        .attr("role", "menuitem")
        .text(child.text.as_str())
}

fn bool_attr(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}
