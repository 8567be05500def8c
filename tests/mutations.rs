use sitenav::{
    DEFAULT_CONTAINER_ID, Document, EntryPatch, MenuConfiguration, MenuEntry, NavError,
    NavigationMenu, SubEntry, Viewport,
};

fn setup() -> (NavigationMenu, Document) {
    let mut doc = Document::new("/", Viewport::new(1024)).with_container(DEFAULT_CONTAINER_ID);
    let menu = NavigationMenu::new(MenuConfiguration::site_default());
    menu.render(&mut doc).unwrap();
    (menu, doc)
}

fn rendered_ids(doc: &Document) -> Vec<String> {
    doc.container(DEFAULT_CONTAINER_ID)
        .unwrap()
        .find_by_class("nav-link")
        .into_iter()
        .filter_map(|a| a.get_attr("data-page").map(str::to_string))
        .collect()
}

fn config_ids(menu: &NavigationMenu) -> Vec<String> {
    menu.config().items().iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_add_appends_and_remove_restores() {
    let (mut menu, mut doc) = setup();
    let original = menu.config().clone();

    menu.add_entry(&mut doc, MenuEntry::new("New", "/new.html", "new"), None)
        .unwrap();
    assert_eq!(menu.config().items().last().map(|e| e.id.as_str()), Some("new"));
    assert_eq!(rendered_ids(&doc), config_ids(&menu));

    assert!(menu.remove_entry(&mut doc, "new"));
    assert_eq!(menu.config(), &original);
    assert_eq!(rendered_ids(&doc), config_ids(&menu));
}

#[test]
fn test_add_at_position() {
    let (mut menu, mut doc) = setup();
    menu.add_entry(&mut doc, MenuEntry::new("Donate", "/donate.html", "donate"), Some(1))
        .unwrap();
    assert_eq!(menu.config().items()[1].id, "donate");
    assert_eq!(rendered_ids(&doc)[1], "donate");

    // Past the end clamps to the end
    menu.add_entry(&mut doc, MenuEntry::new("Last", "/last.html", "last"), Some(99))
        .unwrap();
    assert_eq!(menu.config().items().last().unwrap().id, "last");
}

#[test]
fn test_add_duplicate_id_is_rejected() {
    let (mut menu, mut doc) = setup();
    let before = menu.config().clone();
    let html_before = doc.container_html(DEFAULT_CONTAINER_ID);
    let err = menu
        .add_entry(&mut doc, MenuEntry::new("Home again", "/home2.html", "home"), None)
        .unwrap_err();
    assert_eq!(err, NavError::DuplicateId("home".into()));
    assert_eq!(menu.config(), &before);
    assert_eq!(doc.container_html(DEFAULT_CONTAINER_ID), html_before);
}

#[test]
fn test_add_empty_label_is_rejected() {
    let (mut menu, mut doc) = setup();
    let err = menu
        .add_entry(&mut doc, MenuEntry::new("  ", "/x.html", "x"), None)
        .unwrap_err();
    assert_eq!(err, NavError::EmptyLabel("x".into()));
    assert!(!menu.config().contains("x"));
}

#[test]
fn test_remove_missing_is_noop() {
    let (mut menu, mut doc) = setup();
    let before = menu.config().clone();
    assert!(!menu.remove_entry(&mut doc, "nope"));
    assert_eq!(menu.config(), &before);
}

#[test]
fn test_remove_active_clears_active() {
    let (mut menu, mut doc) = setup();
    menu.set_active(&mut doc, "/pages/store.html");
    assert_eq!(menu.active(), Some("store"));
    menu.remove_entry(&mut doc, "store");
    assert_eq!(menu.active(), None);
}

#[test]
fn test_update_merges_fields() {
    let (mut menu, mut doc) = setup();
    let updated = menu
        .update_entry(&mut doc, "store", EntryPatch::text("Shop"))
        .unwrap();
    assert!(updated);
    let store = menu.config().get("store").unwrap();
    assert_eq!(store.text, "Shop");
    assert_eq!(store.url, "/pages/store.html");

    let root = doc.container(DEFAULT_CONTAINER_ID).unwrap();
    let link = root
        .find_by_class("nav-link")
        .into_iter()
        .find(|a| a.get_attr("data-page") == Some("store"))
        .unwrap();
    assert_eq!(link.text_content(), "Shop");
}

#[test]
fn test_update_can_turn_entry_into_dropdown() {
    let (mut menu, mut doc) = setup();
    let patch = EntryPatch {
        children: Some(vec![SubEntry::new("Spirit Wear", "/pages/spirit-wear.html")]),
        ..Default::default()
    };
    menu.update_entry(&mut doc, "store", patch).unwrap();
    assert!(menu.is_dropdown_parent("store"));
    assert!(doc.contains(DEFAULT_CONTAINER_ID, "dropdown-store"));
}

#[test]
fn test_update_missing_is_noop() {
    let (mut menu, mut doc) = setup();
    let before = menu.config().clone();
    assert_eq!(menu.update_entry(&mut doc, "nope", EntryPatch::text("X")), Ok(false));
    assert_eq!(menu.config(), &before);
}

#[test]
fn test_update_rename_onto_existing_id_is_rejected() {
    let (mut menu, mut doc) = setup();
    let patch = EntryPatch {
        id: Some("home".into()),
        ..Default::default()
    };
    let err = menu.update_entry(&mut doc, "store", patch).unwrap_err();
    assert_eq!(err, NavError::DuplicateId("home".into()));
    assert!(menu.config().contains("store"));
}

#[test]
fn test_rename_keeps_active_entry() {
    let (mut menu, mut doc) = setup();
    menu.set_active(&mut doc, "/pages/store.html");
    let patch = EntryPatch {
        id: Some("shop".into()),
        ..Default::default()
    };
    assert_eq!(menu.update_entry(&mut doc, "store", patch), Ok(true));
    assert_eq!(menu.active(), Some("shop"));
}

#[test]
fn test_duplicate_ids_rejected_at_construction() {
    let err = MenuConfiguration::new(vec![
        MenuEntry::new("A", "/a.html", "a"),
        MenuEntry::new("B", "/b.html", "a"),
    ])
    .unwrap_err();
    assert_eq!(err, NavError::DuplicateId("a".into()));
}

#[test]
fn test_emptying_children_collapses_but_keeps_active() {
    let mut doc = Document::new("/", Viewport::new(500)).with_container(DEFAULT_CONTAINER_ID);
    let mut menu = NavigationMenu::new(MenuConfiguration::site_default());
    menu.render(&mut doc).unwrap();
    assert!(menu.toggle_dropdown(&mut doc, "about"));
    menu.set_active(&mut doc, "/pages/about.html");

    let patch = EntryPatch {
        children: Some(vec![]),
        ..Default::default()
    };
    assert_eq!(menu.update_entry(&mut doc, "about", patch), Ok(true));

    assert!(!menu.is_dropdown_parent("about"));
    assert_eq!(menu.state().open_dropdown, None);
    assert!(!menu.state().is_expanded("about"));
    assert_eq!(menu.active(), Some("about"));

    let root = doc.container(DEFAULT_CONTAINER_ID).unwrap();
    assert!(root.find_by_class("dropdown-open").is_empty());
    assert!(root.find_by_id("dropdown-about").is_none());
    let link = root
        .find_by_class("nav-link")
        .into_iter()
        .find(|a| a.get_attr("data-page") == Some("about"))
        .unwrap();
    assert!(link.has_class("active"));
    assert_eq!(link.get_attr("aria-haspopup"), None);
}
