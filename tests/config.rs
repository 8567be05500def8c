use anyhow::Result;
use camino::Utf8Path;
use sitenav::config::{load_configuration, load_or_default, parse_configuration, to_json};
use sitenav::MenuConfiguration;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_bare_array_with_dropdown_alias() -> Result<()> {
    let json = r#"[
        { "text": "Home", "url": "/index.html", "id": "home" },
        { "text": "About", "url": "/pages/about.html", "id": "about",
          "dropdown": [ { "text": "Executive Board", "url": "/pages/board.html" } ] }
    ]"#;
    let config = parse_configuration(json)?;
    assert_eq!(config.len(), 2);
    assert!(!config.items()[0].is_dropdown_parent());
    assert_eq!(config.items()[1].children[0].text, "Executive Board");
    Ok(())
}

#[test]
fn test_parse_wrapped_items() -> Result<()> {
    let json = r#"{ "items": [
        { "text": "Store", "url": "/pages/store.html", "id": "store", "children": [] }
    ] }"#;
    let config = parse_configuration(json)?;
    assert_eq!(config.get("store").map(|e| e.url.as_str()), Some("/pages/store.html"));
    Ok(())
}

#[test]
fn test_parse_rejects_duplicate_ids() {
    let json = r#"[
        { "text": "A", "url": "/a.html", "id": "x" },
        { "text": "B", "url": "/b.html", "id": "x" }
    ]"#;
    let err = parse_configuration(json).unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate menu entry id `x`"));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "items": [ {{ "text": "Home", "url": "/index.html", "id": "home" }} ] }}"#
    )?;
    let path = Utf8Path::from_path(file.path()).expect("utf-8 temp path");
    let config = load_configuration(path)?;
    assert_eq!(config.items()[0].id, "home");

    let config = load_or_default(Some(path))?;
    assert_eq!(config.len(), 1);
    Ok(())
}

#[test]
fn test_missing_file_has_context() {
    let err = load_configuration(Utf8Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_default_site_menu_survives_json() -> Result<()> {
    let config = load_or_default(None)?;
    assert_eq!(config, MenuConfiguration::site_default());
    assert_eq!(config.len(), 7);
    let json = to_json(&config)?;
    assert!(json.contains("\"items\""));
    assert_eq!(parse_configuration(&json)?, config);
    Ok(())
}
