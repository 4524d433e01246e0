//! Loading catalogs and config from disk.

use std::fs;

use club_tui::club::Catalog;
use club_tui::config::Config;
use club_tui::error::{CatalogError, ConfigError};

#[test]
fn load_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    fs::write(
        &path,
        r#"{"events": [{
            "id": 12,
            "title": "Reverse Engineering 101",
            "startDate": "February 5, 2026",
            "endDate": "February 5, 2026",
            "time": "6:00 PM - 8:00 PM",
            "location": "CSC B-10",
            "description": "Ghidra basics.",
            "tags": ["Workshop", "RE"],
            "whatToExpect": ["Crackmes"],
            "requirements": "Laptop"
        }]}"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    let ev = catalog.find("12").unwrap();
    assert_eq!(ev.tags, ["Workshop", "RE"]);
    assert_eq!(ev.requirements.as_deref(), Some("Laptop"));
    assert_eq!(ev.image, None);
}

#[test]
fn missing_catalog_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    match Catalog::load(&path) {
        Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn bundled_catalog_loads() {
    let catalog = Catalog::bundled().unwrap();
    assert!(catalog.len() >= 5);
    for ev in catalog.events() {
        assert!(!ev.title.is_empty());
    }
}

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "events = \"/srv/events.json\"\n[theme]\npreset = \"light\"\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.events.as_deref(), Some(std::path::Path::new("/srv/events.json")));
    let theme = cfg.theme.into_theme().unwrap();
    assert_eq!(theme.name, "light");
}

#[test]
fn unknown_preset_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[theme]\npreset = \"matrix\"\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert!(matches!(
        cfg.theme.into_theme(),
        Err(ConfigError::UnknownPreset(name)) if name == "matrix"
    ));
}
