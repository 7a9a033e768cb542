// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::scan_catalog;
use crate::config::types::ScanConfig;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn fixture_catalog() -> TempDir {
    let temp = temp_dir();
    let root = temp.path();

    std::fs::create_dir_all(root.join("ofl/roboto")).unwrap();
    std::fs::write(root.join("ofl/roboto/Roboto-Regular.ttf"), b"regular").unwrap();
    std::fs::write(root.join("ofl/roboto/Roboto-Bold.ttf"), b"bold").unwrap();
    std::fs::write(root.join("ofl/roboto/METADATA.pb"), b"name: \"Roboto\"\n").unwrap();

    std::fs::create_dir_all(root.join("apache/opensans")).unwrap();
    std::fs::write(root.join("apache/opensans/OpenSans.ttf"), b"os").unwrap();

    // Family with no fonts must be omitted
    std::fs::create_dir_all(root.join("ofl/empty")).unwrap();
    std::fs::write(root.join("ofl/empty/DESCRIPTION.txt"), b"x").unwrap();

    temp
}

#[test]
fn test_scan_orders_by_license_then_family() {
    let temp = fixture_catalog();
    let catalog = scan_catalog(temp.path(), &ScanConfig::default()).unwrap();

    let ids: Vec<String> = catalog.families().iter().map(super::FontFamily::id).collect();
    // apache root is scanned before ofl; ufl is missing and skipped
    assert_eq!(ids, vec!["apache/opensans", "ofl/roboto"]);
}

#[test]
fn test_scan_sorts_fonts() {
    let temp = fixture_catalog();
    let catalog = scan_catalog(temp.path(), &ScanConfig::default()).unwrap();

    let roboto = &catalog.families()[1];
    assert_eq!(roboto.fonts, vec!["Roboto-Bold.ttf", "Roboto-Regular.ttf"]);
}

#[test]
fn test_scan_ignores_non_font_files() {
    let temp = fixture_catalog();
    let catalog = scan_catalog(temp.path(), &ScanConfig::default()).unwrap();

    assert!(
        catalog
            .families()
            .iter()
            .all(|f| f.fonts.iter().all(|n| !n.ends_with(".pb"))),
        "metadata files must not appear in font lists"
    );
}

#[test]
fn test_scan_extension_case_insensitive() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("ofl/shouty")).unwrap();
    std::fs::write(temp.path().join("ofl/shouty/SHOUTY.TTF"), b"x").unwrap();

    let catalog = scan_catalog(temp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.families()[0].fonts, vec!["SHOUTY.TTF"]);
}

#[test]
fn test_scan_skips_hidden_entries() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("ofl/.hidden")).unwrap();
    std::fs::write(temp.path().join("ofl/.hidden/Sneaky.ttf"), b"x").unwrap();
    std::fs::create_dir_all(temp.path().join("ofl/visible")).unwrap();
    std::fs::write(temp.path().join("ofl/visible/.Hidden.ttf"), b"x").unwrap();
    std::fs::write(temp.path().join("ofl/visible/Shown.ttf"), b"x").unwrap();

    let catalog = scan_catalog(temp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.families()[0].fonts, vec!["Shown.ttf"]);
}

#[test]
fn test_scan_missing_repo_root_fails() {
    let temp = temp_dir();
    let missing = temp.path().join("nope");
    assert!(scan_catalog(&missing, &ScanConfig::default()).is_err());
}

#[test]
fn test_scan_empty_roots_give_empty_catalog() {
    let temp = temp_dir();
    let catalog = scan_catalog(temp.path(), &ScanConfig::default()).unwrap();
    assert!(catalog.is_empty());
}
