// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::version_tag;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write_fonts(dir: &std::path::Path, files: &[(&str, &[u8])]) -> Vec<String> {
    let mut names = Vec::new();
    for (name, bytes) in files {
        std::fs::write(dir.join(name), bytes).unwrap();
        names.push((*name).to_string());
    }
    names.sort();
    names
}

#[test]
fn test_tag_format() {
    let temp = temp_dir();
    let fonts = write_fonts(temp.path(), &[("A.ttf", b"aaaa")]);
    let tag = version_tag(temp.path(), &fonts).unwrap();

    let s = tag.as_str();
    assert_eq!(s.len(), 13);
    assert!(s.starts_with('v'));
    assert!(s[1..].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(tag.to_string(), s);
}

#[test]
fn test_tag_is_deterministic() {
    let temp_a = temp_dir();
    let temp_b = temp_dir();
    let files: &[(&str, &[u8])] = &[("B.ttf", b"bold"), ("A.ttf", b"regular")];

    let fonts_a = write_fonts(temp_a.path(), files);
    let fonts_b = write_fonts(temp_b.path(), files);

    let tag_a = version_tag(temp_a.path(), &fonts_a).unwrap();
    let tag_b = version_tag(temp_b.path(), &fonts_b).unwrap();
    assert_eq!(tag_a, tag_b, "same names and bytes must give the same tag");
}

#[test]
fn test_tag_changes_with_content() {
    let temp = temp_dir();
    let fonts = write_fonts(temp.path(), &[("A.ttf", b"v1")]);
    let before = version_tag(temp.path(), &fonts).unwrap();

    std::fs::write(temp.path().join("A.ttf"), b"v2").unwrap();
    let after = version_tag(temp.path(), &fonts).unwrap();
    assert_ne!(before, after);
}

#[test]
fn test_tag_changes_with_rename() {
    let temp_a = temp_dir();
    let temp_b = temp_dir();
    let fonts_a = write_fonts(temp_a.path(), &[("Old.ttf", b"same")]);
    let fonts_b = write_fonts(temp_b.path(), &[("New.ttf", b"same")]);

    let tag_a = version_tag(temp_a.path(), &fonts_a).unwrap();
    let tag_b = version_tag(temp_b.path(), &fonts_b).unwrap();
    assert_ne!(tag_a, tag_b, "file names participate in the digest");
}

#[test]
fn test_missing_font_file_fails() {
    let temp = temp_dir();
    let fonts = vec!["Ghost.ttf".to_string()];
    assert!(version_tag(temp.path(), &fonts).is_err());
}
