// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Read;
use std::path::PathBuf;

use super::{Manifest, ManifestEntry, escape_key, escape_value, format_number};
use crate::metadata::{Axis, FamilyMetadata};
use crate::scan::FontFamily;
use crate::version::version_tag;

fn family(license: &str, directory: &str, fonts: &[&str]) -> FontFamily {
    FontFamily {
        license: license.to_string(),
        directory: directory.to_string(),
        path: PathBuf::from(format!("/fonts/{license}/{directory}")),
        fonts: fonts.iter().map(ToString::to_string).collect(),
    }
}

fn entry_with_metadata() -> ManifestEntry {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("Roboto-Regular.ttf"), b"regular").unwrap();
    let fonts = vec!["Roboto-Regular.ttf".to_string()];
    let version = version_tag(temp.path(), &fonts).unwrap();

    ManifestEntry {
        family: family("ofl", "roboto", &["Roboto-Regular.ttf"]),
        version,
        metadata: Some(FamilyMetadata {
            name: Some("Roboto".to_string()),
            designer: Some("Christian Robertson".to_string()),
            license: Some("OFL".to_string()),
            category: Some("SANS_SERIF".to_string()),
            date_added: None,
            subsets: vec!["latin".to_string(), "latin-ext".to_string()],
            axes: vec![Axis {
                tag: "wght".to_string(),
                min_value: 100.0,
                max_value: 1000.0,
            }],
        }),
    }
}

#[test]
fn test_render_with_metadata() {
    let entry = entry_with_metadata();
    let version = entry.version.clone();
    let manifest = Manifest::new(vec![entry]);

    let expected = format!(
        "ofl/roboto=Roboto-Regular.ttf\n\
         ofl/roboto.version={version}\n\
         ofl/roboto.name=Roboto\n\
         ofl/roboto.designer=Christian Robertson\n\
         ofl/roboto.license=OFL\n\
         ofl/roboto.category=SANS_SERIF\n\
         ofl/roboto.subsets=latin,latin-ext\n\
         ofl/roboto.axes=wght:100:1000\n"
    );
    assert_eq!(manifest.render(), expected);
}

#[test]
fn test_render_without_metadata() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("A.ttf"), b"a").unwrap();
    std::fs::write(temp.path().join("B.otf"), b"b").unwrap();
    let fonts = vec!["A.ttf".to_string(), "B.otf".to_string()];
    let version = version_tag(temp.path(), &fonts).unwrap();

    let manifest = Manifest::new(vec![ManifestEntry {
        family: family("apache", "opensans", &["A.ttf", "B.otf"]),
        version: version.clone(),
        metadata: None,
    }]);

    let expected =
        format!("apache/opensans=A.ttf,B.otf\napache/opensans.version={version}\n");
    assert_eq!(manifest.render(), expected);
}

#[test]
fn test_axes_separators_stay_literal() {
    // tag:min:max joins with plain colons; only the tag text is escaped
    let mut entry = entry_with_metadata();
    entry.metadata.as_mut().unwrap().axes = vec![Axis {
        tag: "od:dtag".to_string(),
        min_value: 1.0,
        max_value: 2.5,
    }];
    let manifest = Manifest::new(vec![entry]);
    let render = manifest.render();
    assert!(
        render.contains("ofl/roboto.axes=od\\:dtag:1:2.5\n"),
        "{render}"
    );
}

#[test]
fn test_render_empty_manifest() {
    assert_eq!(Manifest::default().render(), "");
}

#[test]
fn test_escaping() {
    assert_eq!(escape_value("a=b"), "a\\=b");
    assert_eq!(escape_value("a:b"), "a\\:b");
    assert_eq!(escape_value("a\\b"), "a\\\\b");
    assert_eq!(escape_value("a\nb"), "a\\nb");
    assert_eq!(escape_key("my family"), "my\\ family");
}

#[test]
fn test_escaping_leading_space() {
    // leading space survives a properties reader, interior spaces are fine
    assert_eq!(escape_value(" leading"), "\\ leading");
    assert_eq!(escape_value("in side "), "in side ");
}

#[test]
fn test_format_number_trims_integral() {
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(8.0), "8");
    assert_eq!(format_number(1000.5), "1000.5");
    assert_eq!(format_number(-5.0), "-5");
}

#[test]
fn test_write_to_produces_both_files() {
    let out = tempfile::tempdir().unwrap();
    let entry = entry_with_metadata();
    let manifest = Manifest::new(vec![entry]);

    let paths = manifest.write_to(out.path(), "fonts.properties").unwrap();
    assert_eq!(paths.properties, out.path().join("fonts.properties"));
    assert_eq!(paths.gzip, out.path().join("fonts.properties.gz"));

    let text = std::fs::read_to_string(&paths.properties).unwrap();
    assert_eq!(text, manifest.render());

    // The gzip copy must decode back to the exact properties text
    let gz = std::fs::File::open(&paths.gzip).unwrap();
    let mut decoder = flate2::read::GzDecoder::new(gz);
    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, text);
}

#[test]
fn test_write_to_overwrites_previous() {
    let out = tempfile::tempdir().unwrap();
    std::fs::write(out.path().join("fonts.properties"), b"stale").unwrap();

    let manifest = Manifest::default();
    manifest.write_to(out.path(), "fonts.properties").unwrap();
    let text = std::fs::read_to_string(out.path().join("fonts.properties")).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_write_to_rejects_pathy_names() {
    let out = tempfile::tempdir().unwrap();
    let manifest = Manifest::default();
    assert!(manifest.write_to(out.path(), "sub/fonts.properties").is_err());
    assert!(manifest.write_to(out.path(), "").is_err());
}
