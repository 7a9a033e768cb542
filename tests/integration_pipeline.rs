// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the scan/hash/metadata/manifest pipeline.
//!
//! Builds a realistic catalog checkout on disk and checks the exact
//! manifest text that falls out.

use std::io::Read;
use std::path::Path;

use fontsync::cmd::manifest::assemble_manifest;
use fontsync::config::Config;
use fontsync::version::version_tag;

// =============================================================================
// Fixture
// =============================================================================

const ROBOTO_METADATA: &str = r#"name: "Roboto"
designer: "Christian Robertson"
license: "OFL"
category: "SANS_SERIF"
date_added: 2015-04-01
subsets: "latin"
subsets: "latin-ext"
axes {
  tag: "wght"
  min_value: 100
  max_value: 900
}
"#;

fn write_fixture_catalog(root: &Path) {
    let opensans = root.join("apache/opensans");
    std::fs::create_dir_all(&opensans).unwrap();
    std::fs::write(opensans.join("OpenSans-Regular.ttf"), b"opensans-regular").unwrap();

    let roboto = root.join("ofl/roboto");
    std::fs::create_dir_all(&roboto).unwrap();
    std::fs::write(roboto.join("Roboto-Regular.ttf"), b"roboto-regular").unwrap();
    std::fs::write(roboto.join("Roboto-Bold.ttf"), b"roboto-bold").unwrap();
    std::fs::write(roboto.join("METADATA.pb"), ROBOTO_METADATA).unwrap();
    std::fs::write(roboto.join("OFL.txt"), b"license text").unwrap();

    // Unparseable metadata: family degrades to fonts + version
    let broken = root.join("ofl/broken");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("Broken-Regular.ttf"), b"broken-regular").unwrap();
    std::fs::write(broken.join("METADATA.pb"), "this is not metadata\n").unwrap();

    // No font files: family is omitted entirely
    let empty = root.join("ofl/empty");
    std::fs::create_dir_all(&empty).unwrap();
    std::fs::write(empty.join("DESCRIPTION.en_us.html"), b"<p>empty</p>").unwrap();
}

fn fixture_config(fonts_repo: &Path) -> Config {
    let toml = format!(
        r#"
[paths]
fonts_repo = "{}"
"#,
        fonts_repo.display()
    );
    Config::parse(&toml).unwrap()
}

// =============================================================================
// Assembly
// =============================================================================

#[test]
fn pipeline_assembles_expected_manifest() {
    let temp = tempfile::tempdir().unwrap();
    write_fixture_catalog(temp.path());
    let config = fixture_config(temp.path());

    let manifest = assemble_manifest(&config).unwrap();

    // ufl/ is configured but absent: skipped, not fatal
    let ids: Vec<String> = manifest
        .entries()
        .iter()
        .map(|e| e.family.id())
        .collect();
    assert_eq!(ids, vec!["apache/opensans", "ofl/broken", "ofl/roboto"]);

    let opensans_version = version_tag(
        &temp.path().join("apache/opensans"),
        &["OpenSans-Regular.ttf".to_string()],
    )
    .unwrap();
    let broken_version = version_tag(
        &temp.path().join("ofl/broken"),
        &["Broken-Regular.ttf".to_string()],
    )
    .unwrap();
    let roboto_version = version_tag(
        &temp.path().join("ofl/roboto"),
        &[
            "Roboto-Bold.ttf".to_string(),
            "Roboto-Regular.ttf".to_string(),
        ],
    )
    .unwrap();

    let expected = format!(
        "apache/opensans=OpenSans-Regular.ttf\n\
         apache/opensans.version={opensans_version}\n\
         ofl/broken=Broken-Regular.ttf\n\
         ofl/broken.version={broken_version}\n\
         ofl/roboto=Roboto-Bold.ttf,Roboto-Regular.ttf\n\
         ofl/roboto.version={roboto_version}\n\
         ofl/roboto.name=Roboto\n\
         ofl/roboto.designer=Christian Robertson\n\
         ofl/roboto.license=OFL\n\
         ofl/roboto.category=SANS_SERIF\n\
         ofl/roboto.date_added=2015-04-01\n\
         ofl/roboto.subsets=latin,latin-ext\n\
         ofl/roboto.axes=wght:100:900\n"
    );
    assert_eq!(manifest.render(), expected);
}

#[test]
fn pipeline_version_is_stable_across_runs() {
    let temp = tempfile::tempdir().unwrap();
    write_fixture_catalog(temp.path());
    let config = fixture_config(temp.path());

    let first = assemble_manifest(&config).unwrap().render();
    let second = assemble_manifest(&config).unwrap().render();
    assert_eq!(first, second);
}

#[test]
fn pipeline_version_tracks_font_content() {
    let temp = tempfile::tempdir().unwrap();
    write_fixture_catalog(temp.path());
    let config = fixture_config(temp.path());

    let before = assemble_manifest(&config).unwrap().render();
    std::fs::write(
        temp.path().join("ofl/roboto/Roboto-Regular.ttf"),
        b"roboto-regular-v2",
    )
    .unwrap();
    let after = assemble_manifest(&config).unwrap().render();
    assert_ne!(before, after);
}

#[test]
fn pipeline_missing_fonts_repo_is_fatal() {
    let config = fixture_config(Path::new("/no/such/checkout"));
    assert!(assemble_manifest(&config).is_err());
}

// =============================================================================
// Output files
// =============================================================================

#[test]
fn pipeline_writes_properties_and_gzip() {
    let temp = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_fixture_catalog(temp.path());
    let config = fixture_config(temp.path());

    let manifest = assemble_manifest(&config).unwrap();
    let paths = manifest
        .write_to(out.path(), &config.paths.manifest_name)
        .unwrap();

    let text = std::fs::read_to_string(&paths.properties).unwrap();
    assert_eq!(text, manifest.render());

    let gz = std::fs::File::open(&paths.gzip).unwrap();
    let mut decoded = String::new();
    flate2::read::GzDecoder::new(gz)
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, text);
}
