// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let mut config = Config::default();
    config.resolve_and_validate().unwrap();

    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.scan.license_dirs, vec!["apache", "ofl", "ufl"]);
    assert_eq!(config.scan.font_extensions, vec!["ttf", "otf", "ttc"]);
    assert_eq!(config.scan.metadata_file, "METADATA.pb");
    assert_eq!(config.paths.manifest_name, "fonts.properties");
    assert_eq!(config.git.remote, "origin");
    assert_eq!(config.git.branch, "main");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
dry = true
output_log_level = 4

[paths]
fonts_repo = "/srv/fonts"
manifest_repo = "/srv/manifest"

[git]
branch = "master"
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.paths.fonts_repo.as_deref(),
        Some(std::path::Path::new("/srv/fonts"))
    );
    assert_eq!(config.git.branch, "master");
    // Defaults still apply to untouched sections
    assert_eq!(config.scan.license_dirs, vec!["apache", "ofl", "ufl"]);
}

#[test]
fn test_extensions_normalized() {
    let toml = r#"
[scan]
font_extensions = [".TTF", "Otf"]
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.scan.font_extensions, vec!["ttf", "otf"]);
}

#[test]
fn test_empty_license_dirs_rejected() {
    let toml = r"
[scan]
license_dirs = []
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_manifest_name_must_be_bare() {
    let toml = r#"
[paths]
manifest_name = "sub/fonts.properties"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_unknown_key_rejected() {
    let toml = r"
[global]
no_such_option = 1
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_missing_repo_errors() {
    let config = Config::default();
    assert!(config.fonts_repo().is_err());
    assert!(config.manifest_repo().is_err());

    let config = Config::parse("[paths]\nfonts_repo = '/x'\n").unwrap();
    assert_eq!(config.fonts_repo().unwrap(), &PathBuf::from("/x"));
}

#[test]
fn test_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nremote = 'upstream'\n")
        .set("git.remote", "origin")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.git.remote, "origin");
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse("[paths]\nfonts_repo = '/srv/fonts'\n").unwrap();
    let options = config.format_options();

    let keys: Vec<&str> = options
        .iter()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted, "options must be sorted by key");
    assert!(options.iter().any(|l| l.contains("paths.fonts_repo")));
    assert!(options.iter().any(|l| l.contains("git.commit_message")));
}

#[test]
fn test_loader_records_inis() {
    let temp = tempfile::tempdir().unwrap();
    let ini = temp.path().join("site.toml");
    std::fs::write(&ini, "[global]\ndry = false\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(temp.path().join("missing.toml"))
        .add_toml_file(&ini)
        .add_toml_str("[git]\nbranch = 'main'\n");

    // absent optional files and inline sources are not listed
    assert_eq!(loader.inis(), std::slice::from_ref(&ini));
    assert_eq!(loader.format_inis(), vec![format!("1. {}", ini.display())]);
}
