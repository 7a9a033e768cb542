// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for fontsync.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ScanConfig, GitSettings
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate git mutations without executing them.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file (empty disables the file layer).
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Repository paths configuration.
///
/// `fonts_repo` and `manifest_repo` are required by every command that
/// touches the catalog; they stay optional here so `options` can dump a
/// partial configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Local checkout of the font source repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts_repo: Option<PathBuf>,
    /// Local checkout of the manifest repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_repo: Option<PathBuf>,
    /// Manifest file name inside the manifest repo (bare file name).
    pub manifest_name: String,
}

/// Catalog scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// License root directories, scanned in order.
    pub license_dirs: Vec<String>,
    /// Font file extensions (matched case-insensitively).
    pub font_extensions: Vec<String>,
    /// Per-family metadata file name.
    pub metadata_file: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            license_dirs: vec![
                "apache".to_string(),
                "ofl".to_string(),
                "ufl".to_string(),
            ],
            font_extensions: vec!["ttf".to_string(), "otf".to_string(), "ttc".to_string()],
            metadata_file: "METADATA.pb".to_string(),
        }
    }
}

/// Git synchronization settings shared by both repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// Remote name used for pull and push.
    pub remote: String,
    /// Branch used for pull and push.
    pub branch: String,
    /// Commit message for manifest updates.
    pub commit_message: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Update font manifest".to_string(),
        }
    }
}
