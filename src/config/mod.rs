// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for fontsync.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local fontsync.toml (cwd)
//! 3. --ini files (in order)
//! 4. FONTSYNC_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FONTSYNC_GLOBAL_DRY=true        → global.dry = true
//! FONTSYNC_PATHS_FONTS_REPO=/x    → paths.fonts_repo = "/x"
//! FONTSYNC_GIT_BRANCH=main        → git.branch = "main"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitSettings, GlobalConfig, PathsConfig, ScanConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Repository paths.
    pub paths: PathsConfig,
    /// Catalog scan options.
    pub scan: ScanConfig,
    /// Git synchronization settings.
    pub git: GitSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fontsync::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("fontsync.toml")
    ///     .with_env_prefix("FONTSYNC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Normalize and validate the configuration.
    ///
    /// Extensions are lowercased and stripped of leading dots; an empty
    /// `manifest_name` falls back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error if `scan.license_dirs` or `scan.font_extensions` is
    /// empty, or if `paths.manifest_name` is not a bare file name.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.scan.license_dirs.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "scan".to_string(),
                key: "license_dirs".to_string(),
                message: "at least one license root is required".to_string(),
            }
            .into());
        }
        if self.scan.font_extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "scan".to_string(),
                key: "font_extensions".to_string(),
                message: "at least one font extension is required".to_string(),
            }
            .into());
        }
        for ext in &mut self.scan.font_extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }

        if self.paths.manifest_name.is_empty() {
            self.paths.manifest_name = "fonts.properties".to_string();
        }
        let name = &self.paths.manifest_name;
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(ConfigError::InvalidValue {
                section: "paths".to_string(),
                key: "manifest_name".to_string(),
                message: format!("'{name}' must be a bare file name"),
            }
            .into());
        }
        Ok(())
    }

    /// The fonts repo checkout, or a `MissingKey` error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when `paths.fonts_repo` is unset.
    pub fn fonts_repo(&self) -> std::result::Result<&PathBuf, ConfigError> {
        self.paths.fonts_repo.as_ref().ok_or(ConfigError::MissingKey {
            section: "paths".to_string(),
            key: "fonts_repo".to_string(),
        })
    }

    /// The manifest repo checkout, or a `MissingKey` error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when `paths.manifest_repo` is unset.
    pub fn manifest_repo(&self) -> std::result::Result<&PathBuf, ConfigError> {
        self.paths
            .manifest_repo
            .as_ref()
            .ok_or(ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "manifest_repo".to_string(),
            })
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_scan_options(&mut options);
        self.format_git_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths.fonts_repo".into(), fmt(&self.paths.fonts_repo));
        options.insert("paths.manifest_repo".into(), fmt(&self.paths.manifest_repo));
        options.insert(
            "paths.manifest_name".into(),
            self.paths.manifest_name.clone(),
        );
    }

    fn format_scan_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "scan.license_dirs".into(),
            self.scan.license_dirs.join(","),
        );
        options.insert(
            "scan.font_extensions".into(),
            self.scan.font_extensions.join(","),
        );
        options.insert("scan.metadata_file".into(), self.scan.metadata_file.clone());
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.remote".into(), self.git.remote.clone());
        options.insert("git.branch".into(), self.git.branch.clone());
        options.insert(
            "git.commit_message".into(),
            self.git.commit_message.clone(),
        );
    }
}
