// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from layered sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional()   fontsync.toml
//!   .add_toml_file()            --ini files, in order
//!   .with_env_prefix()          FONTSYNC_* variables
//!   .set()                      CLI overrides
//!        |
//!        v
//!    build() --> validated Config
//! ```

use std::path::{Path, PathBuf};

use config::{File, FileFormat};

use super::Config;
use crate::error::Result;

/// Builder that layers TOML files, environment variables, and direct
/// overrides into a validated [`Config`].
///
/// The INI files seen along the way are recorded so `fontsync inis` can
/// report where the configuration came from.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    inis: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            inis: Vec::new(),
        }
    }

    /// Adds a required TOML file; `build()` fails when it is missing or
    /// contains invalid TOML.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.inis.push(path.to_path_buf());
        self
    }

    /// Adds an optional TOML file, skipped silently when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.inis.push(path.to_path_buf());
        }
        self
    }

    /// Adds inline TOML (used by tests and `Config::parse`). Inline
    /// sources do not appear in [`inis`](Self::inis).
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `PREFIX_SECTION_KEY` environment variables as the layer above
    /// all files (`FONTSYNC_GLOBAL_DRY=true` sets `global.dry`).
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a `section.key` override, the highest-priority layer. This is
    /// where `--set` and the dedicated CLI flags land.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path is invalid or the value cannot be
    /// converted to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds and validates the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, any source has
    /// invalid TOML, the merged result does not deserialize into `Config`,
    /// or validation rejects it.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// The INI files that contribute to the configuration, in load order.
    #[must_use]
    pub fn inis(&self) -> &[PathBuf] {
        &self.inis
    }

    /// Numbered INI list for `fontsync inis`.
    #[must_use]
    pub fn format_inis(&self) -> Vec<String> {
        self.inis
            .iter()
            .enumerate()
            .map(|(i, path)| format!("{}. {}", i + 1, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
