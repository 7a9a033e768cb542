// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --dry             ← Simulate git mutations
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --fonts-repo DIR  ← paths.fonts_repo override
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional INI/TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Simulates git mutations (pull, commit, push).
    /// The scan and the manifest write still happen, so this is useful to
    /// inspect what a sync would publish.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Path to the fonts repository checkout.
    #[arg(short = 'f', long = "fonts-repo", value_name = "DIR")]
    pub fonts_repo: Option<PathBuf>,

    /// Path to the manifest repository checkout.
    #[arg(short = 'm', long = "manifest-repo", value_name = "DIR")]
    pub manifest_repo: Option<PathBuf>,

    /// Sets an option, such as 'git.branch=main' or 'paths.manifest_name=fonts.properties'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of fontsync.toml, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// Keys use the `section.key` form understood by the config loader.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = Vec::new();

        for option in &self.options {
            if let Some((key, value)) = option.split_once('=') {
                overrides.push((key.to_string(), value.to_string()));
            }
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if self.dry {
            overrides.push(("global.dry".to_string(), "true".to_string()));
        }

        if let Some(ref path) = self.fonts_repo {
            overrides.push(("paths.fonts_repo".to_string(), path.display().to_string()));
        }

        if let Some(ref path) = self.manifest_repo {
            overrides.push((
                "paths.manifest_repo".to_string(),
                path.display().to_string(),
            ));
        }

        overrides
    }
}
