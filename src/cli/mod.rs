// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for fontsync using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! fontsync [global options] <command>
//! scan [licenses...]
//! manifest [--output DIR]
//! sync [--no-pull] [--no-push] [--message MSG]
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod manifest;
pub mod scan;
pub mod sync;


use crate::cli::global::GlobalOptions;
use crate::cli::manifest::ManifestArgs;
use crate::cli::scan::ScanArgs;
use crate::cli::sync::SyncArgs;
use clap::{Parser, Subcommand};

/// Font Catalog Manifest Synchronizer
///
/// Scans a Google-Fonts-style catalog checkout and publishes a consolidated
/// manifest to a second repository.
#[derive(Debug, Parser)]
#[command(
    name = "fontsync",
    author,
    version,
    about = "Font Catalog Manifest Synchronizer",
    long_about = "fontsync Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans a fonts catalog checkout (families grouped under license\n\
                  roots such as apache/, ofl/ and ufl/), derives a stable version\n\
                  tag per family from the font file contents, and writes a\n\
                  consolidated properties manifest plus a gzip copy into a second\n\
                  git repository. `fontsync sync` runs the whole pipeline; see\n\
                  `fontsync <command> --help` for more information about a command.",
    after_help = "INI FILES:\n\n\
                  By default, fontsync will look for `fontsync.toml` in the\n\
                  current directory. Additional INIs can be specified with --ini,\n\
                  those will be loaded after the default one. Use --no-default-inis\n\
                  to disable auto detection and only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by fontsync.
    Inis,

    /// Scans the fonts repository and lists the catalog.
    Scan(ScanArgs),

    /// Assembles the manifest and writes it locally.
    Manifest(ManifestArgs),

    /// Runs the full pipeline: pull, scan, write, commit, push.
    Sync(SyncArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
