// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `manifest` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for assembling the manifest without touching git.
#[derive(Debug, Clone, Default, Args)]
pub struct ManifestArgs {
    /// Directory to write the manifest into (defaults to `paths.manifest_repo`).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}
