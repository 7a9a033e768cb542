// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `scan` command.

use clap::Args;

/// Arguments for scanning the fonts catalog.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// License roots to scan (defaults to the configured `scan.license_dirs`).
    #[arg(value_name = "LICENSE")]
    pub licenses: Vec<String>,
}
