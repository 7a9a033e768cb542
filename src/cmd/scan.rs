// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog listing command.

use tracing::warn;

use crate::cli::scan::ScanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::scan::scan_catalog;
use crate::version::version_tag;

/// Run the scan command: list families with font counts and version tags.
///
/// # Errors
///
/// Returns an error if `paths.fonts_repo` is unset or the catalog root
/// cannot be scanned.
pub fn run_scan_command(args: &ScanArgs, config: &Config) -> Result<()> {
    let fonts_repo = config.fonts_repo()?;

    let mut scan_config = config.scan.clone();
    if !args.licenses.is_empty() {
        scan_config.license_dirs.clone_from(&args.licenses);
    }

    let catalog = scan_catalog(fonts_repo, &scan_config)?;
    for family in catalog.families() {
        match version_tag(&family.path, &family.fonts) {
            Ok(version) => {
                println!("{} {} {}", family.id(), family.fonts.len(), version);
            }
            Err(e) => {
                warn!(family = %family.id(), error = %e, "failed to hash fonts");
                println!("{} {} -", family.id(), family.fonts.len());
            }
        }
    }
    println!("{} families", catalog.len());
    Ok(())
}
