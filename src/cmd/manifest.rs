// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest assembly command.
//!
//! ```text
//! scan_catalog --> per family:
//!   version_tag   (hash error => warn, family skipped)
//!   read_metadata (parse error => warn, fonts+version only)
//! --> Manifest --> write_to
//! ```

use tracing::{info, warn};

use crate::cli::manifest::ManifestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::manifest::{Manifest, ManifestEntry};
use crate::metadata::read_metadata;
use crate::scan::scan_catalog;
use crate::version::version_tag;

/// Scan the catalog and assemble the manifest.
///
/// One broken family never aborts the run: hash failures drop the family
/// with a warning, metadata parse failures degrade the family to its font
/// list and version tag.
///
/// # Errors
///
/// Returns an error if `paths.fonts_repo` is unset or the catalog root
/// cannot be scanned at all.
pub fn assemble_manifest(config: &Config) -> Result<Manifest> {
    let fonts_repo = config.fonts_repo()?;
    let catalog = scan_catalog(fonts_repo, &config.scan)?;

    let mut entries = Vec::with_capacity(catalog.len());
    for family in catalog.families() {
        let version = match version_tag(&family.path, &family.fonts) {
            Ok(version) => version,
            Err(e) => {
                warn!(family = %family.id(), error = %e, "failed to hash fonts, skipping family");
                continue;
            }
        };

        let metadata = match read_metadata(&family.path, &config.scan) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(family = %family.id(), error = %e, "failed to parse metadata, keeping fonts and version only");
                None
            }
        };

        entries.push(ManifestEntry {
            family: family.clone(),
            version,
            metadata,
        });
    }

    info!(families = entries.len(), "assembled manifest");
    Ok(Manifest::new(entries))
}

/// Run the manifest command: assemble and write locally, no git.
///
/// # Errors
///
/// Returns an error if assembly fails or the manifest cannot be written.
pub fn run_manifest_command(args: &ManifestArgs, config: &Config) -> Result<()> {
    let manifest = assemble_manifest(config)?;

    let out_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => config.manifest_repo()?.clone(),
    };

    let paths = manifest.write_to(&out_dir, &config.paths.manifest_name)?;
    println!("{}", paths.properties.display());
    println!("{}", paths.gzip.display());
    Ok(())
}
