// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Full synchronization pipeline.
//!
//! ```text
//! pull fonts repo (--no-pull skips)
//!   --> assemble manifest (scan + hash + metadata)
//!   --> write fonts.properties + fonts.properties.gz
//!   --> commit + push manifest repo (--no-push skips,
//!       clean tree skips, --dry logs instead)
//! ```

use tracing::info;

use crate::cli::sync::SyncArgs;
use crate::cmd::manifest::assemble_manifest;
use crate::config::Config;
use crate::error::Result;
use crate::git::ops::{publish_manifest_repo, refresh_fonts_repo};

/// Run the sync command end to end.
///
/// Dry-run comes from `config.global.dry`, so `--dry`, `fontsync.toml`
/// and `FONTSYNC_GLOBAL_DRY` all reach the git edges.
///
/// # Errors
///
/// Returns an error if either repository path is unset, the pull fails,
/// the catalog cannot be scanned, the manifest cannot be written, or the
/// publish fails.
pub async fn run_sync_command(args: &SyncArgs, config: &Config) -> Result<()> {
    let fonts_repo = config.fonts_repo()?.clone();
    let manifest_repo = config.manifest_repo()?.clone();
    let dry_run = config.global.dry;

    if args.no_pull {
        info!("skipping fonts repository pull");
    } else {
        refresh_fonts_repo(&fonts_repo, &config.git, dry_run)?;
    }

    // Hashing walks every font file, keep it off the async runtime.
    let assemble_config = config.clone();
    let manifest =
        tokio::task::spawn_blocking(move || assemble_manifest(&assemble_config)).await??;

    let paths = manifest.write_to(&manifest_repo, &config.paths.manifest_name)?;
    info!(
        manifest = %paths.properties.display(),
        families = manifest.entries().len(),
        "manifest written"
    );

    if args.no_push {
        info!("skipping manifest repository publish");
        return Ok(());
    }

    let message = args
        .message
        .as_deref()
        .unwrap_or(&config.git.commit_message);
    publish_manifest_repo(&manifest_repo, &config.git, message, dry_run)?;
    Ok(())
}
