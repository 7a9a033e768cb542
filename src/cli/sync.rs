// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `sync` command.

use clap::Args;

/// Arguments for the full pull/scan/write/publish pipeline.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Skips the fast-forward pull of the fonts repository.
    #[arg(long = "no-pull")]
    pub no_pull: bool,

    /// Skips the commit and push of the manifest repository.
    #[arg(long = "no-push")]
    pub no_push: bool,

    /// Commit message, overrides `git.commit_message`.
    #[arg(short = 'M', long = "message", value_name = "MSG")]
    pub message: Option<String>,
}
