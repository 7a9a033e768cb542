// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! High-level sync flows over the git backends.

use std::path::Path;

use tracing::{debug, info};

use crate::config::types::GitSettings;
use crate::error::{GitError, SyncResult};
use crate::git::backend::{GitMutation, GitQuery, GixBackend, ShellBackend};

/// Fast-forward the fonts repository before scanning it.
///
/// # Errors
///
/// Returns a `GitError` if the path is not a git repository or the pull
/// fails (diverged history, network, auth).
pub fn refresh_fonts_repo(repo: &Path, git: &GitSettings, dry_run: bool) -> SyncResult<()> {
    ensure_repo(repo)?;

    if dry_run {
        info!(
            repo = %repo.display(),
            remote = %git.remote,
            branch = %git.branch,
            "dry-run: would pull fonts repository"
        );
        return Ok(());
    }

    info!(repo = %repo.display(), remote = %git.remote, branch = %git.branch, "pulling fonts repository");
    ShellBackend::pull(repo, &git.remote, &git.branch)?;
    Ok(())
}

/// Commit and push the manifest repository after the manifest write.
///
/// Skips commit and push when the work tree is clean, so re-running the
/// sync against an unchanged catalog is a no-op.
///
/// # Errors
///
/// Returns a `GitError` if the path is not a git repository or any of the
/// stage, commit, or push operations fail.
pub fn publish_manifest_repo(
    repo: &Path,
    git: &GitSettings,
    message: &str,
    dry_run: bool,
) -> SyncResult<()> {
    ensure_repo(repo)?;

    if !GixBackend::has_uncommitted_changes(repo)? {
        info!(repo = %repo.display(), "manifest unchanged, skipping commit and push");
        return Ok(());
    }

    if dry_run {
        info!(
            repo = %repo.display(),
            remote = %git.remote,
            branch = %git.branch,
            message,
            "dry-run: would commit and push manifest repository"
        );
        return Ok(());
    }

    debug!(repo = %repo.display(), "staging manifest changes");
    ShellBackend::add_all(repo)?;
    info!(repo = %repo.display(), message, "committing manifest");
    ShellBackend::commit(repo, message)?;
    info!(repo = %repo.display(), remote = %git.remote, branch = %git.branch, "pushing manifest repository");
    ShellBackend::push(repo, &git.remote, &git.branch)?;
    Ok(())
}

fn ensure_repo(repo: &Path) -> SyncResult<()> {
    if !GixBackend::is_git_repo(repo) {
        return Err(GitError::RepoNotFound {
            path: repo.display().to_string(),
        }
        .into());
    }
    Ok(())
}
