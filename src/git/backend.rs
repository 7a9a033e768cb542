// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{GitError, GixError, SyncResult};
use std::path::Path;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without
/// modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> SyncResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(path: &Path) -> SyncResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository state.
///
/// These operations use shell git: network transports, credential helpers
/// and hooks behave exactly as they do for a developer at the terminal.
pub trait GitMutation {
    /// Fast-forward pull from a remote branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull operation fails (including when a
    /// fast-forward is not possible).
    fn pull(repo_path: &Path, remote: &str, branch: &str) -> SyncResult<()>;

    /// Stage all changes in the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the add operation fails.
    fn add_all(repo_path: &Path) -> SyncResult<()>;

    /// Commit staged changes with the given message.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit operation fails.
    fn commit(repo_path: &Path, message: &str) -> SyncResult<()>;

    /// Push to a remote branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push operation fails.
    fn push(repo_path: &Path, remote: &str, branch: &str) -> SyncResult<()>;

    /// Initialize a new repository.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(path: &Path) -> SyncResult<()>;

    /// Set git config value.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the config value cannot be set.
    fn set_config(repo_path: &Path, key: &str, value: &str) -> SyncResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides efficient read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> SyncResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(path: &Path) -> SyncResult<bool> {
        use gix::status::UntrackedFiles;

        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Required for network operations (pull/push with the user's transports
/// and credential helpers) and history writes.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> SyncResult<String> {
        use std::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitMutation for ShellBackend {
    fn pull(repo_path: &Path, remote: &str, branch: &str) -> SyncResult<()> {
        Self::git_command(&["pull", "--ff-only", "--quiet", remote, branch], repo_path)?;
        Ok(())
    }

    fn add_all(repo_path: &Path) -> SyncResult<()> {
        Self::git_command(&["add", "--all"], repo_path)?;
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str) -> SyncResult<()> {
        Self::git_command(&["commit", "--quiet", "-m", message], repo_path)?;
        Ok(())
    }

    fn push(repo_path: &Path, remote: &str, branch: &str) -> SyncResult<()> {
        Self::git_command(&["push", "--quiet", remote, branch], repo_path)?;
        Ok(())
    }

    fn init_repo(path: &Path) -> SyncResult<()> {
        Self::git_command(&["init", "--quiet"], path)?;
        Ok(())
    }

    fn set_config(repo_path: &Path, key: &str, value: &str) -> SyncResult<()> {
        Self::git_command(&["config", key, value], repo_path)?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }

    fn current_branch(path: &Path) -> SyncResult<Option<String>> {
        Self::git_command(&["symbolic-ref", "--short", "HEAD"], path)
            .map_or_else(|_| Ok(None), |branch| Ok(Some(branch)))
    }

    fn has_uncommitted_changes(path: &Path) -> SyncResult<bool> {
        let output = Self::git_command(&["status", "--porcelain"], path)?;
        Ok(!output.is_empty())
    }
}
