// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!      ops.rs (sync flows)
//!            |
//!            v
//!   ,------------------,
//!   | backend (traits) |
//!   '--+----------+----'
//!      |          |
//!      v          v
//! GitQuery    GitMutation
//! (gix, read) (CLI, write)
//!      |          |
//!      v          v
//! GixBackend  ShellBackend
//! .is_repo    .pull/.push
//! .branch     .add_all
//! .uncommit   .commit
//! ```
//!
//! **`GixBackend`** — pure Rust, no subprocess, read-only.
//! **`ShellBackend`** — git CLI for network operations and writes.

pub mod backend;
pub mod ops;
