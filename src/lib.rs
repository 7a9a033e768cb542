// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            scan / manifest / sync
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+------+--------+----+---'
//!                 |      |        |    |
//!                 v      v        v    v
//!               scan  version  metadata git
//!             catalog  SHA-1    parser  gix/CLI
//!                 \      |        |    /
//!                  '-----+--------+---'
//!                        v
//!                    manifest
//!              properties + gzip output
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod metadata;
pub mod scan;
pub mod version;
