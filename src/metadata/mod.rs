// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-family metadata files.
//!
//! ```text
//! METADATA.pb
//!   name: "Roboto Flex"
//!   designer: "Font Bureau"
//!   subsets: "latin"
//!   subsets: "latin-ext"
//!   axes {
//!     tag: "wght"
//!     min_value: 100
//!     max_value: 1000
//!   }
//!   fonts { ... }        <- skipped, the on-disk scan is authoritative
//! ```
//!
//! The format is line-oriented with one level of meaningful nesting
//! (`axes { }`); unknown blocks are skipped with depth tracking. See
//! [`parser`] for the grammar.

pub mod parser;


use std::path::Path;

use crate::config::types::ScanConfig;
use crate::error::{MetadataError, SyncResult};

pub use parser::parse_metadata;

/// Parsed family metadata.
///
/// All scalar fields are optional; absent keys simply do not appear in the
/// manifest. `subsets` preserves file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyMetadata {
    pub name: Option<String>,
    pub designer: Option<String>,
    pub license: Option<String>,
    pub category: Option<String>,
    pub date_added: Option<String>,
    pub subsets: Vec<String>,
    pub axes: Vec<Axis>,
}

/// A variable-font axis segment from an `axes { }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub tag: String,
    pub min_value: f64,
    pub max_value: f64,
}

/// Read and parse the metadata file of a family directory.
///
/// Returns `Ok(None)` when the file does not exist; families without
/// metadata still get a file list and version tag in the manifest.
///
/// # Errors
///
/// Returns `MetadataError::ReadError` when the file exists but cannot be
/// read, or any parse error from [`parse_metadata`].
pub fn read_metadata(family_dir: &Path, scan: &ScanConfig) -> SyncResult<Option<FamilyMetadata>> {
    let path = family_dir.join(&scan.metadata_file);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| MetadataError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let metadata = parse_metadata(&content)?;
    Ok(Some(metadata))
}
