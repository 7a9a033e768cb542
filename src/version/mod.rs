// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content-derived version tags.
//!
//! ```text
//! for font in sorted(fonts):
//!     sha1.update(name); sha1.update(0x00); sha1.update(bytes)
//! tag = "v" + hex(digest)[..12]
//! ```
//!
//! The file name participates in the digest, so renaming a font changes the
//! tag even when its bytes do not. Sorting happens before hashing; file
//! system iteration order never leaks into the tag.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha1::{Digest, Sha1};

use crate::error::{ScanError, SyncResult};

/// Hex digits kept from the SHA-1 digest.
const TAG_LEN: usize = 12;

/// Read buffer size for streaming font files into the digest.
const READ_BUF: usize = 64 * 1024;

/// A stable content-derived version tag, rendered as `v` + 12 hex chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

impl VersionTag {
    /// The tag including the `v` prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the version tag for a family directory.
///
/// `fonts` must already be sorted; [`crate::scan::scan_catalog`] guarantees
/// this for catalog entries.
///
/// # Errors
///
/// Returns `ScanError::ReadFile` if any font file cannot be opened or read.
pub fn version_tag(family_dir: &Path, fonts: &[String]) -> SyncResult<VersionTag> {
    debug_assert!(fonts.is_sorted(), "font list must be sorted before hashing");

    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; READ_BUF];

    for name in fonts {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);

        let path = family_dir.join(name);
        let mut file = File::open(&path).map_err(|e| ScanError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;
        loop {
            let n = file.read(&mut buf).map_err(|e| ScanError::ReadFile {
                path: path.display().to_string(),
                source: e,
            })?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
    }

    let digest = hasher.finalize();
    let mut hex = format!("{digest:x}");
    hex.truncate(TAG_LEN);
    Ok(VersionTag(format!("v{hex}")))
}

#[cfg(test)]
mod tests;
