// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog discovery over license roots.
//!
//! ```text
//! fonts_repo/
//!   apache/<family>/*.ttf
//!   ofl/<family>/*.ttf  + METADATA.pb
//!   ufl/<family>/*.otf
//!        |
//!        v
//! scan_catalog --> Catalog { FontFamily, ... }
//! ```
//!
//! Ordering is deterministic: license roots in configured order, family
//! directories and font files byte-wise ascending. Unreadable directories
//! are logged and skipped; a family without font files is omitted.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::config::types::ScanConfig;
use crate::error::{ScanError, SyncResult};

/// A font family directory and its font files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    /// License root this family lives under (e.g. "ofl").
    pub license: String,
    /// Family directory name (e.g. "roboto").
    pub directory: String,
    /// Absolute path of the family directory.
    pub path: PathBuf,
    /// Font file names, sorted byte-wise ascending.
    pub fonts: Vec<String>,
}

impl FontFamily {
    /// Manifest key for this family: `license/directory`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}/{}", self.license, self.directory)
    }
}

/// The scanned catalog, ordered by license root then family directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    families: Vec<FontFamily>,
}

impl Catalog {
    /// The discovered families.
    #[must_use]
    pub fn families(&self) -> &[FontFamily] {
        &self.families
    }

    /// Number of discovered families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether no family was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Scan the configured license roots under `repo_root`.
///
/// A missing or unreadable license root logs a warning and is skipped, as is
/// any family directory that cannot be listed. The scan itself only fails
/// when `repo_root` does not exist.
///
/// # Errors
///
/// Returns `ScanError::RootNotFound` when `repo_root` is not a directory.
pub fn scan_catalog(repo_root: &Path, scan: &ScanConfig) -> SyncResult<Catalog> {
    if !repo_root.is_dir() {
        return Err(ScanError::RootNotFound(repo_root.display().to_string()).into());
    }

    let mut families = Vec::new();
    for license in &scan.license_dirs {
        let root = repo_root.join(license);
        if !root.is_dir() {
            warn!(license, "license root missing, skipping");
            continue;
        }

        match family_dirs(&root) {
            Ok(dirs) => {
                for (directory, path) in dirs {
                    let fonts = list_font_files(&path, &scan.font_extensions);
                    if fonts.is_empty() {
                        debug!(family = %format!("{license}/{directory}"), "no font files, omitting");
                        continue;
                    }
                    families.push(FontFamily {
                        license: license.clone(),
                        directory,
                        path,
                        fonts,
                    });
                }
            }
            Err(e) => {
                warn!(license, error = %e, "failed to list license root, skipping");
            }
        }
    }

    Ok(Catalog { families })
}

/// Child directories of a license root, sorted by name.
///
/// Hidden entries and symlinks are ignored.
fn family_dirs(root: &Path) -> SyncResult<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(root).map_err(|e| ScanError::ReadDir {
        path: root.display().to_string(),
        source: e,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ReadDir {
            path: root.display().to_string(),
            source: e,
        })?;
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            warn!(path = %entry.path().display(), "non-UTF-8 directory name, skipping");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        // symlink_metadata so symlinked directories are not followed
        let file_type = entry.file_type().map_err(|e| ScanError::ReadDir {
            path: entry.path().display().to_string(),
            source: e,
        })?;
        if file_type.is_dir() {
            dirs.push((name, entry.path()));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Font files directly inside a family directory, sorted by name.
///
/// Uses the `ignore` walker with depth 1 so hidden files are filtered the
/// same way everywhere. Walk errors are logged and the entry skipped.
fn list_font_files(family_dir: &Path, extensions: &[String]) -> Vec<String> {
    let mut fonts = Vec::new();

    let walker = WalkBuilder::new(family_dir)
        .max_depth(Some(1))
        .follow_links(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let Some(name) = entry.file_name().to_str() else {
                    warn!(path = %entry.path().display(), "non-UTF-8 file name, skipping");
                    continue;
                };
                if has_font_extension(name, extensions) {
                    fonts.push(name.to_string());
                }
            }
            Err(e) => warn!(dir = %family_dir.display(), error = %e, "walk error"),
        }
    }

    fonts.sort();
    fonts
}

/// Case-insensitive match on the final extension.
fn has_font_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let e = e.to_ascii_lowercase();
            extensions.iter().any(|ext| *ext == e)
        })
}

#[cfg(test)]
mod tests;
