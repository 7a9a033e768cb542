// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest assembly and output.
//!
//! ```text
//! ofl/roboto=Roboto-Bold.ttf,Roboto-Regular.ttf
//! ofl/roboto.version=v1a2b3c4d5e6
//! ofl/roboto.name=Roboto
//! ofl/roboto.designer=Christian Robertson
//! ofl/roboto.category=SANS_SERIF
//! ofl/roboto.subsets=latin,latin-ext
//! ofl/roboto.axes=wght:100:1000
//! ```
//!
//! The bare `id=fonts` line always comes first per family and matches the
//! original properties output; metadata-derived keys follow and are omitted
//! when the family has no (parseable) metadata. Values are escaped in
//! java-properties style. Both outputs (`.properties` and `.properties.gz`)
//! are written atomically via a temp file in the target directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::error::{ManifestError, SyncResult};
use crate::metadata::FamilyMetadata;
use crate::scan::FontFamily;
use crate::version::VersionTag;

/// One family's contribution to the manifest.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub family: FontFamily,
    pub version: VersionTag,
    pub metadata: Option<FamilyMetadata>,
}

/// Paths written by [`Manifest::write_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    pub properties: PathBuf,
    pub gzip: PathBuf,
}

/// The consolidated manifest, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    #[must_use]
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// The manifest entries.
    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Render the manifest as properties text (UTF-8, `\n`, trailing newline).
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            render_entry(&mut out, entry);
        }
        out
    }

    /// Write `<name>` and `<name>.gz` into `dir`.
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError` if `name` is not a bare file name or a
    /// write fails. Either both files land or the previous ones are left
    /// untouched (temp file + persist).
    pub fn write_to(&self, dir: &Path, name: &str) -> SyncResult<ManifestPaths> {
        if name.contains('/') || name.contains('\\') || name.is_empty() {
            return Err(ManifestError::InvalidName(name.to_string()).into());
        }

        let text = self.render();
        let paths = ManifestPaths {
            properties: dir.join(name),
            gzip: dir.join(format!("{name}.gz")),
        };

        write_atomic(dir, &paths.properties, text.as_bytes())?;
        debug!(path = %paths.properties.display(), bytes = text.len(), "wrote manifest");

        let compressed = gzip_bytes(&paths.gzip, text.as_bytes())?;
        write_atomic(dir, &paths.gzip, &compressed)?;
        debug!(path = %paths.gzip.display(), bytes = compressed.len(), "wrote compressed manifest");

        Ok(paths)
    }
}

fn render_entry(out: &mut String, entry: &ManifestEntry) {
    let id = escape_key(&entry.family.id());

    let fonts = entry
        .family
        .fonts
        .iter()
        .map(|f| escape_value(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&format!("{id}={fonts}\n"));
    out.push_str(&format!("{id}.version={}\n", entry.version));

    let Some(meta) = &entry.metadata else {
        return;
    };

    let mut push_scalar = |key: &str, value: &Option<String>| {
        if let Some(value) = value {
            out.push_str(&format!("{id}.{key}={}\n", escape_value(value)));
        }
    };
    push_scalar("name", &meta.name);
    push_scalar("designer", &meta.designer);
    push_scalar("license", &meta.license);
    push_scalar("category", &meta.category);
    push_scalar("date_added", &meta.date_added);

    if !meta.subsets.is_empty() {
        let subsets = meta
            .subsets
            .iter()
            .map(|s| escape_value(s))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!("{id}.subsets={subsets}\n"));
    }

    if !meta.axes.is_empty() {
        let axes = meta
            .axes
            .iter()
            .map(|a| {
                format!(
                    "{}:{}:{}",
                    escape_value(&a.tag),
                    format_number(a.min_value),
                    format_number(a.max_value)
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!("{id}.axes={axes}\n"));
    }
}

/// Format an axis bound without a trailing `.0` for integral values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Java-properties escaping for keys (also escapes spaces).
fn escape_key(key: &str) -> String {
    escape_chars(key).replace(' ', "\\ ")
}

/// Java-properties escaping for values. A leading space is escaped so a
/// properties reader does not trim it away.
fn escape_value(value: &str) -> String {
    let mut out = escape_chars(value);
    if out.starts_with(' ') {
        out.insert(0, '\\');
    }
    out
}

fn escape_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '=' => out.push_str("\\="),
            ':' => out.push_str("\\:"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

fn gzip_bytes(path: &Path, bytes: &[u8]) -> SyncResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).map_err(|e| ManifestError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    encoder.finish().map_err(|e| {
        ManifestError::Write {
            path: path.display().to_string(),
            source: e,
        }
        .into()
    })
}

/// Write via a temp file in the same directory, then persist over the target.
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> SyncResult<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ManifestError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    tmp.write_all(bytes).map_err(|e| ManifestError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    tmp.persist(path).map_err(|e| ManifestError::Persist {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests;
