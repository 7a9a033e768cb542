// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              SyncError (~16 bytes)
//!                     |
//!        +------+----+----+------+
//!        |      |    |    |      |
//!        v      v    v    v      v
//!       Git   Cfg  Scan  Meta  Mani/Io
//!       Box   Box  Box   Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, RepoNotFound
//!   Config   ParseError, MissingKey, InvalidValue
//!   Scan     RootNotFound, ReadDir, ReadFile
//!   Metadata Syntax, MissingField, InvalidNumber, ...
//!   Manifest InvalidName, Write, Persist
//!
//! All variants boxed => SyncError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SyncError`].
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Catalog scan error.
    #[error("scan error: {0}")]
    Scan(#[from] Box<ScanError>),

    /// Family metadata parse error.
    #[error("metadata error: {0}")]
    Metadata(#[from] Box<MetadataError>),

    /// Manifest rendering or output error.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SyncError {
                fn from(err: $error) -> Self {
                    SyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ScanError => Scan,
    MetadataError => Metadata,
    ManifestError => Manifest,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Scan Errors ---

/// Catalog scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// License root directory does not exist.
    #[error("license root not found: {0}")]
    RootNotFound(String),

    /// Failed to list a directory.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a font file while hashing.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Metadata Errors ---

/// Family metadata parse errors.
///
/// The parser is single-pass with no recovery: the first error aborts
/// parsing for that family. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Failed to read the metadata file.
    #[error("failed to read metadata file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed line.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Closing brace without an open block.
    #[error("unexpected '}}' at line {line}")]
    UnexpectedClose { line: usize },

    /// Block opened but never closed.
    #[error("unterminated block opened at line {opened_at}")]
    UnterminatedBlock { opened_at: usize },

    /// Required field missing from a block.
    #[error("missing field '{field}' in {block} block closed at line {line}")]
    MissingField {
        block: String,
        field: String,
        line: usize,
    },

    /// Numeric field failed to parse.
    #[error("invalid number for '{key}' at line {line}: '{value}'")]
    InvalidNumber {
        key: String,
        value: String,
        line: usize,
    },
}

// --- Manifest Errors ---

/// Manifest output errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file name is not a bare file name.
    #[error("invalid manifest name '{0}': must be a bare file name")]
    InvalidName(String),

    /// Failed to write a manifest file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to persist a temp file to its final path.
    #[error("failed to persist '{path}': {message}")]
    Persist { path: String, message: String },
}
