//! Error taxonomy for reconciliation runs
//!
//! Only errors that abort a run before any mutation live here. Per-entry
//! filesystem failures are recovered: they are recorded in the run summary
//! and processing continues with the next entry.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Fatal errors that abort a run before any filesystem mutation
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The source root does not exist or is not a directory
    #[error("source root does not exist: {0}")]
    MissingSourceRoot(PathBuf),

    /// A marker token that cannot form part of a valid shadow filename
    #[error(
        "invalid marker token '{0}': must be non-empty and free of dots, \
         whitespace and path separators"
    )]
    InvalidMarker(String),

    /// Neither the command line nor the config file supplied a required root
    #[error("no {0} root given: pass it on the command line or set it in the config file")]
    MissingRoot(&'static str),
}
