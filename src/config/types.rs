//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Shadow-name convention for marker placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuffixPolicy {
    /// Insert the marker before the recognized extension
    /// (`parser.rs` -> `parser.new.rs`); filenames without the
    /// recognized extension get the marker appended instead
    #[default]
    Insert,
    /// Append the marker after the full filename
    /// (`parser.rs` -> `parser.rs.new`)
    Append,
}

/// Main configuration structure
///
/// Every field has a CLI counterpart; flags override file values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Source root: the tree being migrated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Destination root: the tree being migrated into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,

    /// Marker token inserted into shadow filenames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Shadow-name convention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<SuffixPolicy>,

    /// Extension recognized by the insert convention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ext: Option<String>,

    /// Move whole subdirectories when the destination counterpart is absent
    #[serde(default)]
    pub move_dirs: bool,

    /// Treat a run with conflicts as failed (non-zero exit)
    #[serde(default)]
    pub fail_on_conflict: bool,

    /// Patterns to ignore (exclude from reconciliation)
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Patterns to explicitly include (override ignores)
    #[serde(default)]
    pub include: Vec<String>,

    /// Dry run mode (report dispositions without touching the filesystem)
    #[serde(default)]
    pub dry_run: bool,
}
