//! Tree-reconciliation engine
//!
//! One-shot migration of a source tree into a destination tree. Files
//! absent from the destination are copied; files with an existing
//! counterpart are moved to a marker-suffixed shadow name so the
//! destination is never overwritten. Re-running without clearing
//! shadow files is deliberately not idempotent: the second run reports
//! a conflict for every entry that previously produced a shadow file.

mod executor;
mod flatten;
mod naming;
mod orchestrator;
mod reporting;

pub use flatten::{FlattenOutcome, FlattenRecord, FlattenSummary, ModFlattener};
pub use naming::ShadowNamer;
pub use orchestrator::ReconcileEngine;
pub use reporting::{FlattenReporter, ReconcileReporter};

use std::path::{Path, PathBuf};

use crate::config::SuffixPolicy;

/// Per-entry outcome of a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// No destination counterpart existed; the file was copied over
    Copied,
    /// Counterpart existed with identical bytes; source moved to its shadow name
    ShadowRenamedIdentical,
    /// Counterpart existed with differing bytes; source moved to its shadow name
    ShadowRenamedDifferent,
    /// The shadow name was already taken; nothing was touched
    Conflict,
    /// A filesystem operation failed for this entry
    Errored,
}

/// One operation record in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Outcome for this entry
    pub disposition: Disposition,
    /// Path relative to the source root
    pub rel: PathBuf,
    /// Shadow path relative to the destination root, for renames
    pub shadow: Option<PathBuf>,
    /// Attached detail: a unified diff or an error message
    pub detail: Option<String>,
    /// Whether this record covers a whole directory moved as a unit
    pub is_dir: bool,
}

impl EntryRecord {
    /// A plain file record with no attachments
    #[must_use]
    pub const fn file(disposition: Disposition, rel: PathBuf) -> Self {
        Self {
            disposition,
            rel,
            shadow: None,
            detail: None,
            is_dir: false,
        }
    }
}

/// Aggregate result of a reconciliation run
///
/// Built incrementally during the walk, reported at end of run, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Files (and directory units) copied or moved into place
    pub copied: usize,
    /// Shadow renames where source and counterpart were byte-identical
    pub renamed_identical: usize,
    /// Shadow renames where the contents differed
    pub renamed_different: usize,
    /// Entries left untouched because the shadow name was taken
    pub conflicts: usize,
    /// Operation records in processing order
    pub records: Vec<EntryRecord>,
    /// Error records in processing order
    pub errors: Vec<String>,
}

impl RunSummary {
    /// Record an entry outcome and bump the matching counter
    pub fn record(&mut self, record: EntryRecord) {
        match record.disposition {
            Disposition::Copied => self.copied += 1,
            Disposition::ShadowRenamedIdentical => self.renamed_identical += 1,
            Disposition::ShadowRenamedDifferent => self.renamed_different += 1,
            Disposition::Conflict => self.conflicts += 1,
            Disposition::Errored => {} // counted via the error list
        }
        self.records.push(record);
    }

    /// Record a per-entry failure; the run continues
    pub fn record_error(&mut self, rel: &Path, message: &str) {
        self.errors.push(format!("{} - {message}", rel.display()));
        self.records.push(EntryRecord {
            disposition: Disposition::Errored,
            rel: rel.to_path_buf(),
            shadow: None,
            detail: Some(message.to_string()),
            is_dir: false,
        });
    }

    /// Total shadow files created
    #[must_use]
    pub const fn shadowed(&self) -> usize {
        self.renamed_identical + self.renamed_different
    }

    /// Number of entries that errored
    #[must_use]
    pub fn errored(&self) -> usize {
        self.errors.len()
    }

    /// Whether the run recorded zero errors
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Resolved knobs for a reconciliation run
///
/// The command layer merges CLI flags and the config file into this
/// before handing it to the engine.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Marker token for shadow names (`new` for a first-generation run,
    /// `new2` for a second-generation pass over marker-carrying files)
    pub marker: String,
    /// Marker placement convention
    pub suffix: SuffixPolicy,
    /// Extension recognized by the insert convention
    pub target_ext: String,
    /// Move whole subdirectories when the destination counterpart is absent
    pub move_dirs: bool,
    /// Report dispositions without touching the filesystem
    pub dry_run: bool,
    /// Attach a unified diff to differing pairs
    pub show_diff: bool,
    /// Patterns excluding source files from the run
    pub ignore: Vec<String>,
    /// Patterns overriding the ignore list
    pub include: Vec<String>,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            marker: "new".to_string(),
            suffix: SuffixPolicy::Insert,
            target_ext: "rs".to_string(),
            move_dirs: false,
            dry_run: false,
            show_diff: false,
            ignore: Vec::new(),
            include: Vec::new(),
        }
    }
}
