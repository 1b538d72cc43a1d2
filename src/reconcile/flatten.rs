//! Module-file flattening
//!
//! Converts the `foo/mod.rs` module layout into the modern `foo.rs`
//! layout: every `mod.rs` under the root is moved up one level and
//! renamed after its parent directory. Uses the same conflict
//! convention as reconciliation: if the target name is already taken,
//! nothing is touched and the entry is reported as a conflict.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::executor::FileOperationExecutor;
use crate::error::{ReconcileError, Result};

/// Per-entry outcome of a flattening run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenOutcome {
    /// `mod.rs` was moved to its parent-named file
    Renamed,
    /// The parent-named file already existed; nothing was touched
    Conflict,
    /// A filesystem operation failed for this entry
    Errored,
}

/// One flattening record in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenRecord {
    /// Outcome for this entry
    pub outcome: FlattenOutcome,
    /// `mod.rs` path relative to the root
    pub rel: PathBuf,
    /// Target path relative to the root, for renames and conflicts
    pub target: Option<PathBuf>,
    /// Error message for failed entries
    pub detail: Option<String>,
}

/// Aggregate result of a flattening run
#[derive(Debug, Clone, Default)]
pub struct FlattenSummary {
    /// Entries moved to their parent-named file
    pub renamed: usize,
    /// Entries left untouched because the target name was taken
    pub conflicts: usize,
    /// Ordered records, one per `mod.rs` found
    pub records: Vec<FlattenRecord>,
    /// Error messages for failed entries
    pub errors: Vec<String>,
}

impl FlattenSummary {
    /// Record an entry and bump its counter
    pub fn record(&mut self, record: FlattenRecord) {
        match record.outcome {
            FlattenOutcome::Renamed => self.renamed += 1,
            FlattenOutcome::Conflict => self.conflicts += 1,
            FlattenOutcome::Errored => {}
        }
        self.records.push(record);
    }

    /// Record a failed entry with its message
    pub fn record_error(&mut self, rel: &Path, message: &str) {
        self.errors.push(format!("{} - {message}", rel.display()));
        self.records.push(FlattenRecord {
            outcome: FlattenOutcome::Errored,
            rel: rel.to_path_buf(),
            target: None,
            detail: Some(message.to_string()),
        });
    }

    /// Total entries processed
    #[must_use]
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    /// Whether the run completed without errors
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Flattens `mod.rs` files into parent-named files
pub struct ModFlattener {
    executor: FileOperationExecutor,
}

impl ModFlattener {
    /// Create a new flattener
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self {
            executor: FileOperationExecutor::new(dry_run),
        }
    }

    /// Flatten every `mod.rs` under `root`
    ///
    /// Entries are processed in sorted relative-path order. Emptied
    /// parent directories are removed best-effort after each move.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist; per-entry failures
    /// are recorded in the summary and the run continues.
    pub fn run(&self, root: &Path) -> Result<FlattenSummary> {
        if !root.is_dir() {
            return Err(ReconcileError::MissingSourceRoot(root.to_path_buf()).into());
        }

        let mut summary = FlattenSummary::default();

        for rel in Self::find_mod_files(root, &mut summary) {
            let mod_path = root.join(&rel);
            // rel is at least <dir>/mod.rs, so both parents exist
            let parent = rel.parent().unwrap_or(Path::new(""));
            // Append rather than with_extension: a dotted directory
            // name like v1.2 must become v1.2.rs, not v1.rs
            let mut name = parent.file_name().map(OsStr::to_os_string).unwrap_or_default();
            name.push(".rs");
            let target_rel = parent.with_file_name(name);
            let target = root.join(&target_rel);

            if target.exists() {
                summary.record(FlattenRecord {
                    outcome: FlattenOutcome::Conflict,
                    rel,
                    target: Some(target_rel),
                    detail: None,
                });
                continue;
            }

            match self.executor.move_file(&mod_path, &target) {
                Ok(()) => {
                    self.executor
                        .remove_dir_best_effort(mod_path.parent().unwrap_or(root));
                    summary.record(FlattenRecord {
                        outcome: FlattenOutcome::Renamed,
                        rel,
                        target: Some(target_rel),
                        detail: None,
                    });
                }
                Err(e) => summary.record_error(&rel, &format!("{e:#}")),
            }
        }

        Ok(summary)
    }

    /// Collect `mod.rs` paths relative to the root, sorted
    ///
    /// Only files at least one directory below the root qualify; a
    /// `mod.rs` sitting directly in the root has no parent directory to
    /// take a name from. Walk errors become recorded warnings.
    fn find_mod_files(root: &Path, summary: &mut FlattenSummary) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for entry in WalkDir::new(root).min_depth(2).follow_links(false) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if entry.file_name() == "mod.rs"
                        && let Ok(rel) = entry.path().strip_prefix(root)
                    {
                        found.push(rel.to_path_buf());
                    }
                }
                Ok(_) => {}
                Err(e) => summary
                    .errors
                    .push(format!("walk error under {}: {e}", root.display())),
            }
        }

        found.sort();
        found
    }
}
