//! Reconciliation orchestration
//!
//! Single-threaded, sequential, one pass over the source tree. A
//! per-entry failure is recorded and the walk continues; only a missing
//! source root (or an unusable marker) aborts before any mutation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use super::executor::FileOperationExecutor;
use super::naming::ShadowNamer;
use super::{Disposition, EntryRecord, ReconcileOptions, RunSummary};
use crate::comparison::{DiffGenerator, FileComparator};
use crate::config::PatternSet;
use crate::error::{ReconcileError, Result};
use crate::scanner::{PathEntry, Scanner};

/// The tree-reconciliation engine
pub struct ReconcileEngine {
    options: ReconcileOptions,
}

impl ReconcileEngine {
    /// Create an engine with resolved options
    #[must_use]
    pub const fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    /// Reconcile the source tree into the destination tree
    ///
    /// # Errors
    ///
    /// Returns an error if the source root is missing, the marker token
    /// is unusable, or the destination root cannot be created. Per-entry
    /// filesystem failures do not error; they are recorded in the
    /// returned summary.
    pub fn run(&self, source_root: &Path, dest_root: &Path) -> Result<RunSummary> {
        if !source_root.is_dir() {
            return Err(ReconcileError::MissingSourceRoot(source_root.to_path_buf()).into());
        }

        let namer = ShadowNamer::new(
            &self.options.marker,
            self.options.suffix,
            &self.options.target_ext,
        )?;
        let patterns = PatternSet::compile(&self.options.ignore, &self.options.include)?;
        let scanner = Scanner::new(patterns);
        let executor = FileOperationExecutor::new(self.options.dry_run);

        if !self.options.dry_run {
            fs::create_dir_all(dest_root).with_context(|| {
                format!("Failed to create destination root: {}", dest_root.display())
            })?;
        }

        let mut summary = RunSummary::default();
        let mut moved_roots: Vec<PathBuf> = Vec::new();

        if self.options.move_dirs {
            self.move_directories(
                source_root,
                dest_root,
                &scanner,
                &executor,
                &mut moved_roots,
                &mut summary,
            );
        }

        let scan = scanner.files(source_root, dest_root);
        for warning in &scan.warnings {
            summary.errors.push(warning.clone());
        }

        for entry in &scan.entries {
            // Entries under a subtree moved in the pre-pass are already
            // in place (the skip only matters in dry-run, where the
            // moved tree is still visible to the walk).
            if moved_roots.iter().any(|root| entry.rel.starts_with(root)) {
                continue;
            }

            if let Err(e) = self.process_entry(entry, &namer, &executor, &mut summary) {
                summary.record_error(&entry.rel, &format!("{e:#}"));
            }
        }

        if self.options.move_dirs {
            Self::sweep_empty_dirs(source_root, &executor);
        }

        Ok(summary)
    }

    /// Pre-pass of the directory-move variant: relocate whole subtrees
    /// whose destination counterpart is absent
    fn move_directories(
        &self,
        source_root: &Path,
        dest_root: &Path,
        scanner: &Scanner,
        executor: &FileOperationExecutor,
        moved_roots: &mut Vec<PathBuf>,
        summary: &mut RunSummary,
    ) {
        let scan = scanner.directories(source_root, dest_root);
        for warning in &scan.warnings {
            summary.errors.push(warning.clone());
        }

        for dir in &scan.entries {
            if moved_roots.iter().any(|root| dir.rel.starts_with(root)) {
                continue;
            }
            if dir.dest.exists() {
                continue;
            }

            match executor.move_directory(&dir.source, &dir.dest) {
                Ok(()) => {
                    moved_roots.push(dir.rel.clone());
                    summary.record(EntryRecord {
                        disposition: Disposition::Copied,
                        rel: dir.rel.clone(),
                        shadow: None,
                        detail: None,
                        is_dir: true,
                    });
                }
                Err(e) => summary.record_error(&dir.rel, &format!("{e:#}")),
            }
        }
    }

    /// Decide and apply the disposition for one file entry
    fn process_entry(
        &self,
        entry: &PathEntry,
        namer: &ShadowNamer,
        executor: &FileOperationExecutor,
        summary: &mut RunSummary,
    ) -> Result<()> {
        if !entry.dest.exists() {
            executor.copy_file(&entry.source, &entry.dest)?;
            summary.record(EntryRecord::file(Disposition::Copied, entry.rel.clone()));
            return Ok(());
        }

        let shadow = namer.shadow_path(&entry.dest);
        if shadow.exists() {
            // A prior run already claimed the shadow name; this run makes
            // no changes for this entry.
            summary.record(EntryRecord::file(Disposition::Conflict, entry.rel.clone()));
            return Ok(());
        }

        let identical = FileComparator::identical(&entry.source, &entry.dest)?;

        // Diff has to be generated before the source file moves away
        let detail = if !identical && self.options.show_diff {
            Some(DiffGenerator::generate(&entry.source, &entry.dest)?)
        } else {
            None
        };

        executor.move_file(&entry.source, &shadow)?;

        let disposition = if identical {
            Disposition::ShadowRenamedIdentical
        } else {
            Disposition::ShadowRenamedDifferent
        };
        summary.record(EntryRecord {
            disposition,
            rel: entry.rel.clone(),
            shadow: Some(namer.shadow_path(&entry.rel)),
            detail,
            is_dir: false,
        });

        Ok(())
    }

    /// Remove directories the moves emptied out, deepest first.
    /// Non-empty directories are left alone; failures are ignored.
    fn sweep_empty_dirs(source_root: &Path, executor: &FileOperationExecutor) {
        let mut dirs: Vec<PathBuf> = WalkDir::new(source_root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_dir())
            .map(|e| e.path().to_path_buf())
            .collect();

        dirs.sort();
        for dir in dirs.iter().rev() {
            executor.remove_dir_best_effort(dir);
        }
    }
}
