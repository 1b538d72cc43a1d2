//! Deterministic source-tree enumeration
//!
//! The scanner walks the source root once and produces entries sorted
//! lexicographically by relative path, so repeated runs over the same
//! tree process files in the same order and produce reproducible output.
//! Symlinks are not followed; they are handled as the filesystem
//! presents them.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::PatternSet;

/// A file or directory slated for reconciliation, addressed three ways
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Path relative to the source root
    pub rel: PathBuf,
    /// Absolute (or caller-relative) location under the source root
    pub source: PathBuf,
    /// Mapped location under the destination root
    pub dest: PathBuf,
}

/// Result of a scan with non-fatal warnings
///
/// Enumeration failures (unreadable subdirectories, permission errors)
/// become warnings rather than aborting the scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Entries sorted by relative path
    pub entries: Vec<PathEntry>,
    /// Human-readable enumeration failures
    pub warnings: Vec<String>,
}

/// Source-tree scanner
pub struct Scanner {
    patterns: PatternSet,
}

impl Scanner {
    /// Create a scanner with the given pattern filter
    #[must_use]
    pub const fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Enumerate regular files under the source root
    #[must_use]
    pub fn files(&self, source_root: &Path, dest_root: &Path) -> ScanResult {
        self.scan(source_root, dest_root, false)
    }

    /// Enumerate subdirectories of the source root, shallowest first
    ///
    /// Used by the directory-move variant to find subtrees that can be
    /// relocated as a unit.
    #[must_use]
    pub fn directories(&self, source_root: &Path, dest_root: &Path) -> ScanResult {
        self.scan(source_root, dest_root, true)
    }

    fn scan(&self, source_root: &Path, dest_root: &Path, want_dirs: bool) -> ScanResult {
        let mut entries = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(source_root).min_depth(1).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warnings.push(e.to_string());
                    continue;
                }
            };

            let is_dir = entry.file_type().is_dir();
            if want_dirs != is_dir || (!want_dirs && !entry.file_type().is_file()) {
                continue;
            }

            let rel = match entry.path().strip_prefix(source_root) {
                Ok(rel) => rel.to_path_buf(),
                Err(e) => {
                    warnings.push(format!(
                        "Failed to relativize {}: {e}",
                        entry.path().display()
                    ));
                    continue;
                }
            };

            if self.patterns.is_excluded(&rel, is_dir) {
                continue;
            }

            entries.push(PathEntry {
                source: entry.path().to_path_buf(),
                dest: dest_root.join(&rel),
                rel,
            });
        }

        entries.sort_by(|a, b| a.rel.cmp(&b.rel));

        ScanResult { entries, warnings }
    }
}
