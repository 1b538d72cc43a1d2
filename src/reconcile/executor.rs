//! Filesystem mutations for reconciliation actions
//!
//! Every operation is a no-op in dry-run mode; the orchestrator still
//! records the disposition the operation would have produced.

use std::fs;
use std::path::Path;

use anyhow::Context;
use filetime::FileTime;

use crate::error::Result;

/// Executes file operations
pub struct FileOperationExecutor {
    dry_run: bool,
}

impl FileOperationExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Copy a file, creating parent directories and preserving its
    /// modification time
    ///
    /// # Errors
    ///
    /// Returns an error if any filesystem operation fails.
    pub fn copy_file(&self, source: &Path, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        Self::ensure_parent(dest)?;
        Self::copy_with_mtime(source, dest)
    }

    /// Move a file, falling back to copy-and-remove across filesystems
    ///
    /// # Errors
    ///
    /// Returns an error if any filesystem operation fails.
    pub fn move_file(&self, source: &Path, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        Self::ensure_parent(dest)?;

        if fs::rename(source, dest).is_ok() {
            return Ok(());
        }

        // Cross-device move
        Self::copy_with_mtime(source, dest)?;
        fs::remove_file(source)
            .with_context(|| format!("Failed to remove {} after copy", source.display()))?;

        Ok(())
    }

    /// Move a whole directory as a unit
    ///
    /// No cross-device fallback: a failed rename is recorded as a
    /// per-entry error and the files inside are handled individually.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails.
    pub fn move_directory(&self, source: &Path, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        Self::ensure_parent(dest)?;
        fs::rename(source, dest).with_context(|| {
            format!(
                "Failed to move directory {} to {}",
                source.display(),
                dest.display()
            )
        })?;

        Ok(())
    }

    /// Remove a directory if it is empty
    ///
    /// Failure is deliberately ignored: the directory may be non-empty
    /// or already gone, and this cleanup is cosmetic.
    pub fn remove_dir_best_effort(&self, dir: &Path) {
        if self.dry_run {
            return;
        }

        let _ = fs::remove_dir(dir);
    }

    fn ensure_parent(dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        Ok(())
    }

    fn copy_with_mtime(source: &Path, dest: &Path) -> Result<()> {
        let metadata = fs::metadata(source)
            .with_context(|| format!("Failed to stat {}", source.display()))?;

        fs::copy(source, dest).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), dest.display())
        })?;

        let mtime = FileTime::from_last_modification_time(&metadata);
        filetime::set_file_mtime(dest, mtime)
            .with_context(|| format!("Failed to set mtime on {}", dest.display()))?;

        Ok(())
    }
}
