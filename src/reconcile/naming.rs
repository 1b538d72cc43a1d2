//! Shadow-name computation
//!
//! A shadow name carries the generation marker so successive runs with
//! different markers never collide: a first pass turns `parser.rs` into
//! `parser.new.rs`, a second pass over that output turns `parser.new.rs`
//! into `parser.new.new2.rs`.

use std::path::{Path, PathBuf};

use crate::config::{SuffixPolicy, validate_marker};
use crate::error::ReconcileError;

/// Computes marker-suffixed shadow names
#[derive(Debug, Clone)]
pub struct ShadowNamer {
    marker: String,
    policy: SuffixPolicy,
    target_ext: String,
}

impl ShadowNamer {
    /// Create a namer, validating the marker token
    ///
    /// A leading dot on `target_ext` is accepted and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::InvalidMarker`] for unusable tokens.
    pub fn new(
        marker: &str,
        policy: SuffixPolicy,
        target_ext: &str,
    ) -> Result<Self, ReconcileError> {
        validate_marker(marker)?;

        Ok(Self {
            marker: marker.to_string(),
            policy,
            target_ext: target_ext.trim_start_matches('.').to_string(),
        })
    }

    /// Shadow counterpart of `path`, in the same directory
    #[must_use]
    pub fn shadow_path(&self, path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let shadow_name = match self.policy {
            SuffixPolicy::Insert => {
                let dotted = format!(".{}", self.target_ext);
                name.strip_suffix(dotted.as_str()).map_or_else(
                    || format!("{name}.{}", self.marker),
                    |stem| format!("{stem}.{}.{}", self.marker, self.target_ext),
                )
            }
            SuffixPolicy::Append => format!("{name}.{}", self.marker),
        };

        path.with_file_name(shadow_name)
    }
}
