//! Gitignore-style source filtering using the ignore crate

use std::path::Path;

use anyhow::Context;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// Compiled ignore/include patterns applied to relative source paths
pub struct PatternSet {
    gitignore: Option<Gitignore>,
}

impl PatternSet {
    /// An empty pattern set that excludes nothing
    #[must_use]
    pub const fn empty() -> Self {
        Self { gitignore: None }
    }

    /// Compile ignore and include patterns
    ///
    /// Include patterns are negated ignores, so they win over ignores
    /// for the paths they match.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn compile(ignore_patterns: &[String], include_patterns: &[String]) -> Result<Self> {
        if ignore_patterns.is_empty() && include_patterns.is_empty() {
            return Ok(Self::empty());
        }

        let mut builder = GitignoreBuilder::new("");

        for pattern in ignore_patterns {
            builder
                .add_line(None, pattern)
                .with_context(|| format!("Invalid ignore pattern: '{pattern}'"))?;
        }

        for pattern in include_patterns {
            builder
                .add_line(None, &format!("!{pattern}"))
                .with_context(|| format!("Invalid include pattern: '{pattern}'"))?;
        }

        Ok(Self {
            gitignore: Some(builder.build()?),
        })
    }

    /// Whether a relative path is excluded from reconciliation
    #[must_use]
    pub fn is_excluded(&self, rel: &Path, is_dir: bool) -> bool {
        self.gitignore
            .as_ref()
            .is_some_and(|gi| gi.matched(rel, is_dir).is_ignore())
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}
