//! Unified diff generation with color-coded output
//!
//! Used by `--diff` to show what an incoming upstream file changes
//! relative to the local counterpart it would have overwritten. The
//! local (destination) file is the old side, the incoming (source)
//! file the new side.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use anyhow::Context;
use similar::{ChangeTag, TextDiff};

use crate::error::Result;

const DIFF_CONTEXT_LINES: usize = 3;

/// Diff generator for differing file pairs
pub struct DiffGenerator;

impl DiffGenerator {
    /// Generate a color-coded unified diff between two files
    ///
    /// Non-UTF-8 bytes are replaced lossily, so binary files produce a
    /// (noisy but harmless) diff instead of an error.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read.
    pub fn generate(source: &Path, dest: &Path) -> Result<String> {
        let source_content = fs::read(source)
            .with_context(|| format!("Failed to read source file: {}", source.display()))?;
        let dest_content = fs::read(dest)
            .with_context(|| format!("Failed to read destination file: {}", dest.display()))?;

        Ok(Self::generate_from_content(
            &String::from_utf8_lossy(&source_content),
            &String::from_utf8_lossy(&dest_content),
            source,
            dest,
        ))
    }

    /// Generate a diff from string contents
    #[must_use]
    pub fn generate_from_content(
        source_content: &str,
        dest_content: &str,
        source_path: &Path,
        dest_path: &Path,
    ) -> String {
        let diff = TextDiff::from_lines(dest_content, source_content);

        let mut output = String::new();

        writeln!(output, "\x1b[1m--- {}\x1b[0m", dest_path.display())
            .expect("Writing to String should never fail");
        writeln!(output, "\x1b[1m+++ {}\x1b[0m", source_path.display())
            .expect("Writing to String should never fail");

        for (idx, group) in diff.grouped_ops(DIFF_CONTEXT_LINES).iter().enumerate() {
            if idx > 0 {
                output.push_str("...\n");
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let (sign, color) = match change.tag() {
                        ChangeTag::Delete => ("-", "\x1b[31m"), // Red
                        ChangeTag::Insert => ("+", "\x1b[32m"), // Green
                        ChangeTag::Equal => (" ", "\x1b[0m"),
                    };

                    let newline = if change.value().ends_with('\n') {
                        ""
                    } else {
                        "\n"
                    };

                    write!(output, "{color}{sign}{}{newline}\x1b[0m", change.value())
                        .expect("Writing to String should never fail");
                }
            }
        }

        output
    }
}
