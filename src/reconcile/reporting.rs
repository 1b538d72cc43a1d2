//! Run output formatting
//!
//! The engine returns a structured [`RunSummary`]; turning it into
//! console text lives here so the presentation can change without
//! touching reconciliation logic.

use std::fmt::Write;

use super::{Disposition, EntryRecord, FlattenOutcome, FlattenRecord, FlattenSummary, RunSummary};

/// Formats run summaries for the console
pub struct ReconcileReporter;

impl ReconcileReporter {
    /// One console line for a processed entry
    #[must_use]
    pub fn entry_line(record: &EntryRecord) -> String {
        let rel = record.rel.display();

        match record.disposition {
            Disposition::Copied if record.is_dir => format!("MOVED DIR: {rel}"),
            Disposition::Copied => format!("COPIED: {rel}"),
            Disposition::ShadowRenamedIdentical | Disposition::ShadowRenamedDifferent => {
                let shadow = record.shadow.as_deref().unwrap_or(record.rel.as_path());
                let kind = if record.disposition == Disposition::ShadowRenamedIdentical {
                    "identical"
                } else {
                    "different"
                };
                format!("RENAMED ({kind}): {rel} -> {}", shadow.display())
            }
            Disposition::Conflict => format!("CONFLICT: {rel}"),
            Disposition::Errored => format!(
                "ERROR: {rel} - {}",
                record.detail.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    /// The aggregate summary block
    #[must_use]
    pub fn generate_summary(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n=== Reconcile Summary ===\n");
        let _ = writeln!(output, "Copied:               {}", summary.copied);
        let _ = writeln!(output, "Renamed (identical):  {}", summary.renamed_identical);
        let _ = writeln!(output, "Renamed (different):  {}", summary.renamed_different);
        let _ = writeln!(output, "Shadow files created: {}", summary.shadowed());
        let _ = writeln!(output, "Conflicts:            {}", summary.conflicts);
        let _ = writeln!(output, "Errors:               {}", summary.errored());

        if !summary.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", summary.errors.len());
            for error in &summary.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        if summary.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }

    /// Full report: entry lines in processing order, attached diffs,
    /// then the summary block
    #[must_use]
    pub fn render(summary: &RunSummary) -> String {
        let mut output = String::new();

        for record in &summary.records {
            output.push_str(&Self::entry_line(record));
            output.push('\n');

            if record.disposition == Disposition::ShadowRenamedDifferent
                && let Some(diff) = &record.detail
            {
                output.push_str(diff);
            }
        }

        output.push_str(&Self::generate_summary(summary));
        output
    }
}

/// Formats flattening runs for the console
pub struct FlattenReporter;

impl FlattenReporter {
    /// One console line for a processed `mod.rs`
    #[must_use]
    pub fn entry_line(record: &FlattenRecord) -> String {
        let rel = record.rel.display();

        match record.outcome {
            FlattenOutcome::Renamed => {
                let target = record.target.as_deref().unwrap_or(record.rel.as_path());
                format!("RENAMED: {rel} -> {}", target.display())
            }
            FlattenOutcome::Conflict => {
                let target = record.target.as_deref().unwrap_or(record.rel.as_path());
                format!("CONFLICT: {} already exists", target.display())
            }
            FlattenOutcome::Errored => format!(
                "ERROR: {rel} - {}",
                record.detail.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    /// Full report: entry lines in processing order, then the summary
    #[must_use]
    pub fn render(summary: &FlattenSummary) -> String {
        let mut output = String::new();

        for record in &summary.records {
            output.push_str(&Self::entry_line(record));
            output.push('\n');
        }

        output.push_str("\n=== Flatten Summary ===\n");
        let _ = writeln!(output, "Files processed:      {}", summary.processed());
        let _ = writeln!(output, "Renamed:              {}", summary.renamed);
        let _ = writeln!(output, "Conflicts:            {}", summary.conflicts);
        let _ = writeln!(output, "Errors:               {}", summary.errors.len());

        if !summary.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", summary.errors.len());
            for error in &summary.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        if summary.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn test_entry_lines() {
        let copied = EntryRecord::file(Disposition::Copied, PathBuf::from("a.rs"));
        assert_eq!(ReconcileReporter::entry_line(&copied), "COPIED: a.rs");

        let renamed = EntryRecord {
            disposition: Disposition::ShadowRenamedIdentical,
            rel: PathBuf::from("b.rs"),
            shadow: Some(PathBuf::from("b.new.rs")),
            detail: None,
            is_dir: false,
        };
        assert_eq!(
            ReconcileReporter::entry_line(&renamed),
            "RENAMED (identical): b.rs -> b.new.rs"
        );

        let conflict = EntryRecord::file(Disposition::Conflict, PathBuf::from("c.rs"));
        assert_eq!(ReconcileReporter::entry_line(&conflict), "CONFLICT: c.rs");

        let moved_dir = EntryRecord {
            disposition: Disposition::Copied,
            rel: PathBuf::from("sub"),
            shadow: None,
            detail: None,
            is_dir: true,
        };
        assert_eq!(ReconcileReporter::entry_line(&moved_dir), "MOVED DIR: sub");
    }

    #[test]
    fn test_error_line_carries_message() {
        let mut summary = RunSummary::default();
        summary.record_error(Path::new("e.rs"), "permission denied");

        let line = ReconcileReporter::entry_line(&summary.records[0]);
        assert_eq!(line, "ERROR: e.rs - permission denied");
    }

    #[test]
    fn test_summary_block() {
        let mut summary = RunSummary::default();
        summary.record(EntryRecord::file(Disposition::Copied, "a.rs".into()));
        summary.record(EntryRecord::file(
            Disposition::ShadowRenamedDifferent,
            "b.rs".into(),
        ));

        let block = ReconcileReporter::generate_summary(&summary);

        assert!(block.contains("Copied:               1"));
        assert!(block.contains("Renamed (different):  1"));
        assert!(block.contains("Shadow files created: 1"));
        assert!(block.contains("✓ Success"));
    }

    #[test]
    fn test_summary_block_with_errors() {
        let mut summary = RunSummary::default();
        summary.record_error(Path::new("e.rs"), "disk full");

        let block = ReconcileReporter::generate_summary(&summary);

        assert!(block.contains("Errors (1)"));
        assert!(block.contains("e.rs - disk full"));
        assert!(block.contains("✗ Completed with errors"));
    }

    #[test]
    fn test_flatten_entry_lines() {
        let renamed = FlattenRecord {
            outcome: FlattenOutcome::Renamed,
            rel: PathBuf::from("audio/mod.rs"),
            target: Some(PathBuf::from("audio.rs")),
            detail: None,
        };
        assert_eq!(
            FlattenReporter::entry_line(&renamed),
            "RENAMED: audio/mod.rs -> audio.rs"
        );

        let conflict = FlattenRecord {
            outcome: FlattenOutcome::Conflict,
            rel: PathBuf::from("audio/mod.rs"),
            target: Some(PathBuf::from("audio.rs")),
            detail: None,
        };
        assert_eq!(
            FlattenReporter::entry_line(&conflict),
            "CONFLICT: audio.rs already exists"
        );
    }

    #[test]
    fn test_flatten_render_counts() {
        let mut summary = FlattenSummary::default();
        summary.record(FlattenRecord {
            outcome: FlattenOutcome::Renamed,
            rel: PathBuf::from("audio/mod.rs"),
            target: Some(PathBuf::from("audio.rs")),
            detail: None,
        });
        summary.record(FlattenRecord {
            outcome: FlattenOutcome::Conflict,
            rel: PathBuf::from("text/mod.rs"),
            target: Some(PathBuf::from("text.rs")),
            detail: None,
        });

        let report = FlattenReporter::render(&summary);

        assert!(report.contains("Files processed:      2"));
        assert!(report.contains("Renamed:              1"));
        assert!(report.contains("Conflicts:            1"));
        assert!(report.contains("✓ Success"));
    }

    #[test]
    fn test_render_orders_lines_before_summary() {
        let mut summary = RunSummary::default();
        summary.record(EntryRecord::file(Disposition::Copied, "a.rs".into()));
        summary.record(EntryRecord::file(Disposition::Conflict, "c.rs".into()));

        let report = ReconcileReporter::render(&summary);
        let copied_at = report.find("COPIED: a.rs").unwrap();
        let conflict_at = report.find("CONFLICT: c.rs").unwrap();
        let summary_at = report.find("=== Reconcile Summary ===").unwrap();

        assert!(copied_at < conflict_at);
        assert!(conflict_at < summary_at);
    }
}
