// src/output/mod.rs
//! Final report assembly — the only writer to stdout.
//!
//! The product of a run is two concatenated text blocks: the structural
//! outline, then a labeled separator and either the synopsis or an error
//! notice. A failed summarization never discards the outline.

use crate::constants::SUMMARY_SEPARATOR;
use crate::error::AppError;
use std::io::Write;

/// The outcome of the summarization stage, as far as output is concerned.
#[derive(Debug)]
pub enum SynopsisOutcome {
    /// Summarization succeeded.
    Ready(String),
    /// Summarization failed; the outline is still valid.
    Failed(AppError),
    /// Summarization was not requested.
    Skipped,
}

/// Assembles the full report text.
pub fn compose_report(outline: &str, synopsis: &SynopsisOutcome) -> String {
    let mut report = String::with_capacity(outline.len() + 256);
    report.push_str(outline);

    match synopsis {
        SynopsisOutcome::Ready(text) => {
            report.push('\n');
            report.push_str(SUMMARY_SEPARATOR);
            report.push_str("\n\n");
            report.push_str(text);
            report.push('\n');
        }
        SynopsisOutcome::Failed(error) => {
            report.push('\n');
            report.push_str(SUMMARY_SEPARATOR);
            report.push_str("\n\n");
            report.push_str(&format!("Summary unavailable: {}\n", error));
        }
        SynopsisOutcome::Skipped => {}
    }

    report
}

/// Writes the report to stdout.
pub fn deliver(report: &str) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(report.as_bytes())?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_concatenates_outline_and_synopsis() {
        let report = compose_report(
            "# Title\n\n",
            &SynopsisOutcome::Ready("- one\n- two".to_string()),
        );
        assert_eq!(report, "# Title\n\n\n=== AI Summary ===\n\n- one\n- two\n");
    }

    #[test]
    fn failed_summary_keeps_outline_with_notice() {
        let report = compose_report(
            "# Title\n\n",
            &SynopsisOutcome::Failed(AppError::Summarization("timed out".to_string())),
        );
        assert!(report.starts_with("# Title\n\n"));
        assert!(report.contains("=== AI Summary ==="));
        assert!(report.contains("Summary unavailable: Summarization failed: timed out"));
    }

    #[test]
    fn skipped_summary_omits_separator() {
        let report = compose_report("# Title\n\n", &SynopsisOutcome::Skipped);
        assert_eq!(report, "# Title\n\n");
    }
}
