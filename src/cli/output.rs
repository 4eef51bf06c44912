//! Output formatting for CLI
//!
//! Listed paths go to stdout straight from the walk. Everything here is for
//! the completion note on stderr and the JSON report.

use crate::WalkSummary;

/// Format a byte count using binary units.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{bytes} B")
    }
}

/// One-line human summary of a finished walk.
#[must_use]
pub fn format_summary_text(summary: &WalkSummary) -> String {
    let elapsed_ms = summary.finished_at_ms.saturating_sub(summary.started_at_ms);
    let mut line = format!(
        "Walked {}: {} files in {} dirs, {} matched",
        summary.root, summary.files_visited, summary.dirs_visited, summary.matched
    );

    if summary.deleted > 0 {
        line.push_str(&format!(
            ", {} deleted ({} freed)",
            summary.deleted,
            format_size(summary.deleted_bytes)
        ));
    }

    line.push_str(&format!(" in {elapsed_ms} ms"));
    line
}

/// Format summary as JSON
#[must_use]
pub fn format_json(summary: &WalkSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}
