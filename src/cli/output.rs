//! Output formatting utilities

use crate::application::manage_config::entries;
use crate::application::ArchiveReport;
use crate::infrastructure::Settings;

/// Format every setting as `key = value` lines
pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    for (key, value) in entries(settings) {
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}

/// Format the moves and failures of an archive pass
pub fn format_archive_report(report: &ArchiveReport) -> String {
    let mut output = String::new();
    for moved in &report.moved {
        output.push_str(&format!("  {} -> {}\n", moved.from, moved.to));
    }
    for failed in &report.failed {
        output.push_str(&format!("  FAILED {} -> {} ({})\n", failed.from, failed.to, failed.reason));
    }
    output
}
