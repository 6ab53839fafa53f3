//! Archive last month's notes into year/month folders

use crate::application::Host;
use crate::domain::{is_within, join_path, DateFormat, Granularity, VaultEntry};
use crate::error::{HatDailyError, Result};
use crate::infrastructure::{ensure_folder, files_under, Settings};
use chrono::{Datelike, NaiveDate};

/// A note that was moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub from: String,
    pub to: String,
}

/// A note that could not be moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRelocation {
    pub from: String,
    pub to: String,
    pub reason: String,
}

/// What an archive pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    /// `<root>/<year>/<month>` folder for last month
    pub target_folder: String,
    pub moved: Vec<Relocation>,
    pub failed: Vec<FailedRelocation>,
}

impl ArchiveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// Last month had no notes left outside the archive
    NothingToArchive,
    Archived(ArchiveReport),
}

/// Patterns the archive pass matches names against
struct Formats {
    daily: DateFormat,
    monthly: DateFormat,
    yearly: DateFormat,
}

impl Formats {
    fn compile(settings: &Settings) -> Result<Self> {
        Ok(Formats {
            daily: DateFormat::compile(settings.format_for(Granularity::Daily))?,
            monthly: DateFormat::compile(settings.format_for(Granularity::Monthly))?,
            yearly: DateFormat::compile(settings.format_for(Granularity::Yearly))?,
        })
    }
}

/// Move last month's daily notes and its month note into
/// `<root>/<year>/<month>`, then file period notes from earlier years into
/// `<root>/<year>`.
///
/// Moves are best-effort: a failed move is recorded in the report and the
/// pass carries on. Running it again right after is a no-op.
pub fn archive_last_month(host: &Host<'_>, settings: &Settings) -> Result<ArchiveOutcome> {
    let root = settings.require_daily_folder()?;
    let formats = Formats::compile(settings)?;

    let today = host.clock.now().date();
    let last_month = Granularity::Monthly
        .step_back(today)
        .ok_or_else(|| HatDailyError::Config(format!("No month before {}", today)))?;
    let month_start = Granularity::Monthly.floor(last_month);
    let month_end = Granularity::Monthly
        .period_end(last_month)
        .ok_or_else(|| HatDailyError::Config(format!("No end for month of {}", last_month)))?;

    let month_key = formats.monthly.format(last_month);
    let year_key = formats.yearly.format(last_month);
    let target_folder = join_path(&join_path(root, &year_key), &month_key);

    let files = files_under(host.vault, root)?;
    let pending = |file: &&VaultEntry| file.path != join_path(&target_folder, file.name());

    let daily_notes: Vec<&VaultEntry> = files
        .iter()
        .filter(|file| {
            formats
                .daily
                .parse_strict(&file.basename)
                .is_some_and(|date| date >= month_start && date <= month_end)
        })
        .filter(pending)
        .collect();

    let summary = files
        .iter()
        .filter(|file| {
            formats
                .monthly
                .parse_strict(&file.basename)
                .is_some_and(|date| same_month(date, last_month))
        })
        .find(pending);

    if daily_notes.is_empty() && summary.is_none() {
        tracing::info!(month = %month_key, "nothing to archive");
        host.notifier
            .info(&format!("Nothing to archive for {}", month_key));
        return Ok(ArchiveOutcome::NothingToArchive);
    }

    ensure_folder(host.vault, &target_folder)?;

    let mut report = ArchiveReport {
        target_folder: target_folder.clone(),
        ..ArchiveReport::default()
    };

    for file in daily_notes.into_iter().chain(summary) {
        relocate(host, file, &target_folder, &mut report);
    }

    sweep_earlier_years(host, root, &formats, today.year(), &mut report)?;

    for failure in &report.failed {
        host.notifier.warn(&format!(
            "Could not move {} to {}: {}",
            failure.from, failure.to, failure.reason
        ));
    }
    host.notifier.info(&format!(
        "Archived {} note(s) to {}",
        report.moved.len(),
        target_folder
    ));

    Ok(ArchiveOutcome::Archived(report))
}

/// Move year and month notes from years other than `current_year` into
/// their year folder. Works on a fresh listing.
fn sweep_earlier_years(
    host: &Host<'_>,
    root: &str,
    formats: &Formats,
    current_year: i32,
    report: &mut ArchiveReport,
) -> Result<()> {
    for file in files_under(host.vault, root)? {
        let Some(date) = formats
            .yearly
            .parse_strict(&file.basename)
            .or_else(|| formats.monthly.parse_strict(&file.basename))
        else {
            continue;
        };
        if date.year() == current_year {
            continue;
        }

        let year_folder = join_path(root, &formats.yearly.format(date));
        if is_within(&file.path, &year_folder) {
            continue;
        }

        ensure_folder(host.vault, &year_folder)?;
        relocate(host, &file, &year_folder, report);
    }
    Ok(())
}

fn relocate(host: &Host<'_>, file: &VaultEntry, folder: &str, report: &mut ArchiveReport) {
    let destination = join_path(folder, file.name());

    match host.vault.rename(file, &destination) {
        Ok(()) => {
            tracing::info!(from = %file.path, to = %destination, "moved note");
            report.moved.push(Relocation {
                from: file.path.clone(),
                to: destination,
            });
        }
        Err(e) => {
            tracing::warn!(from = %file.path, to = %destination, error = %e, "move failed");
            report.failed.push(FailedRelocation {
                from: file.path.clone(),
                to: destination,
                reason: e.to_string(),
            });
        }
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
