//! Selection of the note for the previous completed period

use crate::domain::{DateFormat, Granularity, VaultEntry};
use chrono::{NaiveDate, NaiveDateTime};

/// The reference date for `now`: the start of the unit before the one
/// containing `now` (yesterday, the first of last month, January 1st of
/// last year).
pub fn reference_date(granularity: Granularity, now: NaiveDateTime) -> Option<NaiveDate> {
    granularity.previous_period_start(now.date())
}

/// Pick the note closest to the reference date without going past it.
///
/// Candidates whose basename does not strictly parse under `format` are
/// ignored, as are folders. Ties keep the earliest candidate in iteration
/// order.
pub fn select_prior<'a, I>(
    granularity: Granularity,
    format: &DateFormat,
    candidates: I,
    now: NaiveDateTime,
) -> Option<VaultEntry>
where
    I: IntoIterator<Item = &'a VaultEntry>,
{
    let reference = reference_date(granularity, now)?;
    let mut best: Option<(i64, &VaultEntry)> = None;

    for entry in candidates {
        if entry.is_folder() {
            continue;
        }
        let Some(date) = format.parse_strict(&entry.basename) else {
            continue;
        };
        if date > reference {
            continue;
        }

        let distance = (reference - date).num_days().abs();
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, entry));
        }
    }

    best.map(|(_, entry)| entry.clone())
}
