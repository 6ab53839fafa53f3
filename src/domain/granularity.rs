//! Journal granularity and calendar-unit arithmetic

use crate::error::HatDailyError;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The calendar unit a journal view operates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One note per day
    #[default]
    Daily,
    /// One note per month
    Monthly,
    /// One note per year
    Yearly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Daily,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    /// The next coarser granularity, shown in the right-hand pane
    pub fn parent(&self) -> Option<Granularity> {
        match self {
            Granularity::Daily => Some(Granularity::Monthly),
            Granularity::Monthly => Some(Granularity::Yearly),
            Granularity::Yearly => None,
        }
    }

    /// Floor a date to the first day of its unit
    pub fn floor(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
            Granularity::Yearly => date.with_ordinal(1).unwrap_or(date),
        }
    }

    /// Step a date back by one unit, clamping to the last valid day
    /// (March 31 minus one month is February 28/29).
    pub fn step_back(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Daily => date.pred_opt(),
            Granularity::Monthly => date.checked_sub_months(Months::new(1)),
            Granularity::Yearly => date.checked_sub_months(Months::new(12)),
        }
    }

    /// Start of the unit immediately preceding the one containing `date`
    pub fn previous_period_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.step_back(date).map(|d| self.floor(d))
    }

    /// Last day of the unit containing `date`
    pub fn period_end(&self, date: NaiveDate) -> Option<NaiveDate> {
        let start = self.floor(date);
        let next = match self {
            Granularity::Daily => start.succ_opt(),
            Granularity::Monthly => start.checked_add_months(Months::new(1)),
            Granularity::Yearly => start.checked_add_months(Months::new(12)),
        }?;
        next.pred_opt()
    }

    /// Settings key naming this granularity's file format
    pub fn format_key(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily_file_format",
            Granularity::Monthly => "monthly_file_format",
            Granularity::Yearly => "yearly_file_format",
        }
    }

    /// Settings key naming this granularity's template path
    pub fn template_key(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily_template_path",
            Granularity::Monthly => "monthly_template_path",
            Granularity::Yearly => "yearly_template_path",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Daily => "daily",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

impl FromStr for Granularity {
    type Err = HatDailyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            _ => Err(HatDailyError::InvalidGranularity(s.to_string())),
        }
    }
}
