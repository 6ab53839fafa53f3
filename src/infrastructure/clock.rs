//! Current-time sources

use crate::error::{HatDailyError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now"
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS`
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map(|d| d.and_time(chrono::NaiveTime::MIN))
            })
            .map(FixedClock)
            .map_err(|_| {
                HatDailyError::Config(format!(
                    "Invalid HATDAILY_NOW value '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                    value
                ))
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The system clock, or a fixed one when HATDAILY_NOW is set
pub fn clock_from_env() -> Result<Box<dyn Clock>> {
    match std::env::var("HATDAILY_NOW") {
        Ok(value) => Ok(Box::new(FixedClock::parse(&value)?)),
        Err(_) => Ok(Box::new(SystemClock)),
    }
}
