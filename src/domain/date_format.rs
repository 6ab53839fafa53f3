//! User-configurable date patterns for note file names.
//!
//! Patterns use moment-style tokens (`YYYY-MM-DD`, `YYYY-MM`, `[Week] YYYY`).
//! Each pattern is compiled once into chrono strftime fragments; formatting
//! and parsing then go through chrono.
//!
//! Parsing is strict: a name only matches when formatting the parsed date
//! reproduces the name exactly, so `2024-1-5` does not match `YYYY-MM-DD`.

use crate::error::{HatDailyError, Result};
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Letters that are moment tokens outside brackets but have no chrono
/// equivalent here.
const UNSUPPORTED_TOKEN_LETTERS: &[char] = &[
    'Q', 'W', 'w', 'g', 'G', 'E', 'e', 'H', 'h', 'k', 'm', 's', 'S', 'a', 'A', 'X', 'x', 'Z',
    'z', 'N', 'n',
];

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// chrono strftime fragment
    Strftime(String),
    /// Day of month with its English ordinal suffix (`Do`)
    OrdinalDay,
}

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    segments: Vec<Segment>,
    has_month: bool,
    has_day: bool,
}

impl DateFormat {
    /// Compile a moment-style pattern.
    ///
    /// Supported tokens: `YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`, `DD`, `Do`,
    /// `D`, `dddd`, `ddd`. Text inside `[...]` is literal, as is punctuation
    /// and any letter that is not a moment token. Other moment tokens (`Q`,
    /// `W`, `H`, `a`, ...) are rejected.
    pub fn compile(pattern: &str) -> Result<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut segments = Vec::new();
        let mut strftime = String::new();
        let mut has_year = false;
        let mut has_month = false;
        let mut has_day = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '[' {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&ch| ch == ']')
                    .ok_or_else(|| invalid(pattern, "unterminated '[' literal"))?;
                for &ch in &chars[i + 1..i + 1 + close] {
                    push_literal(&mut strftime, ch);
                }
                i += close + 2;
                continue;
            }

            if c == 'D' && chars.get(i + 1) == Some(&'o') {
                if !strftime.is_empty() {
                    segments.push(Segment::Strftime(std::mem::take(&mut strftime)));
                }
                segments.push(Segment::OrdinalDay);
                has_day = true;
                i += 2;
                continue;
            }

            if matches!(c, 'Y' | 'M' | 'D' | 'd') {
                let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
                let directive = match (c, run) {
                    ('Y', 4) => "%Y",
                    ('Y', 2) => "%y",
                    ('M', 4) => "%B",
                    ('M', 3) => "%b",
                    ('M', 2) => "%m",
                    ('M', 1) => "%-m",
                    ('D', 2) => "%d",
                    ('D', 1) => "%-d",
                    ('d', 4) => "%A",
                    ('d', 3) => "%a",
                    _ => {
                        let token: String = std::iter::repeat(c).take(run).collect();
                        return Err(invalid(
                            pattern,
                            &format!("unsupported token '{}'", token),
                        ));
                    }
                };
                match c {
                    'Y' => has_year = true,
                    'M' => has_month = true,
                    'D' => has_day = true,
                    _ => {}
                }
                strftime.push_str(directive);
                i += run;
                continue;
            }

            if UNSUPPORTED_TOKEN_LETTERS.contains(&c) {
                let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
                let token: String = std::iter::repeat(c).take(run).collect();
                return Err(invalid(
                    pattern,
                    &format!(
                        "unsupported token '{}' (wrap literal text in brackets)",
                        token
                    ),
                ));
            }

            push_literal(&mut strftime, c);
            i += 1;
        }

        if !has_year {
            return Err(invalid(pattern, "pattern must contain a year (YYYY or YY)"));
        }
        if !strftime.is_empty() {
            segments.push(Segment::Strftime(strftime));
        }

        Ok(DateFormat {
            pattern: pattern.to_string(),
            segments,
            has_month,
            has_day,
        })
    }

    /// The pattern as the user wrote it
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a date under this pattern
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Strftime(s) => out.push_str(&date.format(s).to_string()),
                Segment::OrdinalDay => out.push_str(&ordinal(date.day())),
            }
        }
        out
    }

    /// Parse a file basename, accepting only exact matches.
    ///
    /// Fields the pattern lacks default to the start of the period, so
    /// `2024-05` under `YYYY-MM` is May 1st.
    pub fn parse_strict(&self, text: &str) -> Option<NaiveDate> {
        let mut parsed = Parsed::new();
        let mut rest = text;

        for segment in &self.segments {
            rest = match segment {
                Segment::Strftime(s) => {
                    format::parse_and_remainder(&mut parsed, rest, StrftimeItems::new(s)).ok()?
                }
                Segment::OrdinalDay => {
                    let digits = rest
                        .chars()
                        .take_while(|ch| ch.is_ascii_digit())
                        .take(2)
                        .count();
                    let day: i64 = rest[..digits].parse().ok()?;
                    parsed.set_day(day).ok()?;
                    let after = &rest[digits..];
                    ORDINAL_SUFFIXES
                        .iter()
                        .find_map(|suffix| after.strip_prefix(suffix))?
                }
            };
        }
        if !rest.is_empty() {
            return None;
        }

        if !self.has_month {
            parsed.set_month(1).ok()?;
        }
        if !self.has_day {
            parsed.set_day(1).ok()?;
        }

        let date = parsed.to_naive_date().ok()?;
        (self.format(date) == text).then_some(date)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`
fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

fn push_literal(strftime: &mut String, ch: char) {
    if ch == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(ch);
    }
}

fn invalid(pattern: &str, reason: &str) -> HatDailyError {
    HatDailyError::InvalidDateFormat {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
