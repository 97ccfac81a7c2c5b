use crate::VmonError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Length of the default range, ending today.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate, VmonError> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}

/// An inclusive calendar date range with `start <= end`.
///
/// Inverted ranges are rejected at construction rather than swapped or
/// clamped, so every `DateRange` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, VmonError> {
        if start > end {
            return Err(VmonError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both ends from "YYYY-MM-DD" strings (the HTML date input format).
    pub fn parse(start: &str, end: &str) -> Result<Self, VmonError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// The `days` days ending on (and including the instant of) `end`.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let start = end - Duration::days(i64::from(days));
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `count` instants evenly spaced from start midnight to end midnight,
    /// both ends included. Spacing is computed in milliseconds and floored,
    /// so short ranges repeat dates rather than skipping the end.
    pub fn sample_instants(&self, count: usize) -> Vec<NaiveDateTime> {
        let first = self.start.and_time(NaiveTime::MIN);
        match count {
            0 => Vec::new(),
            1 => vec![first],
            _ => {
                let last = self.end.and_time(NaiveTime::MIN);
                let span_ms = (last - first).num_milliseconds();
                let steps = (count - 1) as i64;
                (0..count as i64)
                    .map(|i| first + Duration::milliseconds(span_ms * i / steps))
                    .collect()
            }
        }
    }

    /// Calendar dates of [`sample_instants`](Self::sample_instants).
    pub fn sample_dates(&self, count: usize) -> Vec<NaiveDate> {
        self.sample_instants(count)
            .into_iter()
            .map(|instant| instant.date())
            .collect()
    }
}
