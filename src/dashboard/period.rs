//! Reporting periods, their windows, and their day buckets.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid period {value:?}: use week or month")]
pub struct ParsePeriodError {
    value: String,
}

/// Span a dashboard request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Week,
    Month,
}

impl ReportPeriod {
    /// Parse the period a dashboard request carries as a query string.
    pub fn parse(value: &str) -> Result<Self, ParsePeriodError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParsePeriodError {
                value: value.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Window this period covers relative to `now`.
    ///
    /// Week is the trailing seven days up to `now`; month spans the first
    /// through last calendar day of `now`'s month.
    pub fn window(&self, now: DateTime<Utc>) -> ReportWindow {
        match self {
            Self::Week => ReportWindow {
                start: now - Duration::days(7),
                end: now,
            },
            Self::Month => {
                let today = now.date_naive();
                let first = today.with_day(1).expect("day 1 exists in every month");
                let last = last_day_of_month(first);
                ReportWindow {
                    start: first.and_time(NaiveTime::MIN).and_utc(),
                    end: last
                        .and_hms_opt(23, 59, 59)
                        .expect("23:59:59 is a valid time")
                        .and_utc(),
                }
            }
        }
    }

    /// Day buckets covering the window, oldest first.
    ///
    /// Walks backward from the window end one day at a time so the count
    /// stays exact for every month length (28-31 days).
    pub fn day_buckets(&self, now: DateTime<Utc>) -> Vec<NaiveDate> {
        let end = self.window(now).end.date_naive();
        let count = match self {
            Self::Week => 7,
            Self::Month => end.day() as usize,
        };
        let mut days: Vec<NaiveDate> = (0..count)
            .filter_map(|back| end.checked_sub_days(Days::new(back as u64)))
            .collect();
        days.reverse();
        days
    }
}

/// Inclusive window handed to the transaction source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .expect("calendar arithmetic stays in range")
}
