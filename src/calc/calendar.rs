//! Date computations.
//!
//! # Responsibilities
//! - Provide the current time through a swappable clock
//! - Format the current date as `YYYY-MM-DD`
//! - Count whole days until the next January 1st
//!
//! # Design Decisions
//! - All dates are UTC so both date endpoints agree on "today"
//! - Partial days are truncated, never rounded up

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::calc::{CalcError, CalcResult};

/// Source of the current time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format the date part of `now` as `YYYY-MM-DD`.
pub fn format_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Whole days from `now` until 00:00 UTC on January 1st of the following year.
pub fn days_until_new_year(now: DateTime<Utc>) -> CalcResult<i64> {
    let next_new_year = now
        .year()
        .checked_add(1)
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(CalcError::Overflow)?
        .and_utc();

    Ok((next_new_year - now).num_days())
}
