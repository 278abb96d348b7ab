use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use std::fmt;

/// Month/year pair identifying an accounting period.
///
/// The service scopes every listing endpoint by month and year. When the
/// caller omits either part, it defaults from the calendar month 30 days
/// before a supplied reference date, matching the "previous month" behavior
/// of the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    /// Resolves optional month/year arguments against an explicit reference
    /// date. Each missing part defaults from `today - 30 days`.
    ///
    /// The reference date is a parameter so tests can fix "now".
    pub fn resolve(month: Option<u32>, year: Option<i32>, today: NaiveDate) -> AppResult<Self> {
        let fallback = today - Duration::days(30);
        let month = month.unwrap_or_else(|| fallback.month());
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidInput(format!(
                "Month must be between 1 and 12, got: {month}"
            )));
        }
        Ok(Self {
            month,
            year: year.unwrap_or_else(|| fallback.year()),
        })
    }

    /// Resolves optional month/year arguments against the current date.
    pub fn current(month: Option<u32>, year: Option<i32>) -> AppResult<Self> {
        Self::resolve(month, year, Utc::now().date_naive())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
