use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Granularity of a board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Week,
    Month,
}

impl TimeUnit {
    /// Parse a unit name, case-insensitively.
    pub fn parse(s: &str) -> Option<TimeUnit> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Some(TimeUnit::Day),
            "week" | "weeks" => Some(TimeUnit::Week),
            "month" | "months" => Some(TimeUnit::Month),
            _ => None,
        }
    }

    /// Step `date` by `amount` whole units. A week is 7 days; a month is
    /// a calendar month (day-of-month clamped at the target month's end),
    /// not 30 days. `amount` may be negative.
    pub fn advance(self, date: NaiveDate, amount: i32) -> NaiveDate {
        match self {
            TimeUnit::Day => date + Duration::days(amount as i64),
            TimeUnit::Week => date + Duration::days(7 * amount as i64),
            TimeUnit::Month => add_months(date, amount),
        }
    }

    /// Snap `date` to the first date of its bucket: the Monday of its
    /// week, the 1st of its month, or the date itself for days.
    pub fn snap(self, date: NaiveDate) -> NaiveDate {
        match self {
            TimeUnit::Day => date,
            TimeUnit::Week => week_start(date),
            TimeUnit::Month => month_start(date),
        }
    }

    /// Whether a header at `date` gets the visual separator emphasis:
    /// January for months, month-boundary weeks, Mondays for days.
    /// Purely visual; no scheduling semantics.
    pub fn is_emphasized(self, date: NaiveDate) -> bool {
        match self {
            TimeUnit::Day => date.weekday() == Weekday::Mon,
            TimeUnit::Week => month_first_in_week(date).is_some(),
            TimeUnit::Month => date.month() == 1,
        }
    }

    /// Header label for a column at `date`.
    ///
    /// Weeks containing the 1st of a month carry that month's name as a
    /// suffix, e.g. `"2024 - W05 - Feb"`.
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            TimeUnit::Day => date.format("%a, %d.%m.%y").to_string(),
            TimeUnit::Week => {
                let base = date.format("%G - W%V").to_string();
                match month_first_in_week(date) {
                    Some(first) => format!("{} - {}", base, first.format("%b")),
                    None => base,
                }
            }
            TimeUnit::Month => date.format("%b %Y").to_string(),
        }
    }
}

/// A concrete date window on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date.
    pub end: NaiveDate,
}

impl Viewport {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// The Monday of `date`'s week. Weeks run Mon–Sun, so a Sunday maps to
/// the previous Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The 1st of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// The day within `date`'s Mon–Sun week that is the 1st of a month, if
/// that week crosses a month boundary.
fn month_first_in_week(date: NaiveDate) -> Option<NaiveDate> {
    let start = week_start(date);
    (0..7)
        .map(|offset| start + Duration::days(offset))
        .find(|d| d.day() == 1)
}

fn add_months(date: NaiveDate, amount: i32) -> NaiveDate {
    if amount >= 0 {
        date.checked_add_months(Months::new(amount as u32))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new(amount.unsigned_abs()))
            .unwrap_or(date)
    }
}
