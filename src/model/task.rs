use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single time-ranged task on the board.
///
/// `end` is optional; a task without one occupies its start date only.
/// Validity (`end >= start`, priority in 1–5) is checked by
/// [`crate::layout::validate_request`] before a layout is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    /// Free-form status used for grouping (e.g. "Todo", "Done").
    pub status: Option<String>,
    /// Priority from 1 (lowest) to 5 (highest).
    pub priority: Option<u8>,
    /// Free-form category used for grouping.
    pub category: Option<String>,
    /// Source file this task came from; part of the cache fingerprint.
    pub file_path: String,
}

impl Task {
    /// Create a new task with defaults for the optional attributes.
    pub fn new(name: impl Into<String>, start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end: None,
            status: None,
            priority: None,
            category: None,
            file_path: String::new(),
        }
    }

    /// The date the task's range ends on; falls back to `start`.
    pub fn end_date(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }

    /// Task length in whole days, never less than 1.
    ///
    /// Primary sort key for row packing. A 3-day span (the 14th through
    /// the 16th) has duration 2 here — it is a sort key, not a column
    /// count.
    pub fn duration_days(&self) -> i64 {
        (self.end_date() - self.start).num_days().max(1)
    }
}
