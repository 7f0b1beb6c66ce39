use chrono::NaiveDate;

use crate::model::{ColumnHeader, TimeUnit};

/// Generate the ordered column headers for a resolved window.
///
/// The walk starts from `start` snapped to its bucket origin (Monday for
/// weeks, the 1st for months) and steps one unit per header. When
/// `target_columns` is known it is authoritative and exactly that many
/// headers are emitted; otherwise the walk continues until the date
/// passes `end` (the fallback path for callers with no resolved count).
pub fn generate_column_headers(
    start: NaiveDate,
    end: NaiveDate,
    unit: TimeUnit,
    target_columns: Option<usize>,
) -> Vec<ColumnHeader> {
    let origin = unit.snap(start);
    match target_columns {
        Some(count) => (0..count)
            .map(|position| header_at(unit.advance(origin, position as i32), position, unit))
            .collect(),
        None => {
            let mut headers = Vec::new();
            let mut date = origin;
            while date <= end {
                headers.push(header_at(date, headers.len(), unit));
                date = unit.advance(date, 1);
            }
            headers
        }
    }
}

fn header_at(date: NaiveDate, position: usize, unit: TimeUnit) -> ColumnHeader {
    ColumnHeader {
        date,
        label: unit.label(date),
        index: position + 1,
        is_emphasized: unit.is_emphasized(date),
    }
}
