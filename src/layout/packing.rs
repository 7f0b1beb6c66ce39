use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::Duration;

use crate::model::timeline::{month_start, week_start};
use crate::model::{ColumnHeader, PositionedTask, Task, TimeUnit};

/// Assign every visible task of one group a column span and a row such
/// that no two tasks whose spans intersect share a row.
///
/// Greedy first-fit over rows, visiting tasks longest-first: the hardest
/// tasks to place claim low rows and smaller tasks interleave around
/// them. Not guaranteed minimal in pathological cases; collision
/// freedom is the contract.
pub fn pack(tasks: &[&Task], headers: &[ColumnHeader], unit: TimeUnit) -> Vec<PositionedTask> {
    let mut spanned: Vec<(&Task, usize, usize)> = tasks
        .iter()
        .filter_map(|task| {
            column_span(task, headers, unit).map(|(x_start, x_end)| (*task, x_start, x_end))
        })
        .collect();
    // Stable sort: equal keys keep input order, so output is
    // reproducible for identical input.
    spanned.sort_by(|a, b| packing_order(a.0, b.0));

    let mut rows: Vec<HashSet<usize>> = Vec::new();
    let mut positioned = Vec::with_capacity(spanned.len());
    for (task, x_start, x_end) in spanned {
        let y = match rows
            .iter()
            .position(|occupied| !(x_start..=x_end).any(|column| occupied.contains(&column)))
        {
            Some(row) => row,
            None => {
                rows.push(HashSet::new());
                rows.len() - 1
            }
        };
        rows[y].extend(x_start..=x_end);
        positioned.push(PositionedTask {
            task: task.clone(),
            x_start,
            x_end,
            y,
        });
    }
    positioned
}

/// Greedy placement order: duration descending, then priority
/// descending (absent = 0), then start ascending.
fn packing_order(a: &Task, b: &Task) -> Ordering {
    b.duration_days()
        .cmp(&a.duration_days())
        .then_with(|| b.priority.unwrap_or(0).cmp(&a.priority.unwrap_or(0)))
        .then_with(|| a.start.cmp(&b.start))
}

/// Inclusive 1-based column range of the headers the task's dates fall
/// into, or `None` when the task misses the visible window entirely
/// (such a task is dropped, not positioned).
fn column_span(
    task: &Task,
    headers: &[ColumnHeader],
    unit: TimeUnit,
) -> Option<(usize, usize)> {
    let mut span: Option<(usize, usize)> = None;
    for header in headers {
        if header_covers(header, task, unit) {
            span = Some(match span {
                None => (header.index, header.index),
                Some((first, _)) => (first, header.index),
            });
        }
    }
    span
}

/// Whether a header's bucket intersects the task's date range.
fn header_covers(header: &ColumnHeader, task: &Task, unit: TimeUnit) -> bool {
    let start = task.start;
    let end = task.end_date();
    match unit {
        TimeUnit::Day => header.date >= start && header.date <= end,
        TimeUnit::Week => {
            let from = week_start(header.date);
            from <= end && from + Duration::days(6) >= start
        }
        TimeUnit::Month => {
            let from = month_start(header.date);
            let last = TimeUnit::Month.advance(from, 1) - Duration::days(1);
            from <= end && last >= start
        }
    }
}
