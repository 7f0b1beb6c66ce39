use chrono::NaiveDate;

use crate::model::{TimeUnit, Viewport};

/// How the visible window is chosen: either the caller pins the start
/// date, or the window is centered around an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSpec {
    /// Caller-chosen window. Only `start` is authoritative; the end is
    /// recomputed so the window holds exactly the configured column
    /// count.
    Explicit(Viewport),
    /// No explicit window: center on the anchor date.
    Centered,
}

/// A viewport clamped to an exact column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedViewport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub columns: usize,
}

/// Resolve the visible window to exactly `columns` columns.
///
/// The configured column count always wins: resizing an explicit window
/// without changing `columns` still yields `columns` columns, with `end`
/// recomputed from `start`. The centered branch splits the remaining
/// columns as `past = (columns - 1) / 2`, the rest in the future, so
/// `columns == 1` pins the window to the anchor date itself.
pub fn resolve_viewport(
    anchor: NaiveDate,
    unit: TimeUnit,
    columns: usize,
    spec: ViewportSpec,
) -> ResolvedViewport {
    let columns = columns.max(1);
    let start = match spec {
        ViewportSpec::Explicit(viewport) => viewport.start,
        ViewportSpec::Centered => {
            let past = (columns - 1) / 2;
            unit.advance(anchor, -(past as i32))
        }
    };
    // Single clamp step shared by both branches.
    let end = unit.advance(start, columns as i32 - 1);
    ResolvedViewport {
        start,
        end,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn centered_splits_past_and_future() {
        let resolved = resolve_viewport(
            date(2024, 1, 15),
            TimeUnit::Day,
            7,
            ViewportSpec::Centered,
        );
        assert_eq!(resolved.start, date(2024, 1, 12));
        assert_eq!(resolved.end, date(2024, 1, 18));
        assert_eq!(resolved.columns, 7);
    }

    #[test]
    fn centered_single_column_is_the_anchor() {
        let resolved = resolve_viewport(
            date(2024, 1, 15),
            TimeUnit::Day,
            1,
            ViewportSpec::Centered,
        );
        assert_eq!(resolved.start, date(2024, 1, 15));
        assert_eq!(resolved.end, date(2024, 1, 15));
    }

    #[test]
    fn centered_even_count_biases_future() {
        let resolved = resolve_viewport(
            date(2024, 1, 15),
            TimeUnit::Day,
            8,
            ViewportSpec::Centered,
        );
        // past = 3, future = 4
        assert_eq!(resolved.start, date(2024, 1, 12));
        assert_eq!(resolved.end, date(2024, 1, 19));
    }

    #[test]
    fn centered_works_per_unit() {
        let week = resolve_viewport(
            date(2024, 1, 15),
            TimeUnit::Week,
            7,
            ViewportSpec::Centered,
        );
        assert_eq!(week.start, date(2023, 12, 25));
        assert_eq!(week.end, date(2024, 2, 5));

        let month = resolve_viewport(
            date(2024, 1, 15),
            TimeUnit::Month,
            7,
            ViewportSpec::Centered,
        );
        assert_eq!(month.start, date(2023, 10, 15));
        assert_eq!(month.end, date(2024, 4, 15));
    }

    #[test]
    fn explicit_start_is_verbatim_and_count_wins() {
        // A 16-day window with 5 configured columns still yields 5.
        let spec = ViewportSpec::Explicit(Viewport::new(
            date(2024, 1, 1),
            date(2024, 1, 16),
        ));
        let resolved = resolve_viewport(date(2024, 6, 1), TimeUnit::Day, 5, spec);
        assert_eq!(resolved.start, date(2024, 1, 1));
        assert_eq!(resolved.end, date(2024, 1, 5));
        assert_eq!(resolved.columns, 5);
    }

    #[test]
    fn explicit_window_ignores_anchor() {
        let spec = ViewportSpec::Explicit(Viewport::new(
            date(2024, 3, 4),
            date(2024, 3, 10),
        ));
        let resolved = resolve_viewport(date(2030, 1, 1), TimeUnit::Week, 3, spec);
        assert_eq!(resolved.start, date(2024, 3, 4));
        assert_eq!(resolved.end, date(2024, 3, 18));
    }

    #[test]
    fn large_counts_resolve_without_truncation() {
        let resolved = resolve_viewport(
            date(2024, 1, 15),
            TimeUnit::Day,
            50,
            ViewportSpec::Centered,
        );
        // past = 24, future = 25
        assert_eq!(resolved.start, date(2023, 12, 22));
        assert_eq!(resolved.end, date(2024, 2, 9));
        assert_eq!(resolved.columns, 50);
    }
}
