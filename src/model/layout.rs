use chrono::NaiveDate;
use serde::Serialize;

use super::task::Task;
use super::timeline::{TimeUnit, Viewport};

/// One column of the board header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub date: NaiveDate,
    pub label: String,
    /// 1-based, contiguous from 1; column 0 is reserved for group labels.
    pub index: usize,
    /// Visual separator flag (January / month-boundary week / Monday).
    pub is_emphasized: bool,
}

/// A task placed on the board grid.
#[derive(Debug, Clone, Serialize)]
pub struct PositionedTask {
    pub task: Task,
    /// First column the task occupies, inclusive, 1-based.
    pub x_start: usize,
    /// Last column the task occupies, inclusive, 1-based.
    pub x_end: usize,
    /// Row within the task's group. Tasks whose column ranges intersect
    /// never share a row.
    pub y: usize,
}

/// All positioned tasks of one group. Tasks entirely outside the visible
/// window are omitted, not carried with an empty position.
#[derive(Debug, Clone, Serialize)]
pub struct TaskGrid {
    pub group: String,
    pub tasks: Vec<PositionedTask>,
}

/// The fully computed board: headers plus one grid per discovered group.
///
/// A value object — rebuilt on every computation, never mutated in place.
/// The engine hands it out as `Arc<BoardLayout>`; on a cache hit callers
/// receive the same allocation and can skip re-rendering via
/// `Arc::ptr_eq`.
#[derive(Debug, Clone, Serialize)]
pub struct BoardLayout {
    pub column_headers: Vec<ColumnHeader>,
    pub task_grids: Vec<TaskGrid>,
    /// Header count plus one label column.
    pub grid_width: usize,
    /// `max(1, highest row index) + 1`.
    pub grid_height: usize,
    pub time_unit: TimeUnit,
    pub viewport: Viewport,
}

impl BoardLayout {
    /// The empty-state layout substituted by callers when the pipeline
    /// fails upstream of the engine.
    pub fn empty(time_unit: TimeUnit, anchor: NaiveDate) -> Self {
        Self {
            column_headers: Vec::new(),
            task_grids: Vec::new(),
            grid_width: 1,
            grid_height: 2,
            time_unit,
            viewport: Viewport::new(anchor, anchor),
        }
    }
}
