pub mod cache;
pub mod grouping;
pub mod headers;
pub mod packing;
pub mod viewport;

pub use cache::{LayoutCache, LayoutKey};
pub use grouping::{group_key, group_tasks, GroupBy, ALL_TASKS};
pub use headers::generate_column_headers;
pub use packing::pack;
pub use viewport::{resolve_viewport, ResolvedViewport, ViewportSpec};

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::BoardError;
use crate::model::{BoardLayout, Task, TaskGrid, TimeUnit, Viewport};

/// Everything a layout computation depends on.
#[derive(Debug, Clone)]
pub struct LayoutRequest {
    pub tasks: Vec<Task>,
    pub unit: TimeUnit,
    pub current_date: NaiveDate,
    pub columns: usize,
    /// Explicit window; `None` centers the window on `current_date`.
    pub viewport: Option<Viewport>,
    pub group_by: GroupBy,
    /// Caller-remembered group order. Participates in the cache
    /// fingerprint only; this engine never reorders groups.
    pub available_groups: Vec<String>,
}

/// Check a request before handing it to the engine.
///
/// The engine assumes validated input and does not re-check dates on
/// every call; this is the upstream validator seam. Callers that skip it
/// get deterministic but unspecified placement for out-of-contract
/// tasks.
pub fn validate_request(request: &LayoutRequest) -> Result<(), BoardError> {
    if request.columns == 0 {
        return Err(BoardError::InvalidColumnCount);
    }
    if let Some(viewport) = request.viewport {
        if viewport.start >= viewport.end {
            return Err(BoardError::InvalidViewport {
                start: viewport.start,
                end: viewport.end,
            });
        }
    }
    for task in &request.tasks {
        if let Some(end) = task.end {
            if end < task.start {
                return Err(BoardError::InvalidTaskRange {
                    name: task.name.clone(),
                    start: task.start,
                    end,
                });
            }
        }
        if let Some(priority) = task.priority {
            if !(1..=5).contains(&priority) {
                return Err(BoardError::InvalidPriority {
                    name: task.name.clone(),
                    priority,
                });
            }
        }
    }
    Ok(())
}

/// The timeline layout engine: resolves the viewport, generates headers,
/// groups tasks, packs rows, and memoizes whole layouts.
///
/// Pure apart from the cache it owns; single-threaded by design. Owners
/// construct one per board, so tests get isolated instances instead of a
/// process-wide cache.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    cache: LayoutCache,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            cache: LayoutCache::new(),
        }
    }

    /// Compute (or recall) the layout for `request`.
    ///
    /// Identical fingerprints return the same `Arc`, so callers can skip
    /// re-rendering via `Arc::ptr_eq`.
    pub fn compute(&mut self, request: &LayoutRequest) -> Arc<BoardLayout> {
        let spec = match request.viewport {
            Some(viewport) => ViewportSpec::Explicit(viewport),
            None => ViewportSpec::Centered,
        };
        let resolved =
            resolve_viewport(request.current_date, request.unit, request.columns, spec);

        let key = LayoutKey::new(
            &request.tasks,
            request.unit,
            request.current_date,
            request.viewport,
            request.group_by,
            &request.available_groups,
            resolved.columns,
        );
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let headers = generate_column_headers(
            resolved.start,
            resolved.end,
            request.unit,
            Some(resolved.columns),
        );
        let task_grids: Vec<TaskGrid> = group_tasks(&request.tasks, request.group_by)
            .into_iter()
            .map(|(group, tasks)| TaskGrid {
                group,
                tasks: pack(&tasks, &headers, request.unit),
            })
            .collect();

        let max_row = task_grids
            .iter()
            .flat_map(|grid| grid.tasks.iter().map(|t| t.y))
            .max()
            .unwrap_or(0);

        let layout = Arc::new(BoardLayout {
            grid_width: headers.len() + 1,
            grid_height: max_row.max(1) + 1,
            column_headers: headers,
            task_grids,
            time_unit: request.unit,
            viewport: Viewport::new(resolved.start, resolved.end),
        });
        self.cache.insert(key, Arc::clone(&layout));
        layout
    }

    /// Drop every memoized layout. Owners call this defensively on any
    /// mutation that could bypass the fingerprint.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    pub fn cached_layouts(&self) -> usize {
        self.cache.len()
    }
}
