use std::path::Path;

use crate::error::BoardError;
use crate::model::Task;

/// Export tasks to a CSV file matching the import columns.
///
/// Columns: Name, Start, End, Status, Priority, Category.
/// Dates are formatted as YYYY-MM-DD. Returns the number of tasks
/// written.
pub fn export_csv(tasks: &[Task], path: &Path) -> Result<usize, BoardError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["Name", "Start", "End", "Status", "Priority", "Category"])?;

    for task in tasks {
        wtr.write_record([
            task.name.as_str(),
            &task.start.to_string(),
            &task.end.map(|d| d.to_string()).unwrap_or_default(),
            task.status.as_deref().unwrap_or(""),
            &task.priority.map(|p| p.to_string()).unwrap_or_default(),
            task.category.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush().map_err(|e| BoardError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(tasks.len())
}
