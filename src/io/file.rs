use std::path::Path;

use crate::error::BoardError;
use crate::model::Task;

/// Save a task list to a JSON file.
pub fn save_tasks(tasks: &[Task], path: &Path) -> Result<(), BoardError> {
    let json = serde_json::to_string_pretty(tasks).map_err(|e| BoardError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| BoardError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a task list from a JSON file.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, BoardError> {
    let json = std::fs::read_to_string(path).map_err(|e| BoardError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&json).map_err(|e| BoardError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn tasks_round_trip_through_json() {
        let mut task = Task::new("persisted", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        task.priority = Some(2);
        task.category = Some("Work".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        save_tasks(&[task.clone()], &path).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, task.id);
        assert_eq!(loaded[0].name, "persisted");
        assert_eq!(loaded[0].priority, Some(2));
    }

    #[test]
    fn load_reports_parse_failures_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_tasks(&path).unwrap_err();
        assert!(matches!(err, BoardError::Json { .. }));
    }
}
