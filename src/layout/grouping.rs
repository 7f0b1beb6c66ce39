use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Task;

/// Name of the single bucket used when grouping is off.
pub const ALL_TASKS: &str = "All Tasks";

/// Which task attribute names a task's group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GroupBy {
    #[default]
    None,
    Status,
    Priority,
    Category,
}

impl GroupBy {
    /// Parse a grouping name. Unknown names fall back to `None` so a
    /// stale persisted setting never breaks the pipeline.
    pub fn parse(s: &str) -> GroupBy {
        match s.trim().to_lowercase().as_str() {
            "status" => GroupBy::Status,
            "priority" => GroupBy::Priority,
            "category" => GroupBy::Category,
            _ => GroupBy::None,
        }
    }
}

impl From<String> for GroupBy {
    fn from(s: String) -> Self {
        GroupBy::parse(&s)
    }
}

/// The group a task belongs to under `group_by`, with a
/// `"No <Field>"` fallback for absent attributes.
pub fn group_key(task: &Task, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::None => ALL_TASKS.to_string(),
        GroupBy::Status => task
            .status
            .clone()
            .unwrap_or_else(|| "No Status".to_string()),
        GroupBy::Priority => task
            .priority
            .map(|p| p.to_string())
            .unwrap_or_else(|| "No Priority".to_string()),
        GroupBy::Category => task
            .category
            .clone()
            .unwrap_or_else(|| "No Category".to_string()),
    }
}

/// Bucket tasks by their group key.
///
/// Buckets appear in discovery order and hold tasks in input order; any
/// ordering beyond that (e.g. a remembered per-project group order) is a
/// caller concern, not decided here.
pub fn group_tasks<'a>(tasks: &'a [Task], group_by: GroupBy) -> IndexMap<String, Vec<&'a Task>> {
    let mut groups: IndexMap<String, Vec<&Task>> = IndexMap::new();
    for task in tasks {
        groups.entry(group_key(task, group_by)).or_default().push(task);
    }
    groups
}
