//! Persisted board settings (live in the OS config directory).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::layout::GroupBy;
use crate::model::TimeUnit;

/// User-facing board configuration.
///
/// Every field has a default so a partial or stale settings file still
/// loads; an unknown `group_by` value degrades to no grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Number of visible columns. Always wins over the span of an
    /// explicitly chosen viewport.
    pub columns: usize,
    pub unit: TimeUnit,
    pub group_by: GroupBy,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            columns: 7,
            unit: TimeUnit::Day,
            group_by: GroupBy::None,
        }
    }
}

impl BoardSettings {
    /// Location of the settings file, when the platform exposes a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "timeboard")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from `path`, falling back to defaults when the
    /// file is missing or unreadable. A corrupt file is reported on
    /// stderr and replaced by defaults rather than aborting.
    pub fn load(path: &PathBuf) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Warning: failed to parse settings {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &PathBuf) -> Result<(), BoardError> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| BoardError::Json {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| BoardError::Write {
            path: path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_seven_day_ungrouped_board() {
        let settings = BoardSettings::default();
        assert_eq!(settings.columns, 7);
        assert_eq!(settings.unit, TimeUnit::Day);
        assert_eq!(settings.group_by, GroupBy::None);
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = BoardSettings {
            columns: 14,
            unit: TimeUnit::Week,
            group_by: GroupBy::Priority,
        };
        settings.save(&path).unwrap();
        assert_eq!(BoardSettings::load(&path), settings);
    }

    #[test]
    fn missing_or_corrupt_files_load_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(BoardSettings::load(&missing), BoardSettings::default());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{{{{").unwrap();
        assert_eq!(BoardSettings::load(&corrupt), BoardSettings::default());
    }

    #[test]
    fn partial_files_keep_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "columns": 21 }"#).unwrap();
        let settings = BoardSettings::load(&path);
        assert_eq!(settings.columns, 21);
        assert_eq!(settings.unit, TimeUnit::Day);
    }

    #[test]
    fn stale_group_by_values_degrade_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stale.json");
        std::fs::write(
            &path,
            r#"{ "columns": 7, "unit": "day", "group_by": "tags" }"#,
        )
        .unwrap();
        assert_eq!(BoardSettings::load(&path).group_by, GroupBy::None);
    }
}
