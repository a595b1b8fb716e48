//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! calendar from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, HolidayEntry};

use super::types::{CalendarMetadata, HolidayFile};

/// Largest accepted UTC offset magnitude, in minutes (exclusive).
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

/// Loads and provides access to the holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/india/
/// ├── calendar.yaml       # Calendar name and UTC offset
/// └── holidays/
///     ├── 2025.yaml       # Government holidays for 2025
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/india").unwrap();
/// println!("Calendar: {} ({} holidays)", loader.calendar().name, loader.calendar().entries.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: CalendarMetadata,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `calendar.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - The UTC offset is a day or more
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar_path = path.join("calendar.yaml");
        let metadata = Self::load_yaml::<CalendarMetadata>(&calendar_path)?;

        if metadata.utc_offset_minutes.abs() >= MAX_UTC_OFFSET_MINUTES {
            return Err(EngineError::ConfigParseError {
                path: calendar_path.display().to_string(),
                message: format!(
                    "utc_offset_minutes must be within ±{}, got {}",
                    MAX_UTC_OFFSET_MINUTES - 1,
                    metadata.utc_offset_minutes
                ),
            });
        }

        let holidays_dir = path.join("holidays");
        let entries = Self::load_holidays(&holidays_dir)?;

        info!(
            calendar = %metadata.name,
            utc_offset_minutes = metadata.utc_offset_minutes,
            holidays = entries.len(),
            "Loaded holiday calendar"
        );

        let calendar = HolidayCalendar {
            name: metadata.name.clone(),
            utc_offset_minutes: metadata.utc_offset_minutes,
            entries,
        };

        Ok(Self { metadata, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file, ordered by year.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayEntry>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                debug!(year = file.year, holidays = file.holidays.len(), "Loaded holiday file");
                files.push(file);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        files.sort_by_key(|file| file.year);

        Ok(files.into_iter().flat_map(|file| file.holidays).collect())
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the listed holidays whose date string starts with `year`.
    pub fn holidays_for_year(&self, year: i32) -> Vec<&HolidayEntry> {
        let prefix = format!("{:04}-", year);
        self.calendar
            .entries
            .iter()
            .filter(|entry| entry.date.starts_with(&prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/india"
    }

    /// Writes a throwaway config directory under the system temp dir.
    fn write_config(name: &str, calendar_yaml: &str, holidays: &[(&str, &str)]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("attendance-engine-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("holidays")).unwrap();
        fs::write(dir.join("calendar.yaml"), calendar_yaml).unwrap();
        for (file, content) in holidays {
            fs::write(dir.join("holidays").join(file), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.calendar().name, "India - Government Holidays");
        assert_eq!(loader.calendar().utc_offset_minutes, 330);
        assert_eq!(loader.metadata().utc_offset_minutes, 330);
    }

    #[test]
    fn test_holidays_for_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let holidays_2025 = loader.holidays_for_year(2025);
        assert!(!holidays_2025.is_empty());
        assert!(
            holidays_2025
                .iter()
                .any(|h| h.date == "2025-08-15" && h.description == "Independence Day")
        );
        assert!(loader.holidays_for_year(1999).is_empty());
    }

    #[test]
    fn test_entries_ordered_by_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let years: Vec<&str> = loader
            .calendar()
            .entries
            .iter()
            .map(|entry| &entry.date[..4])
            .collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_loaded_calendar_keys_listed_dates_in_utc() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let calendar = loader.calendar();

        // Independence Day is listed as 2025-08-15; at +05:30 local midnight
        // on the 16th is 2025-08-15 in UTC.
        assert!(calendar.listed_holiday(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()).is_none());
        assert!(calendar.listed_holiday(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()).is_some());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calendar.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_rejects_invalid_yaml() {
        let dir = write_config(
            "bad-yaml",
            "name: Broken\nutc_offset_minutes: [not a number\n",
            &[("2025.yaml", "year: 2025\nholidays: []\n")],
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("calendar.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_out_of_range_offset() {
        let dir = write_config(
            "bad-offset",
            "name: Far east\nutc_offset_minutes: 1440\n",
            &[("2025.yaml", "year: 2025\nholidays: []\n")],
        );

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_requires_holiday_files() {
        let dir = write_config("no-holidays", "name: Empty\nutc_offset_minutes: 0\n", &[]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no holiday files found"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_ignores_non_yaml_files() {
        let dir = write_config(
            "mixed-files",
            "name: Mixed\nutc_offset_minutes: 0\ndescription: test calendar\n",
            &[
                ("2025.yaml", "year: 2025\nholidays:\n  - date: \"2025-01-26\"\n    description: Republic Day\n"),
                ("README.txt", "not yaml"),
            ],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.calendar().entries.len(), 1);
        assert_eq!(loader.metadata().description.as_deref(), Some("test calendar"));
        let _ = fs::remove_dir_all(&dir);
    }
}
