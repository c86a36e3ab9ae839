//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! configurations from YAML files.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayTable, PublicHoliday, RestDaySet};

use super::types::{
    CalculatorConventions, HolidayCalendarFile, JurisdictionConfig, JurisdictionFile,
    JurisdictionMetadata,
};

/// Loads and provides access to jurisdiction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query holidays, rest days and conventions.
///
/// # Directory Structure
///
/// ```text
/// config/my-kl/
/// ├── jurisdiction.yaml   # Metadata, default rest days, conventions
/// └── holidays/
///     └── 2024.yaml       # Public holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use notice_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/my-kl").unwrap();
/// println!("Loaded jurisdiction: {}", loader.jurisdiction().name);
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
/// assert_eq!(loader.holiday_name(date), Some("National Day"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: JurisdictionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `jurisdiction.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - A holiday file lists a date outside its declared year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let jurisdiction = Self::load_yaml::<JurisdictionFile>(&jurisdiction_path)?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        debug!(
            jurisdiction = %jurisdiction.jurisdiction.code,
            holidays = holidays.len(),
            rest_days = %jurisdiction.default_rest_days,
            "Loaded jurisdiction configuration"
        );

        let config = JurisdictionConfig::new(
            jurisdiction.jurisdiction,
            jurisdiction.default_rest_days,
            jurisdiction.conventions,
            holidays,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: JurisdictionConfig) -> Self {
        Self { config }
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

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<PublicHoliday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendarFile>(&path)?;
                if let Some(stray) = calendar.holidays.iter().find(|h| h.date.year() != calendar.year)
                {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            stray.name, stray.date, calendar.year
                        ),
                    });
                }
                holidays.extend(calendar.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying jurisdiction configuration.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the calculator conventions.
    pub fn conventions(&self) -> CalculatorConventions {
        self.config.conventions()
    }

    /// Returns the default rest days.
    pub fn default_rest_days(&self) -> RestDaySet {
        self.config.default_rest_days()
    }

    /// Returns the unadjusted table of all configured holidays.
    pub fn holiday_table(&self) -> HolidayTable {
        self.config.holiday_table()
    }

    /// Returns the name of the holiday on the given date, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.config
            .holidays()
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }

    /// Returns the calendar years the holiday files cover.
    pub fn holiday_years(&self) -> BTreeSet<i32> {
        self.config.holiday_years()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HolidayShift, MonthArithmetic};
    use crate::models::DispositionPolicy;

    fn config_path() -> &'static str {
        "./config/my-kl"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.jurisdiction().code, "MY-14");
        assert_eq!(loader.jurisdiction().name, "Kuala Lumpur");
    }

    #[test]
    fn test_default_rest_days_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.default_rest_days(), RestDaySet::weekend());
    }

    #[test]
    fn test_conventions_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let conventions = loader.conventions();
        assert!(!conventions.day_notice_start_inclusive);
        assert_eq!(conventions.month_arithmetic, MonthArithmetic::Calendar);
        assert_eq!(conventions.holiday_shift, HolidayShift::SkipRestDays);
        assert_eq!(conventions.leave_disposition, DispositionPolicy::Both);
    }

    #[test]
    fn test_holidays_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let table = loader.holiday_table();
        assert_eq!(table.len(), 16);
        assert!(table.contains(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
    }

    #[test]
    fn test_holiday_name_lookup() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
        assert_eq!(loader.holiday_name(date), Some("National Day"));

        let ordinary = NaiveDate::from_ymd_opt(2024, 8, 30).unwrap();
        assert_eq!(loader.holiday_name(ordinary), None);
    }

    #[test]
    fn test_holiday_years_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.holiday_years().into_iter().collect::<Vec<_>>(), vec![2024]);
    }

    #[test]
    fn test_hr_contact_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(
            loader.jurisdiction().hr_contact_email.as_deref(),
            Some("hr@example.com.my")
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("jurisdiction.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
