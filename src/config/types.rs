//! Configuration types for notice reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeSet;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::{DispositionPolicy, HolidayTable, PublicHoliday, RestDaySet};

/// Metadata about the jurisdiction a configuration covers.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code for the jurisdiction (e.g., "MY-14").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// Where employees send questions about their resignation.
    #[serde(default)]
    pub hr_contact_email: Option<String>,
}

/// How month-based notice periods are converted to days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthArithmetic {
    /// True calendar months, clamped to the end of short months.
    #[default]
    Calendar,
    /// Every month counts as thirty days.
    ThirtyDay,
}

/// How public holidays falling on a rest day are moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayShift {
    /// Move forward to the next day that is not a rest day.
    #[default]
    SkipRestDays,
    /// Move forward to the next day that is neither a rest day nor a holiday.
    SkipRestDaysAndHolidays,
}

/// The date-arithmetic conventions a calculation runs under.
///
/// These name the points on which individual calculators historically
/// disagreed, so that every calculation states its conventions explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConventions {
    /// When true, the acceptance date counts as day 1 of a day-based notice.
    #[serde(default)]
    pub day_notice_start_inclusive: bool,
    /// Month-to-day conversion for month-based notice.
    #[serde(default)]
    pub month_arithmetic: MonthArithmetic,
    /// How holidays on rest days are shifted.
    #[serde(default)]
    pub holiday_shift: HolidayShift,
    /// Which leave dispositions are computed by default.
    #[serde(default)]
    pub leave_disposition: DispositionPolicy,
}

/// The structure of `jurisdiction.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionFile {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// Rest days applied when a request does not name its own.
    #[serde(default)]
    pub default_rest_days: RestDaySet,
    /// Calculator conventions.
    #[serde(default)]
    pub conventions: CalculatorConventions,
}

/// The structure of a `holidays/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendarFile {
    /// The year the file covers.
    pub year: i32,
    /// The public holidays of that year.
    pub holidays: Vec<PublicHoliday>,
}

/// The complete jurisdiction configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct JurisdictionConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Default rest days.
    default_rest_days: RestDaySet,
    /// Calculator conventions.
    conventions: CalculatorConventions,
    /// Public holidays across all loaded years (sorted by date).
    holidays: Vec<PublicHoliday>,
}

impl JurisdictionConfig {
    /// Creates a new JurisdictionConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        default_rest_days: RestDaySet,
        conventions: CalculatorConventions,
        holidays: Vec<PublicHoliday>,
    ) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            metadata,
            default_rest_days,
            conventions,
            holidays: sorted_holidays,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the default rest days.
    pub fn default_rest_days(&self) -> RestDaySet {
        self.default_rest_days
    }

    /// Returns the calculator conventions.
    pub fn conventions(&self) -> CalculatorConventions {
        self.conventions
    }

    /// Returns all public holidays, sorted by date.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Returns the unadjusted holiday table.
    pub fn holiday_table(&self) -> HolidayTable {
        HolidayTable::from_holidays(&self.holidays)
    }

    /// Returns the calendar years that have at least one configured holiday.
    pub fn holiday_years(&self) -> BTreeSet<i32> {
        self.holidays.iter().map(|h| h.date.year()).collect()
    }
}
