//! Public holiday models.
//!
//! This module contains [`PublicHoliday`], the configuration-level record of a
//! named holiday, and [`HolidayTable`], the ordered set of non-working dates
//! used by the calculator.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named public holiday.
///
/// # Example
///
/// ```
/// use notice_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
///     name: "National Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
}

/// An ordered set of public holiday dates.
///
/// # Example
///
/// ```
/// use notice_engine::models::HolidayTable;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// let table: HolidayTable = [christmas].into_iter().collect();
///
/// assert!(table.contains(christmas));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayTable {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayTable {
    /// Creates an empty holiday table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from named holidays, keeping only their dates.
    pub fn from_holidays<'a, I: IntoIterator<Item = &'a PublicHoliday>>(holidays: I) -> Self {
        holidays.into_iter().map(|h| h.date).collect()
    }

    /// Returns true if the date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Adds a date to the table, returning false if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Iterates the holiday dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the table has no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayTable {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
