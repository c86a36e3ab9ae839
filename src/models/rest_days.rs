//! Rest day model.
//!
//! A [`RestDaySet`] records the weekdays on which an employee does not work.
//! Weekday indices follow the Monday-first convention: 0 = Monday through
//! 6 = Sunday.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The set of weekdays an employee rests on.
///
/// A rest day set never contains all seven weekdays, so every operation that
/// walks the calendar looking for a working day is guaranteed to terminate.
///
/// # Example
///
/// ```
/// use notice_engine::models::RestDaySet;
/// use chrono::Weekday;
///
/// let rest_days: RestDaySet = "saturday, sunday".parse().unwrap();
/// assert!(rest_days.contains(Weekday::Sat));
/// assert!(!rest_days.contains(Weekday::Mon));
/// assert_eq!(rest_days, RestDaySet::weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RestDaySet {
    mask: u8,
}

const ALL_DAYS: u8 = 0b0111_1111;

impl RestDaySet {
    /// Builds a rest day set from Monday-first weekday indices.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any index is outside `0..=6` or if the
    /// indices cover the whole week.
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> EngineResult<Self> {
        let mut mask = 0u8;
        for index in indices {
            if index > 6 {
                return Err(EngineError::invalid_input(
                    "rest_days",
                    format!("weekday index {} is outside 0..=6", index),
                ));
            }
            mask |= 1 << index;
        }
        Self::from_mask(mask)
    }

    /// Builds a rest day set from chrono weekdays.
    pub fn from_weekdays<I: IntoIterator<Item = Weekday>>(days: I) -> EngineResult<Self> {
        Self::from_indices(days.into_iter().map(|d| d.num_days_from_monday() as u8))
    }

    fn from_mask(mask: u8) -> EngineResult<Self> {
        if mask == ALL_DAYS {
            return Err(EngineError::invalid_input(
                "rest_days",
                "at least one weekday must be a working day",
            ));
        }
        Ok(Self { mask })
    }

    /// Saturday and Sunday.
    pub fn weekend() -> Self {
        Self {
            mask: (1 << 5) | (1 << 6),
        }
    }

    /// Returns true if the given weekday is a rest day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & (1 << day.num_days_from_monday()) != 0
    }

    /// Returns the rest days as Monday-first indices, in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|i| self.mask & (1 << i) != 0).collect()
    }

    /// Returns the rest days as chrono weekdays, Monday first.
    pub fn weekdays(&self) -> Vec<Weekday> {
        self.indices()
            .into_iter()
            .filter_map(|index| Weekday::try_from(index).ok())
            .collect()
    }

    /// Returns true if no weekday is a rest day.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl Default for RestDaySet {
    fn default() -> Self {
        Self::weekend()
    }
}

/// Parses a weekday name such as `"saturday"` or `"Sat"`.
pub fn parse_weekday(name: &str) -> EngineResult<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(EngineError::invalid_input(
            "rest_days",
            format!("unknown weekday '{}'", name.trim()),
        )),
    }
}

/// Returns the lowercase English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl FromStr for RestDaySet {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(parse_weekday)
            .collect::<EngineResult<Vec<_>>>()?;
        Self::from_weekdays(days)
    }
}

impl TryFrom<Vec<String>> for RestDaySet {
    type Error = EngineError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let days = names
            .iter()
            .map(|name| parse_weekday(name))
            .collect::<EngineResult<Vec<_>>>()?;
        Self::from_weekdays(days)
    }
}

impl From<RestDaySet> for Vec<String> {
    fn from(set: RestDaySet) -> Self {
        set.weekdays()
            .into_iter()
            .map(|d| weekday_name(d).to_string())
            .collect()
    }
}

impl fmt::Display for RestDaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = (*self).into();
        write!(f, "{}", names.join(", "))
    }
}
