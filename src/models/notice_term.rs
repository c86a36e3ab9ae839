//! Notice term model.
//!
//! A [`NoticeTerm`] is the contractual notice period, expressed as a count of
//! days or calendar months.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The unit a notice period is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
}

impl NoticeUnit {
    /// Parses a unit name, accepting singular and plural forms in any case.
    ///
    /// # Example
    ///
    /// ```
    /// use notice_engine::models::NoticeUnit;
    ///
    /// assert_eq!(NoticeUnit::parse("Month").unwrap(), NoticeUnit::Months);
    /// assert_eq!(NoticeUnit::parse("days").unwrap(), NoticeUnit::Days);
    /// assert!(NoticeUnit::parse("weeks").is_err());
    /// ```
    pub fn parse(unit: &str) -> EngineResult<Self> {
        match unit.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(NoticeUnit::Days),
            "month" | "months" => Ok(NoticeUnit::Months),
            _ => Err(EngineError::InvalidNoticeUnit {
                unit: unit.trim().to_string(),
            }),
        }
    }
}

/// A contractual notice period.
///
/// Serialized as text of the form `"<count> <unit>"`, e.g. `"1 month"` or
/// `"30 days"`.
///
/// # Example
///
/// ```
/// use notice_engine::models::{NoticeTerm, NoticeUnit};
///
/// let term: NoticeTerm = "2 months".parse().unwrap();
/// assert_eq!(term, NoticeTerm::new(2, NoticeUnit::Months));
/// assert_eq!(term.to_string(), "2 months");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoticeTerm {
    /// The number of units.
    pub count: u32,
    /// The unit of the period.
    pub unit: NoticeUnit,
}

impl NoticeTerm {
    /// Creates a new notice term.
    pub fn new(count: u32, unit: NoticeUnit) -> Self {
        Self { count, unit }
    }

    /// Shorthand for a term in days.
    pub fn days(count: u32) -> Self {
        Self::new(count, NoticeUnit::Days)
    }

    /// Shorthand for a term in months.
    pub fn months(count: u32) -> Self {
        Self::new(count, NoticeUnit::Months)
    }
}

impl FromStr for NoticeTerm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(count), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EngineError::invalid_input(
                "notice_period",
                format!("expected '<count> <unit>', got '{}'", s.trim()),
            ));
        };

        let count = count.parse::<u32>().map_err(|_| {
            EngineError::invalid_input(
                "notice_period",
                format!("'{}' is not a non-negative whole number", count),
            )
        })?;

        Ok(Self::new(count, NoticeUnit::parse(unit)?))
    }
}

impl TryFrom<String> for NoticeTerm {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NoticeTerm> for String {
    fn from(term: NoticeTerm) -> Self {
        term.to_string()
    }
}

impl fmt::Display for NoticeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match (self.unit, self.count) {
            (NoticeUnit::Days, 1) => "day",
            (NoticeUnit::Days, _) => "days",
            (NoticeUnit::Months, 1) => "month",
            (NoticeUnit::Months, _) => "months",
        };
        write!(f, "{} {}", self.count, unit)
    }
}
