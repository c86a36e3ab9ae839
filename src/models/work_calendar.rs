//! Working calendar model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{HolidayTable, RestDaySet};

/// An employee's working calendar: rest days plus adjusted public holidays.
///
/// The holiday table held here is expected to be the *adjusted* table, i.e.
/// holidays that fell on a rest day have already been moved to their make-up
/// day (see [`crate::calculation::adjust_holidays`]).
///
/// # Example
///
/// ```
/// use notice_engine::models::{HolidayTable, RestDaySet, WorkCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = WorkCalendar::new(RestDaySet::weekend(), HolidayTable::new());
///
/// // 2024-08-02 is a Friday, 2024-08-03 a Saturday
/// assert!(calendar.is_working_day(NaiveDate::from_ymd_opt(2024, 8, 2).unwrap()));
/// assert!(!calendar.is_working_day(NaiveDate::from_ymd_opt(2024, 8, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// Weekdays the employee rests on.
    pub rest_days: RestDaySet,
    /// Adjusted public holidays.
    pub holidays: HolidayTable,
}

impl WorkCalendar {
    /// Creates a working calendar from rest days and an adjusted holiday table.
    pub fn new(rest_days: RestDaySet, holidays: HolidayTable) -> Self {
        Self {
            rest_days,
            holidays,
        }
    }

    /// A day is a working day iff it is neither a rest day nor a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.rest_days.contains(date.weekday()) && !self.holidays.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_holiday_on_weekday_is_not_working_day() {
        let holidays: HolidayTable = [date(2024, 12, 25)].into_iter().collect();
        let calendar = WorkCalendar::new(RestDaySet::weekend(), holidays);
        assert!(!calendar.is_working_day(date(2024, 12, 25)));
        assert!(calendar.is_working_day(date(2024, 12, 24)));
    }

    #[test]
    fn test_custom_rest_days() {
        let rest_days: RestDaySet = "friday".parse().unwrap();
        let calendar = WorkCalendar::new(rest_days, HolidayTable::new());
        // 2024-08-02 is a Friday, 2024-08-03 a Saturday
        assert!(!calendar.is_working_day(date(2024, 8, 2)));
        assert!(calendar.is_working_day(date(2024, 8, 3)));
    }
}
