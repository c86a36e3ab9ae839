//! Working-day counting and stepping.
//!
//! A working day is a calendar day that is neither a rest day nor an adjusted
//! public holiday. Both operations here are inclusive of their start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkCalendar;

/// The direction in which to walk the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

/// Counts the working days in the inclusive range `[start, end]`.
///
/// # Errors
///
/// Returns `InvalidInput` if `end` is before `start`.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::count_working_days;
/// use notice_engine::models::{HolidayTable, RestDaySet, WorkCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = WorkCalendar::new(RestDaySet::weekend(), HolidayTable::new());
///
/// // Monday 2024-08-05 through Sunday 2024-08-11
/// let start = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 8, 11).unwrap();
/// assert_eq!(count_working_days(start, end, &calendar).unwrap(), 5);
/// ```
pub fn count_working_days(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &WorkCalendar,
) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::invalid_input(
            "end",
            format!("end date {} is before start date {}", end, start),
        ));
    }

    let count = start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| calendar.is_working_day(*date))
        .count();

    Ok(count as u32)
}

/// Walks from `start` in `direction` and returns the date of the `n`th working day.
///
/// `start` itself is the first candidate, so when `start` is a working day and
/// `n == 1` the result is `start`. When `n == 0` the result is `start`
/// unchanged.
///
/// Termination is guaranteed because a [`crate::models::RestDaySet`] always
/// leaves at least one working weekday and the holiday table is finite.
///
/// # Errors
///
/// Returns `InvalidDate` if the walk leaves the representable calendar range.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::{advance_n_working_days, Direction};
/// use notice_engine::models::{HolidayTable, RestDaySet, WorkCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = WorkCalendar::new(RestDaySet::weekend(), HolidayTable::new());
///
/// // Starting Wednesday 2024-08-14, the 8th working day is Friday 2024-08-23
/// let start = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
/// let end = advance_n_working_days(start, 8, &calendar, Direction::Forward).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 8, 23).unwrap());
/// ```
pub fn advance_n_working_days(
    start: NaiveDate,
    n: u32,
    calendar: &WorkCalendar,
    direction: Direction,
) -> EngineResult<NaiveDate> {
    if n == 0 {
        return Ok(start);
    }

    let mut date = start;
    let mut consumed = 0;
    loop {
        if calendar.is_working_day(date) {
            consumed += 1;
            if consumed == n {
                return Ok(date);
            }
        }
        date = step(date, direction)?;
    }
}

/// Moves one calendar day in the given direction.
pub(crate) fn step(date: NaiveDate, direction: Direction) -> EngineResult<NaiveDate> {
    let next = match direction {
        Direction::Forward => date.succ_opt(),
        Direction::Backward => date.pred_opt(),
    };
    next.ok_or_else(|| EngineError::invalid_date(date, "date arithmetic left the calendar range"))
}
