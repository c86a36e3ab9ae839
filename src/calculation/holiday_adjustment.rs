//! Public holiday adjustment for rest days.
//!
//! When a public holiday falls on one of an employee's rest days, the employee
//! receives a make-up day off instead. This module moves such holidays forward
//! to the make-up day so that the adjusted table can be used directly when
//! counting working days.

use chrono::{Datelike, NaiveDate};

use crate::config::HolidayShift;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayTable, RestDaySet, WorkCalendar};

/// Moves every holiday that falls on a rest day forward to its make-up day.
///
/// Holidays that do not fall on a rest day pass through unchanged. A holiday on
/// a rest day advances one day at a time until it lands on a weekday outside
/// `rest_days`. Under [`HolidayShift::SkipRestDaysAndHolidays`] the landing day
/// must also not already be a holiday, so two adjacent holidays never collapse
/// onto the same make-up day.
///
/// The adjustment is idempotent: adjusting an already adjusted table returns
/// it unchanged, since no adjusted holiday lies on a rest day.
///
/// # Errors
///
/// Returns `InvalidDate` if a make-up day would fall outside the representable
/// calendar range.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::adjust_holidays;
/// use notice_engine::config::HolidayShift;
/// use notice_engine::models::{HolidayTable, RestDaySet};
/// use chrono::NaiveDate;
///
/// // 2024-08-31 is a Saturday
/// let national_day = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
/// let table: HolidayTable = [national_day].into_iter().collect();
///
/// let adjusted = adjust_holidays(&table, &RestDaySet::weekend(), HolidayShift::SkipRestDays).unwrap();
/// assert!(adjusted.contains(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()));
/// assert!(!adjusted.contains(national_day));
/// ```
pub fn adjust_holidays(
    holidays: &HolidayTable,
    rest_days: &RestDaySet,
    shift: HolidayShift,
) -> EngineResult<HolidayTable> {
    let (on_rest_day, unaffected): (Vec<NaiveDate>, Vec<NaiveDate>) = holidays
        .iter()
        .partition(|date| rest_days.contains(date.weekday()));

    let mut adjusted: HolidayTable = unaffected.into_iter().collect();

    for holiday in on_rest_day {
        let mut make_up = holiday;
        loop {
            make_up = make_up
                .succ_opt()
                .ok_or_else(|| EngineError::invalid_date(make_up, "no make-up day after holiday"))?;

            let blocked = rest_days.contains(make_up.weekday())
                || (shift == HolidayShift::SkipRestDaysAndHolidays && adjusted.contains(make_up));
            if !blocked {
                break;
            }
        }
        adjusted.insert(make_up);
    }

    Ok(adjusted)
}

/// Builds a [`WorkCalendar`] from rest days and an unadjusted holiday table.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::build_work_calendar;
/// use notice_engine::config::HolidayShift;
/// use notice_engine::models::{HolidayTable, RestDaySet};
/// use chrono::NaiveDate;
///
/// let saturday_holiday = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
/// let table: HolidayTable = [saturday_holiday].into_iter().collect();
///
/// let calendar = build_work_calendar(RestDaySet::weekend(), &table, HolidayShift::SkipRestDays).unwrap();
/// assert!(!calendar.is_working_day(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()));
/// ```
pub fn build_work_calendar(
    rest_days: RestDaySet,
    holidays: &HolidayTable,
    shift: HolidayShift,
) -> EngineResult<WorkCalendar> {
    let adjusted = adjust_holidays(holidays, &rest_days, shift)?;
    Ok(WorkCalendar::new(rest_days, adjusted))
}

/// Returns the holidays in `holidays` that fall on a rest day, in date order.
pub fn holidays_on_rest_days(
    holidays: &HolidayTable,
    rest_days: &RestDaySet,
) -> Vec<NaiveDate> {
    holidays
        .iter()
        .filter(|date| rest_days.contains(date.weekday()))
        .collect()
}
