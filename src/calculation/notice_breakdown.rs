//! Monthly breakdown of unpaid notice.
//!
//! Splits the unpaid notice shortfall into calendar-month buckets, starting the
//! day after the requested last day, for the wage-recovery statement.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::MonthlyShortfall;

/// Splits `unpaid_days` into calendar-month buckets.
///
/// The first bucket starts the day after `requested_last_day`. A fractional
/// shortfall is rounded up to whole calendar days.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::breakdown_unpaid_notice_by_month;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let requested = NaiveDate::from_ymd_opt(2024, 7, 25).unwrap();
/// let buckets = breakdown_unpaid_notice_by_month(Decimal::from(17), requested).unwrap();
///
/// assert_eq!(buckets.len(), 2);
/// assert_eq!((buckets[0].month, buckets[0].days), (7, 6));
/// assert_eq!((buckets[1].month, buckets[1].days), (8, 11));
/// ```
pub fn breakdown_unpaid_notice_by_month(
    unpaid_days: Decimal,
    requested_last_day: NaiveDate,
) -> EngineResult<Vec<MonthlyShortfall>> {
    let mut remaining = whole_days(unpaid_days, "short_notice_days_unpaid")?;
    let mut buckets = Vec::new();
    if remaining == 0 {
        return Ok(buckets);
    }

    let mut current = requested_last_day
        .succ_opt()
        .ok_or_else(|| EngineError::invalid_date(requested_last_day, "no day follows it"))?;

    while remaining > 0 {
        let days = days_left_in_month(current)?.min(remaining);
        buckets.push(MonthlyShortfall {
            year: current.year(),
            month: current.month(),
            days,
        });
        remaining -= days;
        current = first_of_next_month(current)?;
    }

    Ok(buckets)
}

/// Rounds a non-negative day count up to a whole number of days.
pub(crate) fn whole_days(value: Decimal, field: &str) -> EngineResult<u32> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_input(field, "cannot be negative"));
    }
    value
        .ceil()
        .to_u32()
        .ok_or_else(|| EngineError::invalid_input(field, format!("{} days is out of range", value)))
}

/// Calendar days from `date` to the end of its month, inclusive.
fn days_left_in_month(date: NaiveDate) -> EngineResult<u32> {
    let last = first_of_next_month(date)?
        .pred_opt()
        .ok_or_else(|| EngineError::invalid_date(date, "month has no last day"))?;
    Ok(last.day() - date.day() + 1)
}

fn first_of_next_month(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .ok_or_else(|| EngineError::invalid_date(date, "no following month"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_unpaid_gives_no_buckets() {
        let buckets = breakdown_unpaid_notice_by_month(Decimal::ZERO, date(2024, 7, 25)).unwrap();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_single_month() {
        let buckets = breakdown_unpaid_notice_by_month(dec("10"), date(2024, 8, 2)).unwrap();
        assert_eq!(
            buckets,
            vec![MonthlyShortfall {
                year: 2024,
                month: 8,
                days: 10
            }]
        );
    }

    #[test]
    fn test_starts_day_after_month_end() {
        // Requested last day is the last of July: everything falls in August
        let buckets = breakdown_unpaid_notice_by_month(dec("5"), date(2024, 7, 31)).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].month, 8);
    }

    #[test]
    fn test_spans_year_end() {
        let buckets = breakdown_unpaid_notice_by_month(dec("45"), date(2024, 12, 20)).unwrap();
        assert_eq!(buckets.len(), 3);
        assert_eq!((buckets[0].year, buckets[0].month, buckets[0].days), (2024, 12, 11));
        assert_eq!((buckets[1].year, buckets[1].month, buckets[1].days), (2025, 1, 31));
        assert_eq!((buckets[2].year, buckets[2].month, buckets[2].days), (2025, 2, 3));
    }

    #[test]
    fn test_fractional_unpaid_rounds_up() {
        let buckets = breakdown_unpaid_notice_by_month(dec("2.5"), date(2024, 8, 2)).unwrap();
        assert_eq!(buckets[0].days, 3);
    }

    #[test]
    fn test_whole_days_rejects_negative() {
        let result = whole_days(dec("-1"), "leave_balance");
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }
}
