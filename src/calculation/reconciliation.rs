//! Notice/leave reconciliation.
//!
//! This module allocates an employee's leave balance between covering a notice
//! shortfall and adjusting the physical last working day.
//!
//! # Algorithm
//!
//! 1. Unserved notice is the number of calendar days from the requested last
//!    day to the official last working day (never negative).
//! 2. Leave pays out the shortfall first, one leave day per unserved day.
//! 3. Any shortfall leave cannot cover is unpaid and recovered from wages.
//! 4. Leave that remains is either cleared during the notice period
//!    (Option A) or used to extend the last working day (Option B).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClearDuringNoticeOutcome, DispositionPolicy, ExtendLastDayOutcome, LeaveDisposition,
    ReconciliationResult, WorkCalendar,
};

use super::notice_breakdown::{breakdown_unpaid_notice_by_month, whole_days};
use super::working_days::{Direction, advance_n_working_days, count_working_days, step};

/// The largest leave balance, in days, a reconciliation accepts.
pub const MAX_LEAVE_BALANCE_DAYS: u32 = 100;

/// Reconciles the notice shortfall against the leave balance.
///
/// # Arguments
///
/// * `accepted` - The date the resignation notice was accepted
/// * `official` - The official last working day under the full notice
/// * `requested` - The last day the employee asked to be present
/// * `leave_balance` - Unused leave in days (may be fractional)
/// * `calendar` - The employee's rest days and adjusted holidays
/// * `policy` - Which leave dispositions to compute
///
/// # Returns
///
/// A complete [`ReconciliationResult`]. When both dispositions are computed,
/// Option B determines the headline `final_physical_working_day` and
/// `last_payroll_date`.
///
/// # Errors
///
/// Returns `InvalidInput` if the leave balance is negative or above
/// [`MAX_LEAVE_BALANCE_DAYS`], or if either the requested or the official
/// last day is before the acceptance date.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::reconcile;
/// use notice_engine::models::{DispositionPolicy, HolidayTable, RestDaySet, WorkCalendar};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calendar = WorkCalendar::new(RestDaySet::weekend(), HolidayTable::new());
/// let result = reconcile(
///     NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 8, 13).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
///     Decimal::from(20),
///     &calendar,
///     DispositionPolicy::ExtendLastDay,
/// )
/// .unwrap();
///
/// assert_eq!(result.unserved_notice_days, 11);
/// assert_eq!(result.leave_used_to_offset_notice, Decimal::from(11));
/// assert_eq!(result.remaining_leave_balance, Decimal::from(9));
/// // 9 working days counted from Wednesday 2024-08-14
/// assert_eq!(result.last_payroll_date, NaiveDate::from_ymd_opt(2024, 8, 26).unwrap());
/// ```
pub fn reconcile(
    accepted: NaiveDate,
    official: NaiveDate,
    requested: NaiveDate,
    leave_balance: Decimal,
    calendar: &WorkCalendar,
    policy: DispositionPolicy,
) -> EngineResult<ReconciliationResult> {
    validate(accepted, official, requested, leave_balance)?;

    let unserved_notice_days = (official - requested).num_days().max(0) as u32;
    let unserved = Decimal::from(unserved_notice_days);

    let leave_used_to_offset_notice = unserved.min(leave_balance);
    let remaining_leave_balance = leave_balance - leave_used_to_offset_notice;
    let short_notice_days_unpaid = unserved - leave_used_to_offset_notice;

    let unpaid_notice_breakdown =
        breakdown_unpaid_notice_by_month(short_notice_days_unpaid, requested)?;

    let leave_days_to_place = whole_days(remaining_leave_balance, "remaining_leave_balance")?;

    let mut clear_during_notice = None;
    let mut extend_last_day = None;
    if leave_days_to_place > 0 {
        if policy.includes_clear() {
            clear_during_notice = Some(clear_leave_during_notice(
                accepted,
                official,
                requested,
                leave_days_to_place,
                calendar,
            )?);
        }
        if policy.includes_extend() {
            extend_last_day = Some(extend_with_leave(
                official,
                requested,
                leave_days_to_place,
                calendar,
            )?);
        }
    }

    let (disposition_applied, final_physical_working_day, last_payroll_date) =
        match (&extend_last_day, &clear_during_notice) {
            (Some(extend), _) => (
                Some(LeaveDisposition::ExtendLastDay),
                extend.final_physical_working_day,
                extend.last_payroll_date,
            ),
            (None, Some(clear)) => (
                Some(LeaveDisposition::ClearDuringNotice),
                clear.final_physical_working_day,
                clear.last_payroll_date,
            ),
            (None, None) => (None, requested, requested),
        };

    Ok(ReconciliationResult {
        notice_accepted_date: accepted,
        official_last_working_day: official,
        requested_last_day: requested,
        unserved_notice_days,
        leave_balance,
        leave_used_to_offset_notice,
        remaining_leave_balance,
        short_notice_days_unpaid,
        unpaid_notice_breakdown,
        disposition_applied,
        clear_during_notice,
        extend_last_day,
        final_physical_working_day,
        last_payroll_date,
    })
}

fn validate(
    accepted: NaiveDate,
    official: NaiveDate,
    requested: NaiveDate,
    leave_balance: Decimal,
) -> EngineResult<()> {
    if leave_balance.is_sign_negative() && !leave_balance.is_zero() {
        return Err(EngineError::invalid_input(
            "leave_balance",
            format!("{} cannot be negative", leave_balance),
        ));
    }
    if leave_balance > Decimal::from(MAX_LEAVE_BALANCE_DAYS) {
        return Err(EngineError::invalid_input(
            "leave_balance",
            format!(
                "{} exceeds the maximum of {} days",
                leave_balance, MAX_LEAVE_BALANCE_DAYS
            ),
        ));
    }
    if requested < accepted {
        return Err(EngineError::invalid_input(
            "requested_last_day",
            format!(
                "requested last day {} is before notice acceptance {}",
                requested, accepted
            ),
        ));
    }
    if official < accepted {
        return Err(EngineError::invalid_input(
            "official_last_working_day",
            format!(
                "official last day {} is before notice acceptance {}",
                official, accepted
            ),
        ));
    }
    Ok(())
}

/// Option A: take the remaining leave as the last working days before `requested`.
///
/// Only working days from the acceptance date up to `requested`, both
/// inclusive, can be cleared. Leave that does not fit is carried forward past
/// the later of `requested` and `official`, exactly as Option B would, and
/// extends payroll.
pub fn clear_leave_during_notice(
    accepted: NaiveDate,
    official: NaiveDate,
    requested: NaiveDate,
    leave_days: u32,
    calendar: &WorkCalendar,
) -> EngineResult<ClearDuringNoticeOutcome> {
    let available = if requested >= accepted {
        count_working_days(accepted, requested, calendar)?
    } else {
        0
    };
    let leave_days_cleared = leave_days.min(available);
    let overflow_leave_days = leave_days - leave_days_cleared;

    let (leave_start_date, final_physical_working_day) = if leave_days_cleared > 0 {
        let start =
            advance_n_working_days(requested, leave_days_cleared, calendar, Direction::Backward)?;
        (
            Some(start),
            last_working_day_before(start, step(accepted, Direction::Backward)?, calendar)?,
        )
    } else {
        (None, requested)
    };

    let last_payroll_date = if overflow_leave_days > 0 {
        extend_with_leave(official, requested, overflow_leave_days, calendar)?.last_payroll_date
    } else {
        requested
    };

    Ok(ClearDuringNoticeOutcome {
        leave_days_cleared,
        leave_start_date,
        final_physical_working_day,
        overflow_leave_days,
        last_payroll_date,
    })
}

/// Option B: count the remaining leave forward past the last day.
///
/// Counting starts the day after the later of `requested` and `official`: when
/// the shortfall was offset by leave the employee is already paid through
/// `official`, otherwise through `requested`.
pub fn extend_with_leave(
    official: NaiveDate,
    requested: NaiveDate,
    leave_days: u32,
    calendar: &WorkCalendar,
) -> EngineResult<ExtendLastDayOutcome> {
    let extension_start_date = step(requested.max(official), Direction::Forward)?;
    let extended =
        advance_n_working_days(extension_start_date, leave_days, calendar, Direction::Forward)?;

    Ok(ExtendLastDayOutcome {
        leave_days_extended: leave_days,
        extension_start_date,
        final_physical_working_day: extended,
        last_payroll_date: extended,
    })
}

/// The last working day strictly before `date`, never earlier than `floor`.
fn last_working_day_before(
    date: NaiveDate,
    floor: NaiveDate,
    calendar: &WorkCalendar,
) -> EngineResult<NaiveDate> {
    let mut day = step(date, Direction::Backward)?;
    while day > floor && !calendar.is_working_day(day) {
        day = step(day, Direction::Backward)?;
    }
    Ok(day.max(floor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HolidayTable, MonthlyShortfall, RestDaySet};
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn weekend_calendar() -> WorkCalendar {
        WorkCalendar::new(RestDaySet::weekend(), HolidayTable::new())
    }

    fn assert_invariants(result: &ReconciliationResult) {
        assert_eq!(
            result.remaining_leave_balance + result.leave_used_to_offset_notice,
            result.leave_balance
        );
        assert_eq!(
            result.leave_used_to_offset_notice + result.short_notice_days_unpaid,
            Decimal::from(result.unserved_notice_days)
        );
    }

    #[test]
    fn test_shortfall_offset_by_leave_then_extended() {
        let result = reconcile(
            date(2024, 7, 15),
            date(2024, 8, 13),
            date(2024, 8, 2),
            dec("20"),
            &weekend_calendar(),
            DispositionPolicy::Both,
        )
        .unwrap();

        assert_eq!(result.unserved_notice_days, 11);
        assert_eq!(result.leave_used_to_offset_notice, dec("11"));
        assert_eq!(result.remaining_leave_balance, dec("9"));
        assert_eq!(result.short_notice_days_unpaid, Decimal::ZERO);
        assert!(result.unpaid_notice_breakdown.is_empty());

        let extend = result.extend_last_day.as_ref().unwrap();
        assert_eq!(extend.extension_start_date, date(2024, 8, 14));
        assert_eq!(extend.last_payroll_date, date(2024, 8, 26));

        assert_eq!(result.disposition_applied, Some(LeaveDisposition::ExtendLastDay));
        assert_eq!(result.last_payroll_date, date(2024, 8, 26));
        assert_eq!(result.final_physical_working_day, date(2024, 8, 26));
        assert!(result.last_payroll_date >= result.official_last_working_day);
        assert_invariants(&result);
    }

    #[test]
    fn test_clear_during_notice_moves_physical_day_earlier() {
        let result = reconcile(
            date(2024, 7, 15),
            date(2024, 8, 13),
            date(2024, 8, 2),
            dec("20"),
            &weekend_calendar(),
            DispositionPolicy::ClearDuringNotice,
        )
        .unwrap();

        let clear = result.clear_during_notice.as_ref().unwrap();
        assert_eq!(clear.leave_days_cleared, 9);
        assert_eq!(clear.overflow_leave_days, 0);
        // Nine working days back from Fri 2024-08-02 starts Tue 2024-07-23
        assert_eq!(clear.leave_start_date, Some(date(2024, 7, 23)));
        assert_eq!(clear.final_physical_working_day, date(2024, 7, 22));
        assert_eq!(clear.last_payroll_date, date(2024, 8, 2));

        assert!(result.extend_last_day.is_none());
        assert_eq!(
            result.disposition_applied,
            Some(LeaveDisposition::ClearDuringNotice)
        );
        assert_eq!(result.last_payroll_date, date(2024, 8, 2));
    }

    #[test]
    fn test_physical_day_skips_back_over_weekend() {
        // Clearing 5 days back from Fri 2024-08-02 starts Mon 2024-07-29,
        // so the last physical day is the previous Friday.
        let outcome = clear_leave_during_notice(
            date(2024, 7, 15),
            date(2024, 8, 2),
            date(2024, 8, 2),
            5,
            &weekend_calendar(),
        )
        .unwrap();
        assert_eq!(outcome.leave_start_date, Some(date(2024, 7, 29)));
        assert_eq!(outcome.final_physical_working_day, date(2024, 7, 26));
    }

    #[test]
    fn test_clear_overflow_extends_payroll() {
        // Mon 2024-07-29 through Fri 2024-08-02 holds 5 working days
        let outcome = clear_leave_during_notice(
            date(2024, 7, 29),
            date(2024, 8, 2),
            date(2024, 8, 2),
            6,
            &weekend_calendar(),
        )
        .unwrap();
        assert_eq!(outcome.leave_days_cleared, 5);
        assert_eq!(outcome.overflow_leave_days, 1);
        assert_eq!(outcome.leave_start_date, Some(date(2024, 7, 29)));
        // Leave starts on the acceptance date, so the floor is the day before it
        assert_eq!(outcome.final_physical_working_day, date(2024, 7, 28));
        // One working day after Fri 2024-08-02
        assert_eq!(outcome.last_payroll_date, date(2024, 8, 5));
    }

    #[test]
    fn test_clear_counts_acceptance_day() {
        // Accepted and requested on the same working day
        let outcome = clear_leave_during_notice(
            date(2024, 8, 2),
            date(2024, 8, 2),
            date(2024, 8, 2),
            1,
            &weekend_calendar(),
        )
        .unwrap();
        assert_eq!(outcome.leave_days_cleared, 1);
        assert_eq!(outcome.overflow_leave_days, 0);
        assert_eq!(outcome.leave_start_date, Some(date(2024, 8, 2)));
        assert_eq!(outcome.final_physical_working_day, date(2024, 8, 1));
    }

    #[test]
    fn test_leave_balance_above_maximum_rejected() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 1),
            Decimal::from(4_000_000_000u64),
            &weekend_calendar(),
            DispositionPolicy::ExtendLastDay,
        );
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "leave_balance"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_balance_at_maximum_accepted() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 1),
            Decimal::from(MAX_LEAVE_BALANCE_DAYS),
            &weekend_calendar(),
            DispositionPolicy::ExtendLastDay,
        )
        .unwrap();
        assert_eq!(result.remaining_leave_balance, dec("90"));
    }

    #[test]
    fn test_requested_equals_official_has_no_shortfall() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 11),
            Decimal::ZERO,
            &weekend_calendar(),
            DispositionPolicy::Both,
        )
        .unwrap();

        assert_eq!(result.unserved_notice_days, 0);
        assert_eq!(result.leave_used_to_offset_notice, Decimal::ZERO);
        assert_eq!(result.remaining_leave_balance, Decimal::ZERO);
        assert!(result.disposition_applied.is_none());
        assert_eq!(result.final_physical_working_day, date(2024, 8, 11));
        assert_eq!(result.last_payroll_date, date(2024, 8, 11));
    }

    #[test]
    fn test_full_leave_remains_when_notice_served() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 11),
            dec("5"),
            &weekend_calendar(),
            DispositionPolicy::ExtendLastDay,
        )
        .unwrap();

        assert_eq!(result.unserved_notice_days, 0);
        assert_eq!(result.leave_used_to_offset_notice, Decimal::ZERO);
        assert_eq!(result.remaining_leave_balance, dec("5"));
        // Sun 2024-08-11 served; five working days from Mon 2024-08-12
        assert_eq!(result.last_payroll_date, date(2024, 8, 16));
    }

    #[test]
    fn test_zero_leave_leaves_shortfall_unpaid() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 1),
            Decimal::ZERO,
            &weekend_calendar(),
            DispositionPolicy::Both,
        )
        .unwrap();

        assert_eq!(result.unserved_notice_days, 10);
        assert_eq!(result.short_notice_days_unpaid, dec("10"));
        assert_eq!(result.remaining_leave_balance, Decimal::ZERO);
        assert!(result.clear_during_notice.is_none());
        assert!(result.extend_last_day.is_none());
        assert!(result.disposition_applied.is_none());
        assert_eq!(result.last_payroll_date, date(2024, 8, 1));
        assert_eq!(
            result.unpaid_notice_breakdown,
            vec![MonthlyShortfall {
                year: 2024,
                month: 8,
                days: 10
            }]
        );
        assert_invariants(&result);
    }

    #[test]
    fn test_partial_leave_cover() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 7, 25),
            dec("6.5"),
            &weekend_calendar(),
            DispositionPolicy::Both,
        )
        .unwrap();

        assert_eq!(result.unserved_notice_days, 17);
        assert_eq!(result.leave_used_to_offset_notice, dec("6.5"));
        assert_eq!(result.short_notice_days_unpaid, dec("10.5"));
        assert_eq!(result.remaining_leave_balance, Decimal::ZERO);
        assert!(result.disposition_applied.is_none());
        assert_invariants(&result);
    }

    #[test]
    fn test_fractional_remaining_leave_occupies_whole_day() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 11),
            dec("0.5"),
            &weekend_calendar(),
            DispositionPolicy::ExtendLastDay,
        )
        .unwrap();
        assert_eq!(result.remaining_leave_balance, dec("0.5"));
        assert_eq!(result.extend_last_day.unwrap().leave_days_extended, 1);
        assert_eq!(result.last_payroll_date, date(2024, 8, 12));
    }

    #[test]
    fn test_over_served_notice_extends_from_requested() {
        let outcome =
            extend_with_leave(date(2024, 8, 11), date(2024, 8, 20), 1, &weekend_calendar())
                .unwrap();
        assert_eq!(outcome.extension_start_date, date(2024, 8, 21));
        assert_eq!(outcome.last_payroll_date, date(2024, 8, 21));
    }

    #[test]
    fn test_negative_leave_balance_rejected() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 8, 1),
            dec("-1"),
            &weekend_calendar(),
            DispositionPolicy::Both,
        );
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "leave_balance"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_requested_before_accepted_rejected() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 8, 11),
            date(2024, 7, 11),
            dec("1"),
            &weekend_calendar(),
            DispositionPolicy::Both,
        );
        match result {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "requested_last_day")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_official_before_accepted_rejected() {
        let result = reconcile(
            date(2024, 7, 12),
            date(2024, 7, 11),
            date(2024, 7, 20),
            dec("1"),
            &weekend_calendar(),
            DispositionPolicy::Both,
        );
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }
}
