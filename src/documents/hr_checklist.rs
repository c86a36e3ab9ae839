//! HR-operations checklist for a resignation.

use std::fmt::Write;

use crate::models::{ReconciliationResult, ResignationCase};

use super::display_date;

/// Renders the checklist HR works through for a resigning employee.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::reconcile;
/// use notice_engine::documents::render_hr_checklist;
/// use notice_engine::models::{
///     DispositionPolicy, HolidayTable, NoticeTerm, ResignationCase, RestDaySet, WorkCalendar,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let case = ResignationCase {
///     employee_id: "4200".to_string(),
///     employee_name: "John Doe".to_string(),
///     resignation_type: "Resignation with Notice".to_string(),
///     notice_term: NoticeTerm::months(1),
///     notice_accepted_date: NaiveDate::from_ymd_opt(2024, 7, 12).unwrap(),
///     requested_last_day: NaiveDate::from_ymd_opt(2024, 8, 11).unwrap(),
///     leave_balance: Decimal::ZERO,
///     rest_days: RestDaySet::weekend(),
///     processor: None,
///     processing_date: None,
/// };
/// let calendar = WorkCalendar::new(case.rest_days, HolidayTable::new());
/// let result = reconcile(
///     case.notice_accepted_date,
///     NaiveDate::from_ymd_opt(2024, 8, 11).unwrap(),
///     case.requested_last_day,
///     case.leave_balance,
///     &calendar,
///     DispositionPolicy::Both,
/// )
/// .unwrap();
///
/// let checklist = render_hr_checklist(&case, &result);
/// assert!(checklist.contains("11/08/2024"));
/// ```
pub fn render_hr_checklist(case: &ResignationCase, result: &ReconciliationResult) -> String {
    let physical = display_date(result.final_physical_working_day);
    let payroll = display_date(result.last_payroll_date);
    let mut text = String::new();

    let _ = writeln!(
        text,
        "HR Checklist: {} ({})",
        case.employee_name, case.employee_id
    );
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "- [ ] Issue the resignation acceptance letter confirming the notice received on {}",
        display_date(result.notice_accepted_date)
    );
    let _ = writeln!(
        text,
        "- [ ] Confirm no physical presence is required after {}",
        physical
    );
    let _ = writeln!(
        text,
        "- [ ] Continue salary payments until {}",
        payroll
    );
    if !result.short_notice_days_unpaid.is_zero() {
        let _ = writeln!(
            text,
            "- [ ] Recover {} days of unserved notice from the final wages",
            result.short_notice_days_unpaid
        );
    }
    let _ = writeln!(
        text,
        "- [ ] Arrange the handover of company property on {}",
        physical
    );
    let _ = writeln!(
        text,
        "- [ ] Terminate system and building access after {}",
        physical
    );
    let _ = writeln!(text, "- [ ] Schedule the exit interview");

    text
}
