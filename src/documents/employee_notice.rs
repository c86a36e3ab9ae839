//! Employee-facing resignation notification.

use std::fmt::Write;

use chrono::Month;

use crate::models::{LeaveDisposition, ReconciliationResult, ResignationCase};

use super::display_date;

/// Renders the notification sent to the resigning employee.
///
/// The text confirms the resignation details, the leave and payroll outcome,
/// any unpaid notice to be recovered from final wages, and the clearance
/// checklist.
pub fn render_employee_notice(
    case: &ResignationCase,
    result: &ReconciliationResult,
    hr_contact_email: Option<&str>,
) -> String {
    let (cleared, extended) = leave_split(result);
    let mut text = String::new();

    let _ = writeln!(text, "Subject: Resignation and Final Employment Details");
    let _ = writeln!(text);
    let _ = writeln!(text, "Dear {},", case.employee_name);
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "This email is to confirm the details of your resignation and the final calculations \
         for your last working day, leave balance, and payroll."
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Employee Name: {}", case.employee_name);
    let _ = writeln!(text, "Employee ID: {}", case.employee_id);
    let _ = writeln!(text);
    let _ = writeln!(text, "Resignation Details:");
    let _ = writeln!(text, "- Resignation Type: {}", case.resignation_type);
    let _ = writeln!(
        text,
        "- Notice Received on: {}",
        display_date(result.notice_accepted_date)
    );
    let _ = writeln!(
        text,
        "- Notice Required as per Employment Contract: {}",
        case.notice_term
    );
    let _ = writeln!(
        text,
        "- Official Last Working Day: {}",
        display_date(result.official_last_working_day)
    );
    let _ = writeln!(
        text,
        "- Last Working Day Requested: {}",
        display_date(result.requested_last_day)
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Leave and Payroll Details:");
    let _ = writeln!(text, "- Leave Balance: {} days", result.leave_balance);
    let _ = writeln!(
        text,
        "- Leave Days Used to Offset Short Notice: {}",
        result.leave_used_to_offset_notice
    );
    let _ = writeln!(
        text,
        "- Leave Days Cleared During Workdays Throughout Notice Period: {}",
        cleared
    );
    let _ = writeln!(
        text,
        "- Leave Days Used to Extend the Last Working Date: {}",
        extended
    );
    let _ = writeln!(
        text,
        "- Last Payroll Date (Salary paid up to): {}",
        display_date(result.last_payroll_date)
    );

    if !result.unpaid_notice_breakdown.is_empty() {
        let _ = writeln!(text, "- Unserved Notice Period (Days):");
        for bucket in &result.unpaid_notice_breakdown {
            let _ = writeln!(
                text,
                "  {} {} - {} days",
                month_name(bucket.month),
                bucket.year,
                bucket.days
            );
        }
        let _ = writeln!(
            text,
            "  Total: {} days, to be recovered from the final wages.",
            result.short_notice_days_unpaid
        );
    }

    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "You are required to ensure the clearances/actions below are fulfilled to ensure a smooth process:"
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Checklist for Resigning Staff:");
    let _ = writeln!(
        text,
        "- [ ] Schedule handover of company property for {}",
        display_date(result.final_physical_working_day)
    );
    let _ = writeln!(
        text,
        "- [ ] Return all company property including access cards, keys, and devices"
    );
    let _ = writeln!(
        text,
        "- [ ] Ensure all work documents are handed over to the relevant department"
    );
    let _ = writeln!(text, "- [ ] Complete the exit interview as per company policy");
    let _ = writeln!(
        text,
        "- [ ] Provide forwarding contact information and address for future correspondence"
    );
    if let Some(email) = hr_contact_email {
        let _ = writeln!(
            text,
            "- [ ] Any other questions or clarifications can be sent to {}",
            email
        );
    }
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "Please let us know if you have any questions or need further clarification."
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "Best regards,");
    let _ = writeln!(text);
    if let Some(processor) = &case.processor {
        let _ = writeln!(text, "{}", processor);
    }
    if let Some(processed) = case.processing_date {
        let _ = writeln!(text, "Date Processed: {}", display_date(processed));
    }

    text
}

/// Leave days cleared during notice and leave days extending the last day,
/// as presented for the applied disposition.
fn leave_split(result: &ReconciliationResult) -> (u32, u32) {
    match result.disposition_applied {
        Some(LeaveDisposition::ExtendLastDay) => (
            0,
            result
                .extend_last_day
                .as_ref()
                .map_or(0, |e| e.leave_days_extended),
        ),
        Some(LeaveDisposition::ClearDuringNotice) => result
            .clear_during_notice
            .as_ref()
            .map_or((0, 0), |c| (c.leave_days_cleared, c.overflow_leave_days)),
        None => (0, 0),
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("Unknown", |m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::reconcile;
    use crate::models::{
        DispositionPolicy, HolidayTable, NoticeTerm, RESIGNATION_WITH_NOTICE, RestDaySet,
        WorkCalendar,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_case(requested: NaiveDate, leave: i64) -> ResignationCase {
        ResignationCase {
            employee_id: "4200".to_string(),
            employee_name: "John Doe".to_string(),
            resignation_type: RESIGNATION_WITH_NOTICE.to_string(),
            notice_term: NoticeTerm::months(1),
            notice_accepted_date: date(2024, 7, 12),
            requested_last_day: requested,
            leave_balance: Decimal::from(leave),
            rest_days: RestDaySet::weekend(),
            processor: Some("Jane Tan".to_string()),
            processing_date: Some(date(2024, 7, 15)),
        }
    }

    fn reconcile_case(case: &ResignationCase, policy: DispositionPolicy) -> ReconciliationResult {
        let calendar = WorkCalendar::new(case.rest_days, HolidayTable::new());
        reconcile(
            case.notice_accepted_date,
            date(2024, 8, 11),
            case.requested_last_day,
            case.leave_balance,
            &calendar,
            policy,
        )
        .unwrap()
    }

    #[test]
    fn test_notice_lists_resignation_details() {
        let case = create_case(date(2024, 7, 25), 50);
        let result = reconcile_case(&case, DispositionPolicy::Both);
        let text = render_employee_notice(&case, &result, Some("hr@example.com.my"));

        assert!(text.starts_with("Subject: Resignation and Final Employment Details"));
        assert!(text.contains("Dear John Doe,"));
        assert!(text.contains("- Notice Received on: 12/07/2024"));
        assert!(text.contains("- Notice Required as per Employment Contract: 1 month"));
        assert!(text.contains("- Official Last Working Day: 11/08/2024"));
        assert!(text.contains("- Last Working Day Requested: 25/07/2024"));
        assert!(text.contains("- Leave Days Used to Offset Short Notice: 17"));
        assert!(text.contains("- Leave Days Used to Extend the Last Working Date: 33"));
        assert!(text.contains("hr@example.com.my"));
        assert!(text.contains("Jane Tan"));
        assert!(text.contains("Date Processed: 15/07/2024"));
    }

    #[test]
    fn test_unpaid_breakdown_only_when_short() {
        let covered = create_case(date(2024, 7, 25), 50);
        let text = render_employee_notice(
            &covered,
            &reconcile_case(&covered, DispositionPolicy::Both),
            None,
        );
        assert!(!text.contains("Unserved Notice Period"));

        let short = create_case(date(2024, 7, 25), 0);
        let text =
            render_employee_notice(&short, &reconcile_case(&short, DispositionPolicy::Both), None);
        assert!(text.contains("- Unserved Notice Period (Days):"));
        assert!(text.contains("  July 2024 - 6 days"));
        assert!(text.contains("  August 2024 - 11 days"));
        assert!(text.contains("Total: 17 days, to be recovered from the final wages."));
    }

    #[test]
    fn test_clear_during_notice_split() {
        let case = create_case(date(2024, 7, 25), 20);
        let result = reconcile_case(&case, DispositionPolicy::ClearDuringNotice);
        let text = render_employee_notice(&case, &result, None);

        // 3 remaining days fit between acceptance and the requested day
        assert!(text.contains("- Leave Days Cleared During Workdays Throughout Notice Period: 3"));
        assert!(text.contains("- Leave Days Used to Extend the Last Working Date: 0"));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
