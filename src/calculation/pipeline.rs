//! End-to-end reconciliation of a resignation case.
//!
//! Runs holiday adjustment, the official last day calculation and the
//! notice/leave reconciliation in order, recording an audit step for each.

use std::time::Instant;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{CalculatorConventions, ConfigLoader};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DispositionPolicy, HolidayTable, ReconciliationReport,
    ReconciliationResult, ResignationCase,
};

use super::holiday_adjustment::{build_work_calendar, holidays_on_rest_days};
use super::official_last_day::official_last_working_day;
use super::reconciliation::reconcile;

/// Reconciles a resignation case against a loaded jurisdiction configuration.
///
/// `policy` overrides the configured leave disposition when given.
///
/// # Errors
///
/// Propagates any error from the individual calculation steps; no partial
/// report is ever returned.
pub fn perform_reconciliation(
    case: &ResignationCase,
    config: &ConfigLoader,
    policy: Option<DispositionPolicy>,
) -> EngineResult<ReconciliationReport> {
    let start_time = Instant::now();
    let conventions = config.conventions();
    let policy = policy.unwrap_or(conventions.leave_disposition);

    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    // Holiday adjustment
    let holidays = config.holiday_table();
    let calendar = build_work_calendar(case.rest_days, &holidays, conventions.holiday_shift)?;
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "holiday_adjustment".to_string(),
        rule_name: "Holiday Adjustment".to_string(),
        input: serde_json::json!({
            "holidays": holidays.len(),
            "rest_days": case.rest_days,
            "holiday_shift": conventions.holiday_shift,
        }),
        output: serde_json::json!({
            "holidays_moved": moved_holidays(config, &holidays, case),
            "adjusted_holidays": calendar.holidays.len(),
        }),
        reasoning: format!(
            "Moved holidays falling on {} to the next available working day",
            case.rest_days
        ),
    });

    // Official last working day
    let official =
        official_last_working_day(case.notice_accepted_date, case.notice_term, &conventions)?;
    steps.push(official_last_day_step(2, case, &conventions, official));

    // Reconciliation
    let result = reconcile(
        case.notice_accepted_date,
        official,
        case.requested_last_day,
        case.leave_balance,
        &calendar,
        policy,
    )?;
    steps.push(shortfall_step(3, &result));
    if let Some(step) = disposition_step(4, &result, policy) {
        steps.push(step);
    }

    if result.short_notice_days_unpaid > Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "WAGE_RECOVERY".to_string(),
            message: format!(
                "{} unserved notice days are not covered by leave and must be recovered from final wages",
                result.short_notice_days_unpaid
            ),
        });
    }
    if let Some(clear) = &result.clear_during_notice {
        if clear.overflow_leave_days > 0 {
            warnings.push(AuditWarning {
                code: "LEAVE_OVERFLOW".to_string(),
                message: format!(
                    "{} leave days did not fit inside the notice period and extend payroll",
                    clear.overflow_leave_days
                ),
            });
        }
    }

    if let Some(warning) = missing_holiday_years(config, case.notice_accepted_date, &result) {
        warnings.push(warning);
    }

    Ok(ReconciliationReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: case.employee_id.clone(),
        result,
        documents: None,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

fn moved_holidays(
    config: &ConfigLoader,
    holidays: &HolidayTable,
    case: &ResignationCase,
) -> Vec<serde_json::Value> {
    holidays_on_rest_days(holidays, &case.rest_days)
        .into_iter()
        .map(|date| {
            serde_json::json!({
                "date": date,
                "name": config.holiday_name(date),
            })
        })
        .collect()
}

/// Warns when the span from acceptance to the latest computed date reaches a
/// year with no configured holidays.
fn missing_holiday_years(
    config: &ConfigLoader,
    accepted: NaiveDate,
    result: &ReconciliationResult,
) -> Option<AuditWarning> {
    let last = result
        .official_last_working_day
        .max(result.last_payroll_date)
        .max(result.final_physical_working_day);
    let configured = config.holiday_years();
    let missing: Vec<String> = (accepted.year()..=last.year())
        .filter(|year| !configured.contains(year))
        .map(|year| year.to_string())
        .collect();
    if missing.is_empty() {
        return None;
    }
    Some(AuditWarning {
        code: "HOLIDAYS_NOT_CONFIGURED".to_string(),
        message: format!(
            "No public holidays are configured for {}; those days were treated as working days",
            missing.join(", ")
        ),
    })
}

fn official_last_day_step(
    step_number: u32,
    case: &ResignationCase,
    conventions: &CalculatorConventions,
    official: NaiveDate,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "official_last_working_day".to_string(),
        rule_name: "Official Last Working Day".to_string(),
        input: serde_json::json!({
            "notice_accepted_date": case.notice_accepted_date,
            "notice_term": case.notice_term,
            "day_notice_start_inclusive": conventions.day_notice_start_inclusive,
            "month_arithmetic": conventions.month_arithmetic,
        }),
        output: serde_json::json!({
            "official_last_working_day": official,
        }),
        reasoning: format!(
            "Notice of {} accepted on {} ends on {}",
            case.notice_term, case.notice_accepted_date, official
        ),
    }
}

fn shortfall_step(step_number: u32, result: &ReconciliationResult) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "notice_shortfall".to_string(),
        rule_name: "Notice Shortfall Offset".to_string(),
        input: serde_json::json!({
            "official_last_working_day": result.official_last_working_day,
            "requested_last_day": result.requested_last_day,
            "leave_balance": result.leave_balance.to_string(),
        }),
        output: serde_json::json!({
            "unserved_notice_days": result.unserved_notice_days,
            "leave_used_to_offset_notice": result.leave_used_to_offset_notice.to_string(),
            "short_notice_days_unpaid": result.short_notice_days_unpaid.to_string(),
            "remaining_leave_balance": result.remaining_leave_balance.to_string(),
        }),
        reasoning: format!(
            "{} unserved notice days; {} covered by leave, {} unpaid",
            result.unserved_notice_days,
            result.leave_used_to_offset_notice,
            result.short_notice_days_unpaid
        ),
    }
}

fn disposition_step(
    step_number: u32,
    result: &ReconciliationResult,
    policy: DispositionPolicy,
) -> Option<AuditStep> {
    let disposition = result.disposition_applied?;
    Some(AuditStep {
        step_number,
        rule_id: "leave_disposition".to_string(),
        rule_name: "Remaining Leave Disposition".to_string(),
        input: serde_json::json!({
            "remaining_leave_balance": result.remaining_leave_balance.to_string(),
            "policy": policy,
        }),
        output: serde_json::json!({
            "disposition_applied": disposition,
            "clear_during_notice": result.clear_during_notice,
            "extend_last_day": result.extend_last_day,
        }),
        reasoning: format!(
            "{} remaining leave days placed; final physical working day {}, payroll until {}",
            result.remaining_leave_balance,
            result.final_physical_working_day,
            result.last_payroll_date
        ),
    })
}
