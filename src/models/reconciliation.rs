//! Reconciliation result models for the Notice Engine.
//!
//! This module contains the [`ReconciliationResult`] type and its associated
//! structures that capture all outputs of a notice/leave reconciliation,
//! together with the audit trace and the report envelope returned by the API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which leave dispositions a calculation should compute.
///
/// # Example
///
/// ```
/// use notice_engine::models::DispositionPolicy;
///
/// let policy: DispositionPolicy = serde_json::from_str("\"extend_last_day\"").unwrap();
/// assert_eq!(policy, DispositionPolicy::ExtendLastDay);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispositionPolicy {
    /// Only Option A: clear remaining leave during the notice period.
    ClearDuringNotice,
    /// Only Option B: extend the last working day with remaining leave.
    ExtendLastDay,
    /// Compute both; Option B is treated as the primary outcome.
    #[default]
    Both,
}

impl DispositionPolicy {
    /// Returns true if Option A is computed under this policy.
    pub fn includes_clear(self) -> bool {
        matches!(self, DispositionPolicy::ClearDuringNotice | DispositionPolicy::Both)
    }

    /// Returns true if Option B is computed under this policy.
    pub fn includes_extend(self) -> bool {
        matches!(self, DispositionPolicy::ExtendLastDay | DispositionPolicy::Both)
    }
}

/// The disposition that determined the headline dates of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDisposition {
    /// Option A: remaining leave taken before the requested last day.
    ClearDuringNotice,
    /// Option B: remaining leave appended after the last day.
    ExtendLastDay,
}

/// Outcome of clearing remaining leave during the notice period (Option A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearDuringNoticeOutcome {
    /// Working days of leave taken inside the notice period.
    pub leave_days_cleared: u32,
    /// First day of the leave block, if any leave was cleared.
    pub leave_start_date: Option<NaiveDate>,
    /// The last day the employee is physically present.
    pub final_physical_working_day: NaiveDate,
    /// Leave days that did not fit inside the notice period.
    pub overflow_leave_days: u32,
    /// The date salary is paid up to.
    pub last_payroll_date: NaiveDate,
}

/// Outcome of extending the last working day with remaining leave (Option B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendLastDayOutcome {
    /// Working days of leave appended after the last day.
    pub leave_days_extended: u32,
    /// The first calendar day considered for the extension.
    pub extension_start_date: NaiveDate,
    /// The extended last working day.
    pub final_physical_working_day: NaiveDate,
    /// The date salary is paid up to.
    pub last_payroll_date: NaiveDate,
}

/// Unpaid notice days falling within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyShortfall {
    /// The year of the bucket.
    pub year: i32,
    /// The month of the bucket (1..=12).
    pub month: u32,
    /// Calendar days of unpaid notice in this month.
    pub days: u32,
}

/// The complete result of reconciling notice against leave.
///
/// Invariants:
/// - `remaining_leave_balance + leave_used_to_offset_notice == leave_balance`
/// - `leave_used_to_offset_notice + short_notice_days_unpaid == unserved_notice_days`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// The date the resignation notice was accepted.
    pub notice_accepted_date: NaiveDate,
    /// The last day of employment per the full contractual notice.
    pub official_last_working_day: NaiveDate,
    /// The last day the employee asked to be present.
    pub requested_last_day: NaiveDate,
    /// Calendar days of notice not physically served.
    pub unserved_notice_days: u32,
    /// Leave balance at the start of the calculation.
    pub leave_balance: Decimal,
    /// Leave consumed to pay out the notice shortfall.
    pub leave_used_to_offset_notice: Decimal,
    /// Leave left after offsetting the shortfall.
    pub remaining_leave_balance: Decimal,
    /// Shortfall days not covered by leave, to be recovered from final wages.
    pub short_notice_days_unpaid: Decimal,
    /// Unpaid shortfall split by calendar month.
    pub unpaid_notice_breakdown: Vec<MonthlyShortfall>,
    /// The disposition behind the headline dates, if any leave remained.
    pub disposition_applied: Option<LeaveDisposition>,
    /// Option A outcome, when computed.
    pub clear_during_notice: Option<ClearDuringNoticeOutcome>,
    /// Option B outcome, when computed.
    pub extend_last_day: Option<ExtendLastDayOutcome>,
    /// The last day the employee is physically present.
    pub final_physical_working_day: NaiveDate,
    /// The date salary is paid up to.
    pub last_payroll_date: NaiveDate,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag outcomes that are valid but likely need a human look, such
/// as leave that could not be cleared inside the notice period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The rendered employee notification and HR checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDocuments {
    /// The employee-facing notification text.
    pub employee_notice: String,
    /// The HR-operations checklist text.
    pub hr_checklist: String,
}

/// The envelope returned for each reconciliation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The reconciliation result.
    pub result: ReconciliationResult,
    /// Rendered documents, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<NoticeDocuments>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
