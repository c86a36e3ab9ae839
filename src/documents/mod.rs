//! Plain-text documents generated from a reconciliation.
//!
//! Two documents are produced for each resignation: a notification addressed
//! to the employee and a checklist for HR operations. Dates are rendered as
//! `DD/MM/YYYY`.

mod employee_notice;
mod hr_checklist;

use chrono::NaiveDate;

use crate::models::{NoticeDocuments, ReconciliationResult, ResignationCase};

pub use employee_notice::render_employee_notice;
pub use hr_checklist::render_hr_checklist;

/// Renders both documents for a reconciled case.
pub fn render_documents(
    case: &ResignationCase,
    result: &ReconciliationResult,
    hr_contact_email: Option<&str>,
) -> NoticeDocuments {
    NoticeDocuments {
        employee_notice: render_employee_notice(case, result, hr_contact_email),
        hr_checklist: render_hr_checklist(case, result),
    }
}

/// Formats a date the way it appears on documents.
///
/// # Example
///
/// ```
/// use notice_engine::documents::display_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 2).unwrap();
/// assert_eq!(display_date(date), "02/08/2024");
/// ```
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
