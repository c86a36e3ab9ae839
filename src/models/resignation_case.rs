//! Resignation case model.
//!
//! A [`ResignationCase`] gathers the facts of one resignation as captured by
//! the input form. Identity fields are opaque and display-only.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NoticeTerm, RestDaySet};

/// The default resignation type.
pub const RESIGNATION_WITH_NOTICE: &str = "Resignation with Notice";

/// The facts of a single resignation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResignationCase {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The resignation type shown on documents.
    pub resignation_type: String,
    /// The contractual notice period.
    pub notice_term: NoticeTerm,
    /// The date the resignation notice was accepted.
    pub notice_accepted_date: NaiveDate,
    /// The last day the employee asked to be present.
    pub requested_last_day: NaiveDate,
    /// The employee's unused leave, in days.
    pub leave_balance: Decimal,
    /// The employee's rest days.
    pub rest_days: RestDaySet,
    /// The HR officer processing the resignation.
    pub processor: Option<String>,
    /// The date the resignation was processed.
    pub processing_date: Option<NaiveDate>,
}
