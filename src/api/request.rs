//! Request types for the Notice Engine API.
//!
//! This module defines the JSON request structures for the `/reconcile` endpoint.
//! Dates, the notice period and rest days arrive as text and are parsed when
//! the request is converted into a [`ResignationCase`], so that each kind of
//! bad value is reported with its own error code.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DispositionPolicy, NoticeTerm, RESIGNATION_WITH_NOTICE, ResignationCase, RestDaySet,
    parse_weekday,
};

/// Request body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    /// The resigning employee.
    pub employee: EmployeeRequest,
    /// The resignation type shown on documents.
    #[serde(default)]
    pub resignation_type: Option<String>,
    /// The date the notice was accepted (`YYYY-MM-DD`).
    pub notice_accepted_date: String,
    /// The contractual notice period, e.g. `"1 month"`.
    pub notice_period: String,
    /// The last day the employee asked to be present (`YYYY-MM-DD`).
    pub requested_last_day: String,
    /// The employee's unused leave, in days; at most
    /// [`MAX_LEAVE_BALANCE_DAYS`](crate::calculation::MAX_LEAVE_BALANCE_DAYS).
    pub leave_balance: Decimal,
    /// Weekday names; the jurisdiction default applies when omitted.
    #[serde(default)]
    pub rest_days: Option<Vec<String>>,
    /// Which leave dispositions to compute; the configured default applies when omitted.
    #[serde(default)]
    pub disposition: Option<DispositionPolicy>,
    /// The HR officer processing the resignation.
    #[serde(default)]
    pub processor: Option<String>,
    /// The date the resignation was processed (`YYYY-MM-DD`).
    #[serde(default)]
    pub processing_date: Option<String>,
    /// Whether to render the employee notice and HR checklist.
    #[serde(default)]
    pub include_documents: bool,
}

/// Employee identity in a reconciliation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's identifier.
    pub id: String,
    /// The employee's display name.
    pub name: String,
}

impl ReconciliationRequest {
    /// Converts the request into a domain case.
    ///
    /// `default_rest_days` is used when the request names no rest days.
    pub fn into_case(self, default_rest_days: RestDaySet) -> EngineResult<ResignationCase> {
        let rest_days = match &self.rest_days {
            Some(names) => parse_rest_days(names)?,
            None => default_rest_days,
        };
        let processing_date = self.processing_date.as_deref().map(parse_date).transpose()?;

        Ok(ResignationCase {
            employee_id: self.employee.id,
            employee_name: self.employee.name,
            resignation_type: self
                .resignation_type
                .unwrap_or_else(|| RESIGNATION_WITH_NOTICE.to_string()),
            notice_term: self.notice_period.parse::<NoticeTerm>()?,
            notice_accepted_date: parse_date(&self.notice_accepted_date)?,
            requested_last_day: parse_date(&self.requested_last_day)?,
            leave_balance: self.leave_balance,
            rest_days,
            processor: self.processor,
            processing_date,
        })
    }
}

fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| EngineError::invalid_date(value, err.to_string()))
}

fn parse_rest_days(names: &[String]) -> EngineResult<RestDaySet> {
    let weekdays = names
        .iter()
        .map(|name| parse_weekday(name))
        .collect::<EngineResult<Vec<_>>>()?;
    RestDaySet::from_weekdays(weekdays)
}
