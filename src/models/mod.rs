//! Core data models for the Notice Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod notice_term;
mod reconciliation;
mod resignation_case;
mod rest_days;
mod work_calendar;

pub use holiday::{HolidayTable, PublicHoliday};
pub use notice_term::{NoticeTerm, NoticeUnit};
pub use reconciliation::{
    AuditStep, AuditTrace, AuditWarning, ClearDuringNoticeOutcome, DispositionPolicy,
    ExtendLastDayOutcome, LeaveDisposition, MonthlyShortfall, NoticeDocuments,
    ReconciliationReport, ReconciliationResult,
};
pub use resignation_case::{RESIGNATION_WITH_NOTICE, ResignationCase};
pub use rest_days::{RestDaySet, parse_weekday, weekday_name};
pub use work_calendar::WorkCalendar;
