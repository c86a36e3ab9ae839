//! Calculation logic for the Notice Engine.
//!
//! This module contains the date arithmetic behind notice reconciliation:
//! moving public holidays off rest days, the official last working day for a
//! notice term, working-day counting, the notice/leave reconciliation itself,
//! the monthly breakdown of unpaid notice, and the end-to-end pipeline that
//! runs them in order with an audit trace.

mod holiday_adjustment;
mod notice_breakdown;
mod official_last_day;
mod pipeline;
mod reconciliation;
mod working_days;

pub use holiday_adjustment::{adjust_holidays, build_work_calendar, holidays_on_rest_days};
pub use notice_breakdown::breakdown_unpaid_notice_by_month;
pub use official_last_day::{DAYS_PER_NOTICE_MONTH, official_last_working_day};
pub use pipeline::perform_reconciliation;
pub use reconciliation::{
    MAX_LEAVE_BALANCE_DAYS, clear_leave_during_notice, extend_with_leave, reconcile,
};
pub use working_days::{Direction, advance_n_working_days, count_working_days};
