//! Official last working day calculation.
//!
//! Maps a notice-acceptance date and a contractual notice term to the last day
//! of employment under the full notice period.

use chrono::{Days, Months, NaiveDate};

use crate::config::{CalculatorConventions, MonthArithmetic};
use crate::error::{EngineError, EngineResult};
use crate::models::{NoticeTerm, NoticeUnit};

/// Days counted per month under [`MonthArithmetic::ThirtyDay`].
pub const DAYS_PER_NOTICE_MONTH: u32 = 30;

/// Calculates the official last working day for a notice term.
///
/// # Rules
///
/// - Day-based notice: `accepted + count` days. When
///   `day_notice_start_inclusive` is set the acceptance date is day 1 and one
///   day is subtracted.
/// - Month-based notice with [`MonthArithmetic::Calendar`]: `count` calendar
///   months are added (clamped to the end of short months, so Jan 31 + 1 month
///   is the last day of February), then one day is subtracted.
/// - Month-based notice with [`MonthArithmetic::ThirtyDay`]: `30 × count` days
///   are added, then one day is subtracted.
/// - A term of zero length ends on the acceptance date.
///
/// # Errors
///
/// Returns `InvalidDate` if the result falls outside the representable
/// calendar range.
///
/// # Example
///
/// ```
/// use notice_engine::calculation::official_last_working_day;
/// use notice_engine::config::CalculatorConventions;
/// use notice_engine::models::NoticeTerm;
/// use chrono::NaiveDate;
///
/// let accepted = NaiveDate::from_ymd_opt(2024, 7, 12).unwrap();
/// let last_day = official_last_working_day(
///     accepted,
///     NoticeTerm::months(1),
///     &CalculatorConventions::default(),
/// )
/// .unwrap();
/// assert_eq!(last_day, NaiveDate::from_ymd_opt(2024, 8, 11).unwrap());
/// ```
pub fn official_last_working_day(
    accepted: NaiveDate,
    term: NoticeTerm,
    conventions: &CalculatorConventions,
) -> EngineResult<NaiveDate> {
    if term.count == 0 {
        return Ok(accepted);
    }

    let overflow = || EngineError::invalid_date(accepted, format!("adding {} overflows", term));

    match term.unit {
        NoticeUnit::Days => {
            let end = accepted
                .checked_add_days(Days::new(u64::from(term.count)))
                .ok_or_else(overflow)?;
            if conventions.day_notice_start_inclusive {
                end.pred_opt().ok_or_else(overflow)
            } else {
                Ok(end)
            }
        }
        NoticeUnit::Months => {
            let same_day_next_period = match conventions.month_arithmetic {
                MonthArithmetic::Calendar => accepted.checked_add_months(Months::new(term.count)),
                MonthArithmetic::ThirtyDay => {
                    let days = u64::from(term.count) * u64::from(DAYS_PER_NOTICE_MONTH);
                    accepted.checked_add_days(Days::new(days))
                }
            }
            .ok_or_else(overflow)?;
            same_day_next_period.pred_opt().ok_or_else(overflow)
        }
    }
}
