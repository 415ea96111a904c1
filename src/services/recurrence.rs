//! Installment schedules for recurring transactions
//!
//! Installments fall on the same day of month as the series start. When that
//! day does not exist in a later month the date is clamped to the month's last
//! day (Jan 31 → Feb 28).

use chrono::{Months, NaiveDate};

use crate::error::{FintrackError, FintrackResult};

/// Date of the last installment of a series
///
/// One installment ends on `start` itself.
///
/// ```
/// use chrono::NaiveDate;
/// use fintrack::services::recurrence::end_date;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(end_date(start, 12).unwrap(), NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
/// ```
pub fn end_date(start: NaiveDate, installments: u32) -> FintrackResult<NaiveDate> {
    if installments == 0 {
        return Err(FintrackError::Validation(
            "Installment count must be at least 1".into(),
        ));
    }
    nth_installment(start, installments - 1)
}

/// Every due date of a series, in order
pub fn installment_dates(start: NaiveDate, installments: u32) -> FintrackResult<Vec<NaiveDate>> {
    if installments == 0 {
        return Err(FintrackError::Validation(
            "Installment count must be at least 1".into(),
        ));
    }
    (0..installments)
        .map(|offset| nth_installment(start, offset))
        .collect()
}

/// How many installments are due on or before `as_of`
pub fn installments_paid(start: NaiveDate, installments: u32, as_of: NaiveDate) -> u32 {
    if as_of < start {
        return 0;
    }
    let mut paid = 0;
    for offset in 0..installments {
        match nth_installment(start, offset) {
            Ok(due) if due <= as_of => paid += 1,
            _ => break,
        }
    }
    paid
}

/// Due date `offset` months after `start`, measured from the start itself so
/// clamping in a short month does not shift later installments.
fn nth_installment(start: NaiveDate, offset: u32) -> FintrackResult<NaiveDate> {
    start.checked_add_months(Months::new(offset)).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Installment {} of a series starting {} is out of range",
            offset + 1,
            start
        ))
    })
}
