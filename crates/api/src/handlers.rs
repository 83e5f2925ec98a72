pub mod appointments;
pub mod history;
pub mod slots;

use chrono::NaiveDate;
use washbook_core::{
    errors::{BookingError, BookingResult},
    models::appointment::parse_booking_date,
};

/// Reads the mandatory `date` query parameter.
pub(crate) fn required_date(date: Option<String>) -> BookingResult<NaiveDate> {
    match date.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => parse_booking_date(value),
        _ => Err(BookingError::Validation(
            "date query parameter is required".into(),
        )),
    }
}
