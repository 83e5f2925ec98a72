use std::error::Error;

use chrono::NaiveDate;
use washbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let validation = BookingError::Validation("date is required".to_string());
    let conflict = BookingError::SlotConflict {
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        slot: "10:00 AM".to_string(),
        suggested_slots: vec!["10:30 AM".to_string()],
    };
    let not_found = BookingError::NotFound("Appointment not found".to_string());
    let authentication = BookingError::Authentication("Please log in".to_string());
    let storage = BookingError::StorageUnavailable(eyre::eyre!("connection refused"));
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(validation.to_string(), "Validation error: date is required");
    assert_eq!(
        conflict.to_string(),
        "Slot 10:00 AM on 2025-03-14 is already booked"
    );
    assert_eq!(
        not_found.to_string(),
        "Resource not found: Appointment not found"
    );
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Please log in"
    );
    assert!(storage.to_string().contains("Storage unavailable:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_only_storage_errors_are_retryable() {
    assert!(BookingError::StorageUnavailable(eyre::eyre!("timeout")).is_retryable());
    assert!(!BookingError::Validation("bad".into()).is_retryable());
    assert!(
        !BookingError::SlotConflict {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            slot: "9:00 AM".into(),
            suggested_slots: vec![],
        }
        .is_retryable()
    );
}

#[test]
fn test_eyre_report_converts_to_storage_unavailable() {
    fn lookup() -> BookingResult<()> {
        let failed: eyre::Result<()> = Err(eyre::eyre!("pool timed out"));
        failed?;
        Ok(())
    }

    match lookup() {
        Err(BookingError::StorageUnavailable(report)) => {
            assert!(report.to_string().contains("pool timed out"))
        }
        other => panic!("Expected StorageUnavailable, got: {:?}", other),
    }
}

#[test]
fn test_internal_error_message() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let error = BookingError::Internal(boxed_error);

    assert!(error.to_string().contains("IO error"));
}
