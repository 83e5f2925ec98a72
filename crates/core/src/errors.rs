use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot {slot} on {date} is already booked")]
    SlotConflict {
        date: NaiveDate,
        slot: String,
        suggested_slots: Vec<String>,
    },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] eyre::Report),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Internal server error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Whether the caller may retry the whole request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BookingError::StorageUnavailable(_))
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
