//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON bodies so every endpoint
//! reports failures the same way.
//!
//! | Error                | Status |
//! |----------------------|--------|
//! | `Validation`         | 400    |
//! | `Authentication`     | 401    |
//! | `NotFound`           | 404    |
//! | `SlotConflict`       | 409, with `suggestedSlots` |
//! | `StorageUnavailable` | 503    |
//! | `Internal`           | 500    |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;
use washbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use washbook_api::middleware::error_handling::AppError;
/// use washbook_core::errors::BookingError;
///
/// async fn handler(date: Option<String>) -> Result<Json<String>, AppError> {
///     let date = date.ok_or_else(|| BookingError::Validation("date is required".into()))?;
///     Ok(Json(date))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::SlotConflict { .. } => StatusCode::CONFLICT,
            BookingError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        let body = match self.0 {
            BookingError::SlotConflict {
                suggested_slots, ..
            } => json!({ "error": message, "suggestedSlots": suggested_slots }),
            BookingError::StorageUnavailable(_) => {
                json!({ "error": message, "retryable": true })
            }
            _ => json!({ "error": message }),
        };

        if status.is_server_error() {
            warn!("Request failed with {}: {}", status, message);
        }

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Infrastructure failures reported through `eyre` mean the store could not be reached.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::StorageUnavailable(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
