use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use tracing::warn;
use washbook_core::{
    booking,
    errors::{BookingError, BookingResult},
    models::{
        appointment::CustomerIdentity,
        history::{EmailQuery, HistoryEntry, UserHistoryResponse},
    },
    recommendation::{self, Recommendation},
};

use crate::{ApiState, middleware::error_handling::AppError};

fn required_email(query: EmailQuery) -> BookingResult<CustomerIdentity> {
    match query.email {
        Some(email) if !email.trim().is_empty() => CustomerIdentity::new(email),
        _ => Err(BookingError::Validation(
            "Email parameter is required".into(),
        )),
    }
}

#[axum::debug_handler]
pub async fn get_user_history(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UserHistoryResponse>, AppError> {
    let customer = required_email(query)?;
    let appointments =
        booking::customer_history(state.store.as_ref(), &customer, state.history_limit).await?;

    Ok(Json(UserHistoryResponse {
        success: true,
        email: customer.email().to_string(),
        previous_appointments: appointments.into_iter().map(HistoryEntry::from).collect(),
    }))
}

/// Recommends a plan and extras from the customer's history.
///
/// A history lookup failure degrades to the default recommendation instead of
/// failing the request.
#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Recommendation>, AppError> {
    let customer = required_email(query)?;

    let recommendation =
        match booking::customer_history(state.store.as_ref(), &customer, state.history_limit)
            .await
        {
            Ok(history) => recommendation::recommend(&history),
            Err(err) => {
                warn!(
                    "Falling back to default recommendation for {}: {}",
                    customer.email(),
                    err
                );
                recommendation::default_recommendation()
            }
        };

    Ok(Json(recommendation))
}
