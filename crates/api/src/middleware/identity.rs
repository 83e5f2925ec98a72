//! # Customer Identity
//!
//! Bookings are made on behalf of a customer whose identity the caller passes
//! explicitly in the `X-Customer-Email` header. Verifying that identity is the
//! job of whatever authenticates requests in front of this service.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderName, request::Parts},
};
use washbook_core::{errors::BookingError, models::appointment::CustomerIdentity};

use crate::middleware::error_handling::AppError;

pub const CUSTOMER_EMAIL_HEADER: HeaderName = HeaderName::from_static("x-customer-email");

/// Extractor yielding the [`CustomerIdentity`] of the request.
#[derive(Debug, Clone)]
pub struct Customer(pub CustomerIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for Customer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(&CUSTOMER_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if email.trim().is_empty() {
            return Err(AppError(BookingError::Authentication(
                "Please log in to confirm your booking".into(),
            )));
        }

        Ok(Customer(CustomerIdentity::new(email)?))
    }
}
