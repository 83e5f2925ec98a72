use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use washbook_core::{
    booking,
    models::time_slot::{DateQuery, DaySlotsResponse},
    pricing::PricingCatalog,
};

use crate::{ApiState, handlers::required_date, middleware::error_handling::AppError};

/// The whole slot grid for a date, each slot flagged free or taken.
#[axum::debug_handler]
pub async fn get_day_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DaySlotsResponse>, AppError> {
    let date = required_date(query.date)?;
    let day = booking::load_booking_day(state.store.as_ref(), date).await?;

    Ok(Json(DaySlotsResponse::from(&day)))
}

#[axum::debug_handler]
pub async fn get_pricing() -> Json<PricingCatalog> {
    Json(PricingCatalog::standard())
}
