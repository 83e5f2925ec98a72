use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use washbook_core::{
    booking,
    models::{
        appointment::{
            Appointment, CreateAppointmentRequest, CreateAppointmentResponse,
            ListAppointmentsQuery, ListAppointmentsResponse,
        },
        time_slot::{BookedSlotsResponse, DateQuery},
    },
};

use crate::{
    ApiState,
    handlers::required_date,
    middleware::{error_handling::AppError, identity::Customer},
};

#[axum::debug_handler]
pub async fn get_booked_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<BookedSlotsResponse>, AppError> {
    let date = required_date(query.date)?;
    let day = booking::load_booking_day(state.store.as_ref(), date).await?;

    Ok(Json(BookedSlotsResponse::from(&day)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Customer(customer): Customer,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<CreateAppointmentResponse>), AppError> {
    let appointment = payload.validate(&customer)?;
    let id = booking::book_if_available(state.store.as_ref(), &appointment).await?;

    let response = CreateAppointmentResponse {
        message: "Appointment created".to_string(),
        id,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<Json<ListAppointmentsResponse>, AppError> {
    let status = query.status()?;
    let appointments = booking::list_appointments(state.store.as_ref(), status).await?;

    Ok(Json(ListAppointmentsResponse { appointments }))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = booking::complete_appointment(state.store.as_ref(), id).await?;
    info!("Appointment {} marked as completed", id);

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    booking::delete_appointment(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
