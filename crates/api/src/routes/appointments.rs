use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api",
            get(handlers::appointments::get_booked_slots)
                .post(handlers::appointments::create_appointment),
        )
        .route(
            "/api/appointments",
            get(handlers::appointments::list_appointments),
        )
        .route(
            "/api/appointments/:id",
            delete(handlers::appointments::delete_appointment),
        )
        .route(
            "/api/appointments/:id/complete",
            post(handlers::appointments::complete_appointment),
        )
}
