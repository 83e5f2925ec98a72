use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", get(handlers::slots::get_day_slots))
        .route("/api/pricing", get(handlers::slots::get_pricing))
}
