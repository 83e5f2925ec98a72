use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/user-history", get(handlers::history::get_user_history))
        .route(
            "/api/recommendations",
            get(handlers::history::get_recommendations),
        )
}
