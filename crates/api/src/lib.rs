//! # WashBook API
//!
//! The API crate provides the web server for the WashBook car-wash booking
//! service. It exposes slot availability, booking with conflict suggestions,
//! pricing, customer history and recommendations over HTTP.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the booking service
//! - **Middleware**: Error mapping and customer identity extraction
//! - **Config**: Handle environment and application configuration
//!
//! Handlers never talk to the database directly. They go through the
//! [`AppointmentStore`] held in [`ApiState`], so the same router runs against
//! PostgreSQL in production and an in-memory store in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for identity and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;
use washbook_core::booking::AppointmentStore;

use crate::middleware::identity::CUSTOMER_EMAIL_HEADER;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use washbook_api::{ApiState, build_router};
/// use washbook_db::memory::InMemoryAppointmentStore;
///
/// let state = Arc::new(ApiState {
///     store: Arc::new(InMemoryAppointmentStore::new()),
///     history_limit: 5,
/// });
/// let app = build_router(state);
/// # let _ = app;
/// ```
pub struct ApiState {
    /// Appointment persistence used by every booking operation
    pub store: Arc<dyn AppointmentStore>,

    /// How many past appointments the history endpoints consider
    pub history_limit: i64,
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability and booking endpoints
        .merge(routes::appointments::routes())
        // Slot grid and pricing endpoints
        .merge(routes::slots::routes())
        // Customer history and recommendation endpoints
        .merge(routes::history::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            CUSTOMER_EMAIL_HEADER,
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and appointment store
///
/// This function sets up logging, configures routes and middleware, and serves
/// HTTP until the process is stopped.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use washbook_api::{config::ApiConfig, start_server};
/// use washbook_db::{create_pool, store::PgAppointmentStore};
///
/// # async fn run() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// let pool = create_pool(&config.database_url, config.database_max_connections).await?;
/// start_server(config, Arc::new(PgAppointmentStore::new(pool))).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    store: Arc<dyn AppointmentStore>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        store,
        history_limit: config.history_limit,
    });

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
