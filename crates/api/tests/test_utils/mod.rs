#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::{Value, json};
use washbook_api::{ApiState, build_router, middleware::identity::CUSTOMER_EMAIL_HEADER};
use washbook_core::booking::AppointmentStore;
use washbook_db::memory::InMemoryAppointmentStore;

pub const BOOKING_DATE: &str = "2025-06-02";
pub const CUSTOMER_EMAIL: &str = "driver@example.com";

pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    /// Server backed by an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryAppointmentStore::new()))
    }

    pub fn with_store(store: Arc<dyn AppointmentStore>) -> Self {
        let state = Arc::new(ApiState {
            store,
            history_limit: 5,
        });
        let server = TestServer::new(build_router(state)).expect("test server should start");

        Self { server }
    }
}

pub fn customer_header(email: &str) -> (HeaderName, HeaderValue) {
    (
        CUSTOMER_EMAIL_HEADER,
        HeaderValue::from_str(email).expect("valid header value"),
    )
}

/// A valid Sedan Car / Basic Wash booking request.
pub fn booking_request(date: &str, slot: &str) -> Value {
    json!({
        "name": "Rahim Uddin",
        "phone": "01711000000",
        "vehicleMake": "Toyota",
        "vehicleModel": "Corolla",
        "date": date,
        "timeSlot": slot,
        "comment": "",
        "selectedVehicle": "Sedan Car",
        "selectedPlan": "500",
        "extraFeatures": ["Tire Shine"]
    })
}

/// Books `slot` for `email` and returns the new appointment id.
pub async fn book(ctx: &TestContext, email: &str, request: Value) -> String {
    let (name, value) = customer_header(email);
    let response = ctx
        .server
        .post("/api")
        .add_header(name, value)
        .json(&request)
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["id"]
        .as_str()
        .expect("id in response")
        .to_string()
}
