use std::collections::HashMap;

use axum::http::StatusCode;
use chrono::NaiveDate;
use eyre::eyre;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;
use washbook_api::{
    config::ApiConfig,
    middleware::error_handling::{AppError, map_error},
};
use washbook_core::errors::BookingError;

#[rstest]
#[case(BookingError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Authentication("who".into()), StatusCode::UNAUTHORIZED)]
#[case(BookingError::NotFound("gone".into()), StatusCode::NOT_FOUND)]
#[case(
    BookingError::SlotConflict {
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        slot: "10:00 AM".into(),
        suggested_slots: vec![],
    },
    StatusCode::CONFLICT
)]
#[case(BookingError::StorageUnavailable(eyre!("down")), StatusCode::SERVICE_UNAVAILABLE)]
#[case(BookingError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] err: BookingError, #[case] expected: StatusCode) {
    assert_eq!(map_error(err).status(), expected);
}

#[test]
fn test_eyre_report_maps_to_service_unavailable() {
    let err: AppError = eyre!("pool timed out").into();
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let config =
        ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/washbook")]))
            .unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.database_max_connections, 5);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.history_limit, 5);
}

#[test]
fn test_config_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/washbook"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://localhost:3000, https://wash.example.com,"),
        ("HISTORY_LIMIT", "10"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:3000".to_string(),
            "https://wash.example.com".to_string()
        ])
    );
    assert_eq!(config.history_limit, 10);
}

#[test]
fn test_config_requires_database_url() {
    let err = ApiConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn test_config_rejects_bad_port() {
    let result = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/washbook"),
        ("API_PORT", "eighty"),
    ]));
    assert!(result.is_err());
}

#[rstest]
#[case("HISTORY_LIMIT", "-1", "HISTORY_LIMIT")]
#[case("HISTORY_LIMIT", "0", "HISTORY_LIMIT")]
#[case("API_REQUEST_TIMEOUT_SECONDS", "0", "API_REQUEST_TIMEOUT_SECONDS")]
fn test_config_rejects_values_below_one(
    #[case] key: &str,
    #[case] value: &str,
    #[case] mentioned: &str,
) {
    let err = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/washbook"),
        (key, value),
    ]))
    .unwrap_err();

    assert!(err.to_string().contains(mentioned));
}
