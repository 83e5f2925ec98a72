/// Maps domain errors to HTTP responses
pub mod error_handling;
/// Extracts the customer a request acts for
pub mod identity;
