//! # WashBook Core
//!
//! Domain types and pure logic for the WashBook car-wash booking service.
//!
//! - [`slots`]: the half-hour slot grid, availability checks and alternative
//!   slot suggestions
//! - [`booking`]: the storage seam and the check-then-insert booking operation
//! - [`pricing`]: vehicle types, wash plans and extra features
//! - [`recommendation`]: plan and feature recommendations from booking history
//! - [`models`]: request, response and record types shared with the API
//! - [`errors`]: the error taxonomy used across the workspace

pub mod booking;
pub mod errors;
pub mod models;
pub mod pricing;
pub mod recommendation;
pub mod slots;
