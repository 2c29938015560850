//! HTTP health endpoint library.
//!
//! Exposes the health of a running service over HTTP: implement
//! [`HealthReporter`] for whatever knows your service's condition, then
//! mount [`basic_handler`] (plain text) and/or [`json_handler`]
//! (structured JSON) on your router.

pub mod endpoint;
pub mod health;

pub use endpoint::{basic_handler, json_handler, EndpointError};
pub use health::{BoxError, CheckRegistry, CheckState, CheckStates, HealthReporter};
