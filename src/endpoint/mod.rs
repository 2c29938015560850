//! HTTP renderers for the health contract.
//!
//! # Responsibilities
//! - Adapt any [`HealthReporter`](crate::health::HealthReporter) into
//!   mountable axum handlers
//! - Map health results to status codes and body shapes
//! - Fall back to a diagnostic JSON envelope when the JSON path degrades
//!
//! Both factories return a `MethodRouter` answering any method, so the
//! embedding service chooses the paths:
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/healthz", basic_handler(reporter.clone()))
//!     .route("/health", json_handler(reporter));
//! ```

pub mod basic;
pub mod json;
mod response;

pub use basic::basic_handler;
pub use json::{json_handler, EndpointError};
