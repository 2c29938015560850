//! Structured JSON health endpoint.
//!
//! # Data Flow
//! ```text
//! Request
//!     → HealthReporter::state()
//!     → collection error?   → 200 {"status":"error","message":"Unable to fetch states: …"}
//!     → serialize full body
//!     → marshal error?      → 200 {"status":"error","message":"Failed to marshal state data: …"}
//!     → 200/500 {"status":"ok"|"failed","details":{…}}
//! ```
//!
//! # Design Decisions
//! - Collection and marshal failures answer HTTP 200, not 500: the 500 code
//!   is reserved for "the service is unhealthy", while the body's `status`
//!   field carries the diagnostic signal. Monitors reading only the code
//!   never mistake a broken collector for an unhealthy service
//! - Exactly one body is written per request, in one call

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{any, MethodRouter};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use super::response::{write_json, write_json_status};
use crate::health::{BoxError, HealthReporter};

/// Failures the JSON endpoint can hit while producing a response. The
/// `Display` strings are the exact `message` values of the fallback
/// envelope.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The reporter could not determine health at all.
    #[error("Unable to fetch states: {0}")]
    Collection(#[source] BoxError),

    /// Valid state could not be encoded to JSON.
    #[error("Failed to marshal state data: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct FullBody<S: Serialize> {
    status: &'static str,
    details: S,
}

/// Build a JSON handler for `reporter`, mountable at any path and
/// answering any method.
///
/// Responds with `{"status","details"}` on the normal path (200 when
/// healthy, 500 when failed) and falls back to a two-field
/// `{"status":"error","message"}` envelope with HTTP 200 when state
/// collection or serialization fails.
pub fn json_handler<H>(reporter: Arc<H>) -> MethodRouter
where
    H: HealthReporter + 'static,
{
    any(respond::<H>).with_state(reporter)
}

async fn respond<H>(State(reporter): State<Arc<H>>) -> Response
where
    H: HealthReporter + 'static,
{
    let (states, failed) = match reporter.state() {
        Ok(pair) => pair,
        Err(err) => return fallback(EndpointError::Collection(err)),
    };

    let (status_code, status) = if failed {
        (StatusCode::INTERNAL_SERVER_ERROR, "failed")
    } else {
        (StatusCode::OK, "ok")
    };

    match serde_json::to_vec(&FullBody { status, details: states }) {
        Ok(body) => write_json(status_code, body),
        Err(err) => fallback(EndpointError::Serialization(err)),
    }
}

fn fallback(err: EndpointError) -> Response {
    warn!(error = %err, "health endpoint degraded");
    write_json_status(StatusCode::OK, "error", err.to_string())
}
