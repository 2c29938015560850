//! Shared JSON response writing.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Fallback body for reporting endpoint-level errors: exactly `status`
/// and `message`, nothing else.
#[derive(Debug, Serialize)]
pub(crate) struct StatusEnvelope {
    pub status: &'static str,
    pub message: String,
}

/// Write pre-serialized JSON in a single body write with an explicit
/// `Content-Type`.
pub(crate) fn write_json(status: StatusCode, content: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], content).into_response()
}

/// Write the status envelope. Its serialization is best-effort: the shape
/// is two strings, so a failure here has nothing left to report.
pub(crate) fn write_json_status(
    status_code: StatusCode,
    status: &'static str,
    message: String,
) -> Response {
    let body = serde_json::to_vec(&StatusEnvelope { status, message }).unwrap_or_default();
    write_json(status_code, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(StatusEnvelope {
            status: "error",
            message: "boom".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "boom"})
        );
    }
}
