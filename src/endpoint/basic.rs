//! Plain-text health endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{any, MethodRouter};
use std::sync::Arc;

use crate::health::HealthReporter;

/// Build a plain-text handler for `reporter`, mountable at any path and
/// answering any method.
///
/// Responds `200 "ok"` while `reporter.failed()` is false and
/// `500 "failed"` once it is true. This path has no error branch:
/// `failed()` is infallible by contract.
pub fn basic_handler<H>(reporter: Arc<H>) -> MethodRouter
where
    H: HealthReporter + 'static,
{
    any(respond::<H>).with_state(reporter)
}

async fn respond<H>(State(reporter): State<Arc<H>>) -> (StatusCode, &'static str)
where
    H: HealthReporter + 'static,
{
    if reporter.failed() {
        (StatusCode::INTERNAL_SERVER_ERROR, "failed")
    } else {
        (StatusCode::OK, "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::{BoxError, CheckStates};
    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use tower::ServiceExt;

    struct Fixed(bool);

    impl HealthReporter for Fixed {
        type State = CheckStates;

        fn failed(&self) -> bool {
            self.0
        }

        fn state(&self) -> Result<(CheckStates, bool), BoxError> {
            Ok((CheckStates::new(), self.0))
        }
    }

    async fn hit(failed: bool) -> (StatusCode, String) {
        let app = Router::new().route("/healthz", basic_handler(Arc::new(Fixed(failed))));
        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthy_returns_200_ok() {
        let (status, body) = hit(false).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_unhealthy_returns_500_failed() {
        let (status, body) = hit(true).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "failed");
    }

    #[tokio::test]
    async fn test_method_is_ignored() {
        let app = Router::new().route("/healthz", basic_handler(Arc::new(Fixed(false))));
        let response = app
            .oneshot(Request::post("/healthz").body(Body::from("ignored")).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
