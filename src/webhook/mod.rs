//! Mutating admission webhook endpoint
//!
//! Exposes the job mutation engine over HTTP(S):
//! - `POST /mutate/jobs` - AdmissionReview for Volcano Jobs
//! - `GET /healthz` - liveness probe

pub mod jobs;
pub mod server;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::admission::MutationEngine;
use crate::config::Defaults;

/// Path the API server posts job admission reviews to
pub const MUTATE_JOBS_PATH: &str = "/mutate/jobs";

/// Shared state for webhook handlers
pub struct WebhookState {
    /// Engine deciding on job admission requests
    pub engine: MutationEngine,
}

impl WebhookState {
    /// Create webhook state injecting the given defaults
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            engine: MutationEngine::new(defaults),
        }
    }
}

/// Create the webhook router with all mutation endpoints
pub fn webhook_router(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route(MUTATE_JOBS_PATH, post(jobs::mutate_handler))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthz_returns_ok() {
        let router = webhook_router(Arc::new(WebhookState::new(&Defaults::default())));

        let response = router
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn mutate_path_rejects_get() {
        let router = webhook_router(Arc::new(WebhookState::new(&Defaults::default())));

        let response = router
            .oneshot(Request::get(MUTATE_JOBS_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
