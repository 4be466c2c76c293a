//! Volcano Job mutation handler
//!
//! Handles AdmissionReview requests for Volcano Jobs, answering with the
//! defaults patch computed by the [`MutationEngine`](crate::admission::MutationEngine).

use std::sync::Arc;

use axum::{extract::State, Json};
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview};
use kube::core::DynamicObject;
use tracing::{error, info};

use super::WebhookState;

/// Handle mutating admission review for Volcano Jobs
///
/// A review without a request is answered with an invalid response rather
/// than an HTTP error, so the API server reports the reason.
pub async fn mutate_handler(
    State(state): State<Arc<WebhookState>>,
    Json(body): Json<AdmissionReview<DynamicObject>>,
) -> Json<AdmissionReview<DynamicObject>> {
    let req: AdmissionRequest<DynamicObject> = match body.try_into() {
        Ok(req) => req,
        Err(e) => {
            error!(error = %e, "Failed to parse admission request");
            return Json(AdmissionResponse::invalid(e.to_string()).into_review());
        }
    };

    let decision = state.engine.decide(&req);
    info!(
        uid = %req.uid,
        allowed = decision.allowed,
        patch_bytes = decision.patch.as_ref().map_or(0, Vec::len),
        "Admission decision"
    );

    Json(decision.into_response(&req).into_review())
}
