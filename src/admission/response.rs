//! Admission decisions and their wire representation

use kube::core::admission::{AdmissionRequest, AdmissionResponse};
use kube::core::DynamicObject;
use tracing::error;

use super::patch::PatchDocument;
use crate::Error;

/// Format of the patch carried by an allowing decision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchType {
    /// RFC 6902 JSON Patch (`JSONPatch` on the wire)
    JsonPatch,
}

/// Outcome of a mutation request
#[derive(Clone, Debug, PartialEq)]
pub struct AdmissionDecision {
    /// Whether the object may be persisted
    pub allowed: bool,
    /// Serialized patch document, present when allowed
    pub patch: Option<Vec<u8>>,
    /// Typed form of `patch`, handed to the wire response as is
    pub operations: Option<json_patch::Patch>,
    /// Format of `patch`, present when allowed
    pub patch_type: Option<PatchType>,
    /// Reason for rejection, present when not allowed
    pub message: Option<String>,
}

impl AdmissionDecision {
    /// Allow the object, applying `document`.
    ///
    /// An empty patch (`[]`) is still attached: it means nothing to change.
    pub fn allow_with_patch(document: PatchDocument) -> Self {
        Self {
            allowed: true,
            patch: Some(document.bytes),
            operations: Some(document.operations),
            patch_type: Some(PatchType::JsonPatch),
            message: None,
        }
    }

    /// Reject the object with the error's message
    pub fn from_error(err: &Error) -> Self {
        error!(error = %err, "rejecting admission request");
        Self {
            allowed: false,
            patch: None,
            operations: None,
            patch_type: None,
            message: Some(err.to_string()),
        }
    }

    /// Convert into the Kubernetes response for `request`
    pub fn into_response(self, request: &AdmissionRequest<DynamicObject>) -> AdmissionResponse {
        let response = AdmissionResponse::from(request);

        if !self.allowed {
            return response.deny(self.message.unwrap_or_default());
        }

        let Some(operations) = self.operations else {
            return response;
        };

        match response.with_patch(operations) {
            Ok(response) => response,
            Err(e) => {
                error!(uid = %request.uid, error = %e, "failed to serialize patch");
                AdmissionResponse::from(request).deny(format!("patch serialization error: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admission::patch::PatchAssembler;
    use crate::admission::testing::job_request;
    use crate::config::Defaults;
    use crate::error::DecodeError;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use json_patch::Patch;
    use serde_json::{json, Value};
    use volcano_batch::{Job, JobSpec};

    fn wire(response: AdmissionResponse) -> Value {
        serde_json::to_value(response.into_review()).unwrap()
    }

    fn document(queue: &str) -> PatchDocument {
        let job = Job::new(
            "test-job",
            JobSpec {
                queue: queue.to_string(),
                ..Default::default()
            },
        );
        PatchAssembler::new(&Defaults::default())
            .build_patch(job)
            .unwrap()
    }

    /// Patch bytes as sent to the API server (base64 per the review schema)
    fn wire_patch_bytes(response: &Value) -> Vec<u8> {
        match &response["patch"] {
            Value::String(encoded) => STANDARD.decode(encoded).unwrap(),
            Value::Array(raw) => raw.iter().map(|b| b.as_u64().unwrap() as u8).collect(),
            other => panic!("unexpected patch encoding: {other}"),
        }
    }

    #[test]
    fn allowing_decision_carries_patch() {
        let decision = AdmissionDecision::allow_with_patch(document("q1"));
        assert!(decision.allowed);
        assert_eq!(decision.patch.as_deref(), Some(&b"[]"[..]));
        assert_eq!(decision.operations, Some(Patch(vec![])));
        assert_eq!(decision.patch_type, Some(PatchType::JsonPatch));
        assert!(decision.message.is_none());
    }

    #[test]
    fn rejecting_decision_carries_message() {
        let decision = AdmissionDecision::from_error(&DecodeError::MissingObject.into());
        assert!(!decision.allowed);
        assert!(decision.patch.is_none());
        assert!(decision.operations.is_none());
        assert!(decision.patch_type.is_none());
        assert_eq!(
            decision.message.as_deref(),
            Some("admission request has no object")
        );
    }

    #[test]
    fn allowed_response_has_json_patch_type() {
        let request = job_request("CREATE", json!({}));

        let review = wire(AdmissionDecision::allow_with_patch(document("")).into_response(&request));
        assert_eq!(review["response"]["allowed"], json!(true));
        assert_eq!(review["response"]["uid"], json!(request.uid));
        assert_eq!(review["response"]["patchType"], json!("JSONPatch"));
        assert!(!review["response"]["patch"].is_null());
    }

    #[test]
    fn denied_response_has_message() {
        let request = job_request("UPDATE", json!({}));
        let decision = AdmissionDecision::from_error(&Error::UnsupportedOperation(
            request.operation.clone(),
        ));

        let review = wire(decision.into_response(&request));
        assert_eq!(review["response"]["allowed"], json!(false));
        assert_eq!(
            review["response"]["status"]["message"],
            json!("expect operation to be 'CREATE'")
        );
        assert!(review["response"].get("patch").is_none());
    }

    #[test]
    fn wire_patch_matches_decision_bytes() {
        let request = job_request("CREATE", json!({}));
        let decision = AdmissionDecision::allow_with_patch(document(""));
        let bytes = decision.patch.clone().unwrap();

        let review = wire(decision.into_response(&request));
        assert_eq!(wire_patch_bytes(&review["response"]), bytes);
        assert_eq!(
            serde_json::from_slice::<Value>(&bytes).unwrap(),
            json!([{"op": "add", "path": "/spec/queue", "value": "default"}])
        );
    }
}
