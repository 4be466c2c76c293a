//! Job mutation engine
//!
//! Entry point for a single admission request. Only job creation is mutated;
//! every failure is turned into a rejecting decision, never a panic.

use kube::core::admission::{AdmissionRequest, Operation};
use kube::core::DynamicObject;
use tracing::{debug, info};

use super::decode::decode_job;
use super::patch::{PatchAssembler, PatchDocument};
use super::response::AdmissionDecision;
use crate::config::Defaults;
use crate::{Error, Result};

/// Computes admission decisions for Volcano Job requests.
///
/// Holds only immutable configuration; share it behind an `Arc` and call
/// [`decide`](Self::decide) from any number of requests concurrently.
pub struct MutationEngine {
    assembler: PatchAssembler,
}

impl MutationEngine {
    /// Engine injecting the given defaults
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            assembler: PatchAssembler::new(defaults),
        }
    }

    /// Decide on a single admission request
    pub fn decide(&self, request: &AdmissionRequest<DynamicObject>) -> AdmissionDecision {
        info!(
            uid = %request.uid,
            operation = ?request.operation,
            job = ?request.name,
            namespace = ?request.namespace,
            "mutating job"
        );

        match self.mutate(request) {
            Ok(document) => AdmissionDecision::allow_with_patch(document),
            Err(e) => AdmissionDecision::from_error(&e),
        }
    }

    /// Decode errors win over the operation check: only a request whose
    /// object decodes gets the fixed non-CREATE message.
    fn mutate(&self, request: &AdmissionRequest<DynamicObject>) -> Result<PatchDocument> {
        let job = decode_job(request.object.as_ref(), &request.resource)?;

        if !matches!(request.operation, Operation::Create) {
            return Err(Error::UnsupportedOperation(request.operation.clone()));
        }

        let document = self.assembler.build_patch(job)?;

        debug!(
            uid = %request.uid,
            patch = %String::from_utf8_lossy(&document.bytes),
            "admission response patch"
        );
        Ok(document)
    }
}
