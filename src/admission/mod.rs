//! Mutating admission for Volcano batch jobs
//!
//! Decides, per admission request, which defaults a newly created Volcano Job
//! is missing and expresses them as a JSON Patch:
//! - `decode`: admission object → typed [`volcano_batch::Job`]
//! - `rules`: independent defaulting rules, each yielding at most one operation
//! - `patch`: runs the rules in order and serializes the patch document
//! - `mutate`: the request-level engine producing an [`AdmissionDecision`]
//! - `response`: decision constructors and conversion to the wire response
//!
//! Everything here is synchronous and free of shared mutable state; one
//! [`MutationEngine`] serves any number of concurrent requests.

pub mod decode;
pub mod mutate;
pub mod patch;
pub mod response;
pub mod rules;

pub use decode::decode_job;
pub use mutate::MutationEngine;
pub use patch::{PatchAssembler, PatchDocument};
pub use response::{AdmissionDecision, PatchType};
pub use rules::{DefaultRule, QueueDefault, TaskNameDefault};
