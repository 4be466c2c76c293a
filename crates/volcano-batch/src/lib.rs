//! Volcano batch API types
//!
//! Typed representation of Volcano `batch.volcano.sh/v1alpha1` Job resources
//! as they arrive in admission reviews. Fields the admission webhook does not
//! interpret are carried through verbatim so that a re-serialized job is
//! equivalent to the submitted one.

mod job;

pub use job::{Job, JobSpec, JobStatus, TaskSpec, DEFAULT_QUEUE, DEFAULT_TASK_SPEC};

/// API group of Volcano batch resources
pub const GROUP: &str = "batch.volcano.sh";

/// API version served for Volcano batch resources
pub const VERSION: &str = "v1alpha1";

/// Plural resource name of Volcano jobs
pub const JOBS_RESOURCE: &str = "jobs";
