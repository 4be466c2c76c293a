//! Volcano admission - mutating webhook that defaults Volcano batch jobs
//!
//! Invoked synchronously by the Kubernetes API server whenever a Volcano Job
//! (`batch.volcano.sh/v1alpha1`) is created, the webhook answers with a JSON
//! Patch that fills in the defaults the submitter left out:
//! - a job without a queue is placed in the default queue
//! - unnamed tasks are named after their position (`task0`, `task1`, ...)
//!
//! # Modules
//!
//! - [`admission`] - Decoding, defaulting rules, patch assembly and decisions
//! - [`webhook`] - HTTP router, AdmissionReview handler and TLS server
//! - [`config`] - Injected defaults and server configuration
//! - [`telemetry`] - Structured logging setup
//! - [`error`] - Error types for the webhook

#![deny(missing_docs)]

pub mod admission;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod webhook;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;
