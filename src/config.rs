//! Webhook configuration
//!
//! Two pieces of read-only configuration are built once at start-up:
//! - [`Defaults`]: the values injected into jobs, shared by every request
//! - [`ServerConfig`]: where and how the HTTPS endpoint listens

use std::net::SocketAddr;
use std::path::PathBuf;

use volcano_batch::{DEFAULT_QUEUE, DEFAULT_TASK_SPEC};

use crate::{Error, Result};

/// Default listen address for the webhook server
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8443";

/// Values injected into jobs that leave them unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    queue: String,
    task_name_prefix: String,
}

impl Defaults {
    /// Create defaults, rejecting empty values.
    ///
    /// An empty default would itself count as unset, so a defaulted job
    /// would be mutated again on the next pass.
    pub fn new(queue: impl Into<String>, task_name_prefix: impl Into<String>) -> Result<Self> {
        let queue = queue.into();
        let task_name_prefix = task_name_prefix.into();

        if queue.is_empty() {
            return Err(Error::config("default queue name must not be empty"));
        }
        if task_name_prefix.is_empty() {
            return Err(Error::config("task name prefix must not be empty"));
        }

        Ok(Self {
            queue,
            task_name_prefix,
        })
    }

    /// Queue assigned to jobs without one
    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Prefix for generated task names
    pub fn task_name_prefix(&self) -> &str {
        &self.task_name_prefix
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            queue: DEFAULT_QUEUE.to_string(),
            task_name_prefix: DEFAULT_TASK_SPEC.to_string(),
        }
    }
}

/// HTTPS server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server
    pub addr: SocketAddr,
    /// PEM file holding the serving certificate chain
    pub cert_file: PathBuf,
    /// PEM file holding the serving private key
    pub key_file: PathBuf,
}
