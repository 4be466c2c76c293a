//! Defaulting rules
//!
//! Each rule inspects one part of a job and yields at most one JSON Patch
//! operation. Rules are independent of each other; the order they run in is
//! decided by [`PatchAssembler`](super::PatchAssembler).

use json_patch::{AddOperation, PatchOperation, ReplaceOperation};
use jsonptr::PointerBuf;
use volcano_batch::Job;

use crate::Result;

/// A single defaulting rule
pub trait DefaultRule: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Inspect `job` and return the operation that supplies the missing
    /// default, if any. A rule may update `job` in place to build the value
    /// it emits.
    fn apply(&self, job: &mut Job) -> Result<Option<PatchOperation>>;
}

/// Pointer to the job's queue
pub fn queue_path() -> PointerBuf {
    PointerBuf::from_tokens(["spec", "queue"])
}

/// Pointer to the job's task list
pub fn tasks_path() -> PointerBuf {
    PointerBuf::from_tokens(["spec", "tasks"])
}

// =============================================================================
// Queue
// =============================================================================

/// Adds a default queue to jobs submitted without one.
///
/// Only the empty string counts as unset.
#[derive(Debug, Clone)]
pub struct QueueDefault {
    queue: String,
}

impl QueueDefault {
    /// Rule assigning `queue` to queue-less jobs
    pub fn new(queue: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
        }
    }
}

impl DefaultRule for QueueDefault {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn apply(&self, job: &mut Job) -> Result<Option<PatchOperation>> {
        if !job.spec.queue.is_empty() {
            return Ok(None);
        }

        Ok(Some(PatchOperation::Add(AddOperation {
            path: queue_path(),
            value: serde_json::Value::String(self.queue.clone()),
        })))
    }
}

// =============================================================================
// Task names
// =============================================================================

/// Names unnamed tasks after their position: `<prefix><index>`.
///
/// When any task is renamed the whole task list is replaced in one
/// operation, carrying every task with all of its other fields unchanged.
/// Nothing is emitted when every task already has a name.
#[derive(Debug, Clone)]
pub struct TaskNameDefault {
    prefix: String,
    path: PointerBuf,
}

impl TaskNameDefault {
    /// Rule naming tasks `<prefix><index>`, replacing the list at `path`
    pub fn new(prefix: impl Into<String>, path: PointerBuf) -> Self {
        Self {
            prefix: prefix.into(),
            path,
        }
    }
}

impl DefaultRule for TaskNameDefault {
    fn name(&self) -> &'static str {
        "task-name"
    }

    fn apply(&self, job: &mut Job) -> Result<Option<PatchOperation>> {
        let mut patched = false;
        for (index, task) in job.spec.tasks.iter_mut().enumerate() {
            if task.name.is_empty() {
                task.name = format!("{}{}", self.prefix, index);
                patched = true;
            }
        }

        if !patched {
            return Ok(None);
        }

        Ok(Some(PatchOperation::Replace(ReplaceOperation {
            path: self.path.clone(),
            value: serde_json::to_value(&job.spec.tasks)?,
        })))
    }
}
