//! Patch document assembly

use json_patch::Patch;
use tracing::trace;
use volcano_batch::Job;

use super::rules::{tasks_path, DefaultRule, QueueDefault, TaskNameDefault};
use crate::config::Defaults;
use crate::Result;

/// Patch document in typed and serialized form
#[derive(Clone, Debug, PartialEq)]
pub struct PatchDocument {
    /// Operations in rule order
    pub operations: Patch,
    /// `operations` serialized as a JSON array
    pub bytes: Vec<u8>,
}

/// Runs the defaulting rules over a job and builds the patch document.
///
/// Rules run in a fixed order (queue, then task names) so the same job
/// always produces the same patch.
pub struct PatchAssembler {
    rules: Vec<Box<dyn DefaultRule>>,
}

impl PatchAssembler {
    /// Assembler with the standard rule set configured from `defaults`
    pub fn new(defaults: &Defaults) -> Self {
        let rules: Vec<Box<dyn DefaultRule>> = vec![
            Box::new(QueueDefault::new(defaults.queue())),
            Box::new(TaskNameDefault::new(
                defaults.task_name_prefix(),
                tasks_path(),
            )),
        ];
        Self { rules }
    }

    /// Apply every rule to `job`, collecting the operations they emit.
    ///
    /// `job` is updated in place by rules that need to (task naming).
    pub fn assemble(&self, job: &mut Job) -> Result<Patch> {
        let mut ops = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if let Some(op) = rule.apply(job)? {
                trace!(rule = rule.name(), "rule emitted patch operation");
                ops.push(op);
            }
        }
        Ok(Patch(ops))
    }

    /// Build the serialized JSON Patch for `job`.
    ///
    /// Always a JSON array; `[]` when the job needs no defaults.
    pub fn build_patch(&self, mut job: Job) -> Result<PatchDocument> {
        let operations = self.assemble(&mut job)?;
        let bytes = serde_json::to_vec(&operations)?;
        Ok(PatchDocument { operations, bytes })
    }
}
