//! Volcano Job CRD types

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Queue assigned to jobs submitted without one
pub const DEFAULT_QUEUE: &str = "default";

/// Prefix of generated task names; the task's position is appended
pub const DEFAULT_TASK_SPEC: &str = "task";

// =============================================================================
// Task Spec
// =============================================================================

/// A single task within a Volcano Job.
///
/// Only `name` is interpreted by the admission webhook. Everything else,
/// including fields this type does not model, survives a decode/encode cycle
/// unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Task name, empty when the submitter left it out or sent `null`
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    /// Number of pods for this task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Pod template, kept as raw JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<serde_json::Value>,

    /// Lifecycle policies, kept as raw JSON
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<serde_json::Value>,

    /// Any other task fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TaskSpec {
    /// Task with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// CRD
// =============================================================================

/// Volcano batch job specification
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "batch.volcano.sh",
    version = "v1alpha1",
    kind = "Job",
    plural = "jobs",
    shortname = "vcjob",
    namespaced,
    status = "JobStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    /// Scheduler responsible for the job's pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,

    /// Queue the job is submitted to, empty when unset or `null`
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub queue: String,

    /// Ordered task list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskSpec>,

    /// Any other spec fields (minAvailable, policies, plugins, volumes, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Job status as reported by the Volcano controller, kept as raw JSON
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct JobStatus {
    /// Status fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Explicit `null` counts as unset, same as an absent field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Tests
// =============================================================================
