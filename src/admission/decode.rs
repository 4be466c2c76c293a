//! Admission object decoding
//!
//! Turns the untyped object of an admission request into a Volcano Job,
//! refusing requests aimed at any other resource.

use kube::core::{DynamicObject, GroupVersionResource};
use kube::Resource;
use volcano_batch::Job;

use crate::error::DecodeError;

/// Decode the object of an admission request as a Volcano Job.
///
/// `resource` is the resource the review declares. It must be
/// `batch.volcano.sh/v1alpha1/jobs`; when the object carries type metadata,
/// that must name the Volcano `Job` kind too.
pub fn decode_job(
    object: Option<&DynamicObject>,
    resource: &GroupVersionResource,
) -> Result<Job, DecodeError> {
    if !is_jobs_resource(resource) {
        return Err(DecodeError::ResourceMismatch {
            expected: expected_resource(),
            actual: format!(
                "{}/{}/{}",
                resource.group, resource.version, resource.resource
            ),
        });
    }

    let object = object.ok_or(DecodeError::MissingObject)?;

    if let Some(types) = &object.types {
        let api_version = Job::api_version(&());
        let kind = Job::kind(&());
        if types.api_version != api_version || types.kind != kind {
            return Err(DecodeError::KindMismatch {
                expected: format!("{api_version}, Kind={kind}"),
                actual: format!("{}, Kind={}", types.api_version, types.kind),
            });
        }
    }

    let value = serde_json::to_value(object).map_err(DecodeError::Malformed)?;
    serde_json::from_value(value).map_err(DecodeError::Malformed)
}

// GroupVersionResource equality also compares the derived api_version field,
// which is not populated on deserialized values.
fn is_jobs_resource(resource: &GroupVersionResource) -> bool {
    resource.group == Job::group(&())
        && resource.version == Job::version(&())
        && resource.resource == Job::plural(&())
}

fn expected_resource() -> String {
    format!(
        "{}/{}/{}",
        Job::group(&()),
        Job::version(&()),
        Job::plural(&())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admission::testing::{job_object, jobs_resource, request_from, review};
    use serde_json::json;

    #[test]
    fn decodes_volcano_job() {
        let request = request_from(review(
            "CREATE",
            jobs_resource(),
            job_object(json!({
                "queue": "research",
                "tasks": [{"name": "ps", "replicas": 1}, {"replicas": 4}]
            })),
        ));

        let job = decode_job(request.object.as_ref(), &request.resource).unwrap();
        assert_eq!(job.metadata.name.as_deref(), Some("test-job"));
        assert_eq!(job.spec.queue, "research");
        assert_eq!(job.spec.tasks.len(), 2);
        assert_eq!(job.spec.tasks[0].name, "ps");
        assert_eq!(job.spec.tasks[1].name, "");
        assert_eq!(job.spec.tasks[1].replicas, Some(4));
    }

    #[test]
    fn rejects_other_resources() {
        let request = request_from(review(
            "CREATE",
            json!({"group": "apps", "version": "v1", "resource": "deployments"}),
            job_object(json!({})),
        ));

        let err = decode_job(request.object.as_ref(), &request.resource).unwrap_err();
        assert!(matches!(err, DecodeError::ResourceMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "expect resource to be batch.volcano.sh/v1alpha1/jobs, got apps/v1/deployments"
        );
    }

    #[test]
    fn rejects_other_versions_of_jobs() {
        let request = request_from(review(
            "CREATE",
            json!({"group": "batch", "version": "v1", "resource": "jobs"}),
            job_object(json!({})),
        ));

        let err = decode_job(request.object.as_ref(), &request.resource).unwrap_err();
        assert!(matches!(err, DecodeError::ResourceMismatch { .. }));
    }

    #[test]
    fn rejects_missing_object() {
        let request = request_from(review("CREATE", jobs_resource(), json!(null)));

        let err = decode_job(request.object.as_ref(), &request.resource).unwrap_err();
        assert!(matches!(err, DecodeError::MissingObject));
    }

    #[test]
    fn rejects_object_of_another_kind() {
        let request = request_from(review(
            "CREATE",
            jobs_resource(),
            json!({
                "apiVersion": "batch/v1",
                "kind": "Job",
                "metadata": {"name": "test-job"},
                "spec": {}
            }),
        ));

        let err = decode_job(request.object.as_ref(), &request.resource).unwrap_err();
        assert!(matches!(err, DecodeError::KindMismatch { .. }));
        assert!(err.to_string().contains("batch/v1"));
    }

    #[test]
    fn rejects_malformed_spec() {
        let request = request_from(review(
            "CREATE",
            jobs_resource(),
            job_object(json!({"queue": 42, "tasks": "not-a-list"})),
        ));

        let err = decode_job(request.object.as_ref(), &request.resource).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }
}
