//! Deep-copy normalization of records.
//!
//! Rebuilds a canonical copy of a record and of any nested polymorphic
//! sub-payloads, dispatching through the same [`registry`](crate::registry)
//! table as the codec. A deep copy never partially succeeds: an unregistered
//! tag anywhere in the payload fails the whole operation.

use crate::error::Result;
use crate::registry::{self, ValueShape};
use crate::types::{
    DeploymentRecord, DeploymentResource, JobBatchRecord, JobRecord, ProcessMetadata, Record,
    RecordValue, ValueType,
};

/// Deep-copy a record into its canonical form.
///
/// Every envelope field is carried over verbatim; the payload is rebuilt via
/// [`deep_copy_value`].
pub fn deep_copy_record(record: &Record) -> Result<Record> {
    let value = deep_copy_value(record.value_type(), &record.value)?;
    Ok(Record {
        value,
        ..record.clone()
    })
}

/// Deep-copy a payload into its canonical form.
///
/// Dispatches through the registry row for `value_type`: simple shapes are
/// rebuilt field-wise; shapes embedding nested polymorphic sequences
/// (deployment resources and process metadata, job-batch jobs) rebuild each
/// element individually, preserving order and count.
///
/// Fails with [`UnknownValueType`] if `value_type` is a sentinel or
/// unregistered, and with [`ValueTypeMismatch`] if the payload's runtime
/// variant does not match `value_type`.
///
/// [`UnknownValueType`]: crate::RecordError::UnknownValueType
/// [`ValueTypeMismatch`]: crate::RecordError::ValueTypeMismatch
pub fn deep_copy_value(value_type: ValueType, value: &RecordValue) -> Result<RecordValue> {
    registry::lookup(value_type)?.copy_value(value)
}

/// Field-wise rebuild for shapes without nested polymorphic sequences. All
/// payload fields are owned data, so the clone is itself a deep rebuild.
pub(crate) fn copy_as<T: ValueShape>(value: &RecordValue) -> Option<RecordValue> {
    T::peel(value).map(|payload| payload.clone().wrap())
}

/// The single job copy routine, shared between standalone `JOB` payloads and
/// the elements of a `JOB_BATCH` job list.
fn copy_job(job: &JobRecord) -> JobRecord {
    job.clone()
}

pub(crate) fn copy_job_value(value: &RecordValue) -> Option<RecordValue> {
    JobRecord::peel(value).map(|job| copy_job(job).wrap())
}

pub(crate) fn copy_job_batch(value: &RecordValue) -> Option<RecordValue> {
    let payload = JobBatchRecord::peel(value)?;
    let jobs = payload.jobs.iter().map(copy_job).collect();

    Some(
        JobBatchRecord {
            jobs,
            ..payload.clone()
        }
        .wrap(),
    )
}

fn copy_resource(resource: &DeploymentResource) -> DeploymentResource {
    DeploymentResource {
        resource: resource.resource.clone(),
        resource_name: resource.resource_name.clone(),
        resource_type: resource.resource_type,
    }
}

fn copy_process_metadata(metadata: &ProcessMetadata) -> ProcessMetadata {
    ProcessMetadata {
        bpmn_process_id: metadata.bpmn_process_id.clone(),
        version: metadata.version,
        process_definition_key: metadata.process_definition_key,
        resource_name: metadata.resource_name.clone(),
        checksum: metadata.checksum.clone(),
        duplicate: metadata.duplicate,
    }
}

pub(crate) fn copy_deployment(value: &RecordValue) -> Option<RecordValue> {
    let payload = DeploymentRecord::peel(value)?;
    let resources = payload.resources.iter().map(copy_resource).collect();
    let processes_metadata = payload
        .processes_metadata
        .iter()
        .map(copy_process_metadata)
        .collect();

    Some(
        DeploymentRecord {
            resources,
            processes_metadata,
        }
        .wrap(),
    )
}
