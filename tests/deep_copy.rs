//! Deep-copy normalization: canonical copies are value-equal to their
//! source, idempotent, order-preserving for nested sequences, and usable for
//! structural equality across construction paths.

mod common;

use flowrec::types::{
    DeploymentIntent, JobBatchRecord, JobRecord, Record, RecordType, RecordValue, ValueType,
};
use flowrec::{copier, RecordError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn decoded_deployment_copies_to_an_equal_payload() {
    let record: Record = serde_json::from_value(json!({
        "valueType": "DEPLOYMENT",
        "intent": "CREATED",
        "value": {
            "resources": [{
                "resourceName": "a.bpmn",
                "resourceType": "BPMN_XML",
                "resource": [1, 2, 3]
            }]
        }
    }))
    .unwrap();

    let copied = copier::deep_copy_record(&record).unwrap();

    assert_eq!(copied, record);
    match (&record.value, &copied.value) {
        (RecordValue::Deployment(source), RecordValue::Deployment(canonical)) => {
            assert_eq!(canonical.resources.len(), 1);
            assert_eq!(canonical.resources[0], source.resources[0]);
        },
        other => panic!("expected deployment payloads, got {other:?}"),
    }
}

#[test]
fn nested_job_batch_elements_are_copied_in_order() {
    let jobs: Vec<JobRecord> = (0..5)
        .map(|index| JobRecord {
            r#type: format!("task-{index}"),
            retries: index,
            ..JobRecord::default()
        })
        .collect();
    let batch = RecordValue::JobBatch(JobBatchRecord {
        r#type: "task".to_string(),
        job_keys: (0..5).collect(),
        jobs: jobs.clone(),
        ..JobBatchRecord::default()
    });

    let copied = copier::deep_copy_value(ValueType::JobBatch, &batch).unwrap();

    match copied {
        RecordValue::JobBatch(copied_batch) => {
            assert_eq!(copied_batch.jobs.len(), jobs.len());
            for (copied_job, source_job) in copied_batch.jobs.iter().zip(&jobs) {
                assert_eq!(copied_job, source_job);
            }
        },
        other => panic!("expected a job batch payload, got {other:?}"),
    }
}

#[test]
fn copy_fails_whole_operation_on_sentinel_tags() {
    let value = RecordValue::Job(JobRecord::default());

    for sentinel in [ValueType::NullVal, ValueType::SbeUnknown] {
        assert!(matches!(
            copier::deep_copy_value(sentinel, &value),
            Err(RecordError::UnknownValueType(_))
        ));
    }
}

#[test]
fn structural_equality_spans_construction_paths() {
    let decoded: Record = serde_json::from_value(json!({
        "position": 10,
        "recordType": "EVENT",
        "valueType": "DEPLOYMENT",
        "intent": "CREATED",
        "value": {
            "resources": [{
                "resourceName": "a.bpmn",
                "resourceType": "BPMN_XML",
                "resource": [1, 2, 3]
            }]
        }
    }))
    .unwrap();

    let built = Record::new(RecordValue::Deployment(flowrec::types::DeploymentRecord {
        resources: vec![flowrec::types::DeploymentResource {
            resource: vec![1, 2, 3],
            resource_name: "a.bpmn".to_string(),
            resource_type: flowrec::types::ResourceType::BpmnXml,
        }],
        processes_metadata: vec![],
    }))
    .with_position(10)
    .with_record_type(RecordType::Event)
    .with_intent(DeploymentIntent::Created);

    assert!(decoded.structurally_eq(&built).unwrap());
}

proptest! {
    #[test]
    fn deployment_copy_preserves_counts_and_order(
        deployment in common::deployment_records(),
    ) {
        let source = RecordValue::Deployment(deployment.clone());
        let copied = copier::deep_copy_value(ValueType::Deployment, &source).unwrap();

        match copied {
            RecordValue::Deployment(canonical) => {
                prop_assert_eq!(canonical.resources.len(), deployment.resources.len());
                prop_assert_eq!(
                    canonical.processes_metadata.len(),
                    deployment.processes_metadata.len()
                );
                prop_assert_eq!(canonical.resources, deployment.resources);
                prop_assert_eq!(canonical.processes_metadata, deployment.processes_metadata);
            },
            other => prop_assert!(false, "expected a deployment payload, got {:?}", other),
        }
    }

    #[test]
    fn copy_is_idempotent_for_nested_shapes(
        deployment in common::deployment_records(),
        job in common::job_records(),
    ) {
        let deployment = RecordValue::Deployment(deployment);
        let once = copier::deep_copy_value(ValueType::Deployment, &deployment).unwrap();
        let twice = copier::deep_copy_value(ValueType::Deployment, &once).unwrap();
        prop_assert_eq!(once, twice);

        let batch = RecordValue::JobBatch(JobBatchRecord {
            jobs: vec![job],
            ..JobBatchRecord::default()
        });
        let once = copier::deep_copy_value(ValueType::JobBatch, &batch).unwrap();
        let twice = copier::deep_copy_value(ValueType::JobBatch, &once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
