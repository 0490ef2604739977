//! Proptest strategies for representative record payloads.

// Each integration test binary compiles this module separately and uses a
// different subset of the strategies.
#![allow(dead_code)]

use flowrec::types::{
    DeploymentRecord, DeploymentResource, ErrorRecord, JobRecord, MessageRecord, ProcessMetadata,
    ResourceType, TimerRecord, Variables,
};
use proptest::prelude::*;

pub fn variables() -> impl Strategy<Value = Variables> {
    proptest::collection::vec(("[a-z]{1,8}", -1_000i64..1_000), 0..4).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, value)| (name, serde_json::Value::from(value)))
            .collect()
    })
}

prop_compose! {
    pub fn job_records()(
        job_type in "[a-z]{1,8}",
        worker in "[a-z]{0,8}",
        deadline in -1i64..100_000,
        retries in 0i32..10,
        error_message in "[a-z ]{0,12}",
        element_id in "[a-zA-Z]{0,8}",
        element_instance_key in -1i64..10_000,
        bpmn_process_id in "[a-z]{1,8}",
        process_definition_version in 1i32..20,
        process_definition_key in -1i64..10_000,
        process_instance_key in -1i64..10_000,
        headers in proptest::collection::vec(("[a-z]{1,6}", "[a-z]{0,6}"), 0..3),
        variables in variables(),
    ) -> JobRecord {
        JobRecord {
            r#type: job_type,
            worker,
            deadline,
            retries,
            error_message,
            custom_headers: headers.into_iter().collect(),
            variables,
            element_id,
            element_instance_key,
            bpmn_process_id,
            process_definition_version,
            process_definition_key,
            process_instance_key,
            ..JobRecord::default()
        }
    }
}

prop_compose! {
    pub fn deployment_resources()(
        resource in proptest::collection::vec(any::<u8>(), 0..32),
        resource_name in "[a-z]{1,8}\\.bpmn",
        resource_type in prop_oneof![
            Just(ResourceType::BpmnXml),
            Just(ResourceType::YamlWorkflow),
        ],
    ) -> DeploymentResource {
        DeploymentResource { resource, resource_name, resource_type }
    }
}

prop_compose! {
    pub fn process_metadata()(
        bpmn_process_id in "[a-z]{1,8}",
        version in 1i32..20,
        process_definition_key in 1i64..10_000,
        resource_name in "[a-z]{1,8}\\.bpmn",
        checksum in proptest::collection::vec(any::<u8>(), 0..16),
        duplicate in any::<bool>(),
    ) -> ProcessMetadata {
        ProcessMetadata {
            bpmn_process_id,
            version,
            process_definition_key,
            resource_name,
            checksum,
            duplicate,
        }
    }
}

prop_compose! {
    pub fn deployment_records()(
        resources in proptest::collection::vec(deployment_resources(), 0..4),
        processes_metadata in proptest::collection::vec(process_metadata(), 0..4),
    ) -> DeploymentRecord {
        DeploymentRecord { resources, processes_metadata }
    }
}

prop_compose! {
    pub fn message_records()(
        name in "[a-z-]{1,12}",
        correlation_key in "[a-z0-9-]{0,12}",
        message_id in "[a-z0-9-]{0,12}",
        time_to_live in 0i64..60_000,
        variables in variables(),
    ) -> MessageRecord {
        MessageRecord { name, correlation_key, message_id, time_to_live, variables }
    }
}

prop_compose! {
    pub fn timer_records()(
        element_instance_key in -1i64..10_000,
        process_instance_key in -1i64..10_000,
        process_definition_key in -1i64..10_000,
        due_date in -1i64..1_000_000,
        target_element_id in "[a-zA-Z]{0,8}",
        repetitions in -1i32..10,
    ) -> TimerRecord {
        TimerRecord {
            element_instance_key,
            process_instance_key,
            process_definition_key,
            due_date,
            target_element_id,
            repetitions,
        }
    }
}

prop_compose! {
    pub fn error_records()(
        exception_message in "[a-z ]{0,24}",
        stacktrace in "[a-z \\n]{0,48}",
        error_event_position in -1i64..10_000,
        process_instance_key in -1i64..10_000,
    ) -> ErrorRecord {
        ErrorRecord {
            exception_message,
            stacktrace,
            error_event_position,
            process_instance_key,
        }
    }
}
