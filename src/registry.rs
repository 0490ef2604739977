//! The type registry: one static table mapping every non-sentinel
//! [`ValueType`] to its payload shape, its intent family, and its deep-copy
//! routine.
//!
//! This is the single authoritative dispatch shared by the codec and the
//! deep copier: decode, encode, and copy all resolve through the same row,
//! so the three operations can never drift out of sync. The table is a
//! compile-time `static`: read-only, lock-free, safe from any number of
//! threads.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::copier;
use crate::error::{RecordError, Result};
use crate::types::{
    DeploymentDistributionIntent, DeploymentDistributionRecord, DeploymentIntent,
    DeploymentRecord, ErrorIntent, ErrorRecord, IncidentIntent, IncidentRecord, Intent,
    JobBatchIntent, JobBatchRecord, JobIntent, JobRecord, MessageIntent, MessageRecord,
    MessageStartEventSubscriptionIntent, MessageStartEventSubscriptionRecord,
    MessageSubscriptionIntent, MessageSubscriptionRecord, ProcessEventIntent, ProcessEventRecord,
    ProcessInstanceCreationIntent, ProcessInstanceCreationRecord, ProcessInstanceIntent,
    ProcessInstanceRecord, ProcessInstanceResultIntent, ProcessInstanceResultRecord,
    ProcessIntent, ProcessMessageSubscriptionIntent, ProcessMessageSubscriptionRecord,
    ProcessRecord, RecordValue, TimerIntent, TimerRecord, ValueType, VariableDocumentIntent,
    VariableDocumentRecord, VariableIntent, VariableRecord,
};

/// A payload struct registered under exactly one value type.
pub(crate) trait ValueShape: DeserializeOwned + Serialize + Clone {
    /// The tag this shape is registered under.
    const VALUE_TYPE: ValueType;

    /// Wrap an owned payload into the closed variant.
    fn wrap(self) -> RecordValue;

    /// Borrow the payload out of the variant, if the variant matches.
    fn peel(value: &RecordValue) -> Option<&Self>;
}

/// One row of the registry: the operations registered for a single tag.
#[derive(Debug)]
pub struct RegistryEntry {
    value_type: ValueType,
    decode_value: fn(serde_json::Value) -> Result<RecordValue>,
    decode_intent: fn(&str) -> Option<Intent>,
    copy_value: fn(&RecordValue) -> Option<RecordValue>,
}

impl RegistryEntry {
    /// The tag this row is registered under.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Parse a raw value document as this row's payload shape.
    pub fn decode_value(&self, raw: serde_json::Value) -> Result<RecordValue> {
        (self.decode_value)(raw)
    }

    /// Resolve an intent wire name within this row's intent family.
    pub fn decode_intent(&self, raw: &str) -> Result<Intent> {
        (self.decode_intent)(raw).ok_or_else(|| RecordError::UnknownIntent {
            value_type: self.value_type,
            intent: raw.to_string(),
        })
    }

    /// Deep-copy a payload through this row's copy routine. Fails if the
    /// payload's runtime variant does not match this row's tag.
    pub fn copy_value(&self, value: &RecordValue) -> Result<RecordValue> {
        (self.copy_value)(value).ok_or_else(|| RecordError::ValueTypeMismatch {
            expected: self.value_type,
            actual: value.value_type(),
        })
    }
}

fn decode_value_as<T: ValueShape>(raw: serde_json::Value) -> Result<RecordValue> {
    serde_json::from_value::<T>(raw)
        .map(T::wrap)
        .map_err(|source| RecordError::MalformedValue {
            value_type: T::VALUE_TYPE,
            source,
        })
}

fn decode_intent_as<T>(raw: &str) -> Option<Intent>
where
    T: DeserializeOwned + Into<Intent>,
{
    // Routes through the same serde renames the encoder uses, so the two
    // directions share one name table.
    serde_json::from_value::<T>(serde_json::Value::String(raw.to_owned()))
        .ok()
        .map(Into::into)
}

static REGISTRY: [RegistryEntry; 18] = [
    RegistryEntry {
        value_type: ValueType::Deployment,
        decode_value: decode_value_as::<DeploymentRecord>,
        decode_intent: decode_intent_as::<DeploymentIntent>,
        copy_value: copier::copy_deployment,
    },
    RegistryEntry {
        value_type: ValueType::Error,
        decode_value: decode_value_as::<ErrorRecord>,
        decode_intent: decode_intent_as::<ErrorIntent>,
        copy_value: copier::copy_as::<ErrorRecord>,
    },
    RegistryEntry {
        value_type: ValueType::Incident,
        decode_value: decode_value_as::<IncidentRecord>,
        decode_intent: decode_intent_as::<IncidentIntent>,
        copy_value: copier::copy_as::<IncidentRecord>,
    },
    RegistryEntry {
        value_type: ValueType::Job,
        decode_value: decode_value_as::<JobRecord>,
        decode_intent: decode_intent_as::<JobIntent>,
        copy_value: copier::copy_job_value,
    },
    RegistryEntry {
        value_type: ValueType::JobBatch,
        decode_value: decode_value_as::<JobBatchRecord>,
        decode_intent: decode_intent_as::<JobBatchIntent>,
        copy_value: copier::copy_job_batch,
    },
    RegistryEntry {
        value_type: ValueType::Message,
        decode_value: decode_value_as::<MessageRecord>,
        decode_intent: decode_intent_as::<MessageIntent>,
        copy_value: copier::copy_as::<MessageRecord>,
    },
    RegistryEntry {
        value_type: ValueType::MessageStartEventSubscription,
        decode_value: decode_value_as::<MessageStartEventSubscriptionRecord>,
        decode_intent: decode_intent_as::<MessageStartEventSubscriptionIntent>,
        copy_value: copier::copy_as::<MessageStartEventSubscriptionRecord>,
    },
    RegistryEntry {
        value_type: ValueType::MessageSubscription,
        decode_value: decode_value_as::<MessageSubscriptionRecord>,
        decode_intent: decode_intent_as::<MessageSubscriptionIntent>,
        copy_value: copier::copy_as::<MessageSubscriptionRecord>,
    },
    RegistryEntry {
        value_type: ValueType::Process,
        decode_value: decode_value_as::<ProcessRecord>,
        decode_intent: decode_intent_as::<ProcessIntent>,
        copy_value: copier::copy_as::<ProcessRecord>,
    },
    RegistryEntry {
        value_type: ValueType::ProcessEvent,
        decode_value: decode_value_as::<ProcessEventRecord>,
        decode_intent: decode_intent_as::<ProcessEventIntent>,
        copy_value: copier::copy_as::<ProcessEventRecord>,
    },
    RegistryEntry {
        value_type: ValueType::ProcessInstance,
        decode_value: decode_value_as::<ProcessInstanceRecord>,
        decode_intent: decode_intent_as::<ProcessInstanceIntent>,
        copy_value: copier::copy_as::<ProcessInstanceRecord>,
    },
    RegistryEntry {
        value_type: ValueType::ProcessInstanceCreation,
        decode_value: decode_value_as::<ProcessInstanceCreationRecord>,
        decode_intent: decode_intent_as::<ProcessInstanceCreationIntent>,
        copy_value: copier::copy_as::<ProcessInstanceCreationRecord>,
    },
    RegistryEntry {
        value_type: ValueType::ProcessInstanceResult,
        decode_value: decode_value_as::<ProcessInstanceResultRecord>,
        decode_intent: decode_intent_as::<ProcessInstanceResultIntent>,
        copy_value: copier::copy_as::<ProcessInstanceResultRecord>,
    },
    RegistryEntry {
        value_type: ValueType::ProcessMessageSubscription,
        decode_value: decode_value_as::<ProcessMessageSubscriptionRecord>,
        decode_intent: decode_intent_as::<ProcessMessageSubscriptionIntent>,
        copy_value: copier::copy_as::<ProcessMessageSubscriptionRecord>,
    },
    RegistryEntry {
        value_type: ValueType::Timer,
        decode_value: decode_value_as::<TimerRecord>,
        decode_intent: decode_intent_as::<TimerIntent>,
        copy_value: copier::copy_as::<TimerRecord>,
    },
    RegistryEntry {
        value_type: ValueType::Variable,
        decode_value: decode_value_as::<VariableRecord>,
        decode_intent: decode_intent_as::<VariableIntent>,
        copy_value: copier::copy_as::<VariableRecord>,
    },
    RegistryEntry {
        value_type: ValueType::VariableDocument,
        decode_value: decode_value_as::<VariableDocumentRecord>,
        decode_intent: decode_intent_as::<VariableDocumentIntent>,
        copy_value: copier::copy_as::<VariableDocumentRecord>,
    },
    RegistryEntry {
        value_type: ValueType::DeploymentDistribution,
        decode_value: decode_value_as::<DeploymentDistributionRecord>,
        decode_intent: decode_intent_as::<DeploymentDistributionIntent>,
        copy_value: copier::copy_as::<DeploymentDistributionRecord>,
    },
];

/// Look up the registry row for a value type.
///
/// Fails with [`RecordError::UnknownValueType`] for the sentinel members and
/// anything else without a registered shape; lookups never fall back to a
/// default shape.
pub fn lookup(value_type: ValueType) -> Result<&'static RegistryEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.value_type == value_type)
        .ok_or_else(|| RecordError::UnknownValueType(value_type.as_str().to_string()))
}

impl ValueShape for DeploymentRecord {
    const VALUE_TYPE: ValueType = ValueType::Deployment;

    fn wrap(self) -> RecordValue {
        RecordValue::Deployment(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Deployment(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ErrorRecord {
    const VALUE_TYPE: ValueType = ValueType::Error;

    fn wrap(self) -> RecordValue {
        RecordValue::Error(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Error(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for IncidentRecord {
    const VALUE_TYPE: ValueType = ValueType::Incident;

    fn wrap(self) -> RecordValue {
        RecordValue::Incident(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Incident(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for JobRecord {
    const VALUE_TYPE: ValueType = ValueType::Job;

    fn wrap(self) -> RecordValue {
        RecordValue::Job(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Job(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for JobBatchRecord {
    const VALUE_TYPE: ValueType = ValueType::JobBatch;

    fn wrap(self) -> RecordValue {
        RecordValue::JobBatch(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::JobBatch(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for MessageRecord {
    const VALUE_TYPE: ValueType = ValueType::Message;

    fn wrap(self) -> RecordValue {
        RecordValue::Message(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Message(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for MessageStartEventSubscriptionRecord {
    const VALUE_TYPE: ValueType = ValueType::MessageStartEventSubscription;

    fn wrap(self) -> RecordValue {
        RecordValue::MessageStartEventSubscription(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::MessageStartEventSubscription(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for MessageSubscriptionRecord {
    const VALUE_TYPE: ValueType = ValueType::MessageSubscription;

    fn wrap(self) -> RecordValue {
        RecordValue::MessageSubscription(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::MessageSubscription(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ProcessRecord {
    const VALUE_TYPE: ValueType = ValueType::Process;

    fn wrap(self) -> RecordValue {
        RecordValue::Process(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Process(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ProcessEventRecord {
    const VALUE_TYPE: ValueType = ValueType::ProcessEvent;

    fn wrap(self) -> RecordValue {
        RecordValue::ProcessEvent(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::ProcessEvent(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ProcessInstanceRecord {
    const VALUE_TYPE: ValueType = ValueType::ProcessInstance;

    fn wrap(self) -> RecordValue {
        RecordValue::ProcessInstance(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::ProcessInstance(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ProcessInstanceCreationRecord {
    const VALUE_TYPE: ValueType = ValueType::ProcessInstanceCreation;

    fn wrap(self) -> RecordValue {
        RecordValue::ProcessInstanceCreation(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::ProcessInstanceCreation(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ProcessInstanceResultRecord {
    const VALUE_TYPE: ValueType = ValueType::ProcessInstanceResult;

    fn wrap(self) -> RecordValue {
        RecordValue::ProcessInstanceResult(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::ProcessInstanceResult(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for ProcessMessageSubscriptionRecord {
    const VALUE_TYPE: ValueType = ValueType::ProcessMessageSubscription;

    fn wrap(self) -> RecordValue {
        RecordValue::ProcessMessageSubscription(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::ProcessMessageSubscription(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for TimerRecord {
    const VALUE_TYPE: ValueType = ValueType::Timer;

    fn wrap(self) -> RecordValue {
        RecordValue::Timer(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Timer(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for VariableRecord {
    const VALUE_TYPE: ValueType = ValueType::Variable;

    fn wrap(self) -> RecordValue {
        RecordValue::Variable(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::Variable(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for VariableDocumentRecord {
    const VALUE_TYPE: ValueType = ValueType::VariableDocument;

    fn wrap(self) -> RecordValue {
        RecordValue::VariableDocument(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::VariableDocument(payload) => Some(payload),
            _ => None,
        }
    }
}

impl ValueShape for DeploymentDistributionRecord {
    const VALUE_TYPE: ValueType = ValueType::DeploymentDistribution;

    fn wrap(self) -> RecordValue {
        RecordValue::DeploymentDistribution(self)
    }

    fn peel(value: &RecordValue) -> Option<&Self> {
        match value {
            RecordValue::DeploymentDistribution(payload) => Some(payload),
            _ => None,
        }
    }
}
