//! Intent types: the action tag of a record, scoped per value type.
//!
//! Each value type owns a disjoint intent family; [`Intent`] is the closed
//! umbrella over all families plus the cross-family [`Intent::Unknown`]
//! sentinel. The sentinel is the default for locally built envelopes only;
//! the decoder never produces it (an unrecognized intent string fails
//! instead, see [`DecodeContext::resolve_intent`]).
//!
//! [`DecodeContext::resolve_intent`]: crate::codec::DecodeContext::resolve_intent

use serde::{Deserialize, Serialize};

use crate::types::ValueType;

/// Intents of `DEPLOYMENT` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum DeploymentIntent {
    Create,
    Created,
    Distribute,
    Distributed,
    FullyDistributed,
}

/// Intents of `ERROR` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorIntent {
    Created,
}

/// Intents of `INCIDENT` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum IncidentIntent {
    Created,
    Resolve,
    Resolved,
}

/// Intents of `JOB` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum JobIntent {
    Created,
    Complete,
    Completed,
    TimeOut,
    TimedOut,
    Fail,
    Failed,
    UpdateRetries,
    RetriesUpdated,
    Cancel,
    Canceled,
    ThrowError,
    ErrorThrown,
}

/// Intents of `JOB_BATCH` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum JobBatchIntent {
    Activate,
    Activated,
}

/// Intents of `MESSAGE` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum MessageIntent {
    Publish,
    Published,
    Expire,
    Expired,
}

/// Intents of `MESSAGE_START_EVENT_SUBSCRIPTION` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum MessageStartEventSubscriptionIntent {
    Created,
    Correlated,
    Deleted,
}

/// Intents of `MESSAGE_SUBSCRIPTION` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum MessageSubscriptionIntent {
    Create,
    Created,
    Correlating,
    Correlate,
    Correlated,
    Reject,
    Rejected,
    Delete,
    Deleted,
}

/// Intents of `PROCESS` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProcessIntent {
    Created,
}

/// Intents of `PROCESS_EVENT` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProcessEventIntent {
    Triggering,
    Triggered,
}

/// Intents of `PROCESS_INSTANCE` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProcessInstanceIntent {
    Cancel,
    SequenceFlowTaken,
    ElementActivating,
    ElementActivated,
    ElementCompleting,
    ElementCompleted,
    ElementTerminating,
    ElementTerminated,
}

/// Intents of `PROCESS_INSTANCE_CREATION` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProcessInstanceCreationIntent {
    Create,
    Created,
}

/// Intents of `PROCESS_INSTANCE_RESULT` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProcessInstanceResultIntent {
    Completed,
}

/// Intents of `PROCESS_MESSAGE_SUBSCRIPTION` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProcessMessageSubscriptionIntent {
    Creating,
    Create,
    Created,
    Correlate,
    Correlated,
    Deleting,
    Delete,
    Deleted,
}

/// Intents of `TIMER` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TimerIntent {
    Created,
    Trigger,
    Triggered,
    Canceled,
}

/// Intents of `VARIABLE` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum VariableIntent {
    Created,
    Updated,
}

/// Intents of `VARIABLE_DOCUMENT` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum VariableDocumentIntent {
    Update,
    Updated,
}

/// Intents of `DEPLOYMENT_DISTRIBUTION` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum DeploymentDistributionIntent {
    Distributing,
    Complete,
    Completed,
}

/// The action tag of a record, scoped by its value type.
///
/// A decoded intent always belongs to the family selected by the record's
/// own [`ValueType`]. [`Intent::Unknown`] is the family-agnostic default for
/// locally built envelopes; it is serialized by omitting the `intent` field
/// and is never produced by decoding a present wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// `DEPLOYMENT` family
    Deployment(DeploymentIntent),
    /// `ERROR` family
    Error(ErrorIntent),
    /// `INCIDENT` family
    Incident(IncidentIntent),
    /// `JOB` family
    Job(JobIntent),
    /// `JOB_BATCH` family
    JobBatch(JobBatchIntent),
    /// `MESSAGE` family
    Message(MessageIntent),
    /// `MESSAGE_START_EVENT_SUBSCRIPTION` family
    MessageStartEventSubscription(MessageStartEventSubscriptionIntent),
    /// `MESSAGE_SUBSCRIPTION` family
    MessageSubscription(MessageSubscriptionIntent),
    /// `PROCESS` family
    Process(ProcessIntent),
    /// `PROCESS_EVENT` family
    ProcessEvent(ProcessEventIntent),
    /// `PROCESS_INSTANCE` family
    ProcessInstance(ProcessInstanceIntent),
    /// `PROCESS_INSTANCE_CREATION` family
    ProcessInstanceCreation(ProcessInstanceCreationIntent),
    /// `PROCESS_INSTANCE_RESULT` family
    ProcessInstanceResult(ProcessInstanceResultIntent),
    /// `PROCESS_MESSAGE_SUBSCRIPTION` family
    ProcessMessageSubscription(ProcessMessageSubscriptionIntent),
    /// `TIMER` family
    Timer(TimerIntent),
    /// `VARIABLE` family
    Variable(VariableIntent),
    /// `VARIABLE_DOCUMENT` family
    VariableDocument(VariableDocumentIntent),
    /// `DEPLOYMENT_DISTRIBUTION` family
    DeploymentDistribution(DeploymentDistributionIntent),
    /// Cross-family sentinel used as the builder default
    Unknown,
}

impl Intent {
    /// The value type whose family this intent belongs to, or `None` for the
    /// cross-family [`Intent::Unknown`] sentinel.
    pub fn family(&self) -> Option<ValueType> {
        match self {
            Intent::Deployment(_) => Some(ValueType::Deployment),
            Intent::Error(_) => Some(ValueType::Error),
            Intent::Incident(_) => Some(ValueType::Incident),
            Intent::Job(_) => Some(ValueType::Job),
            Intent::JobBatch(_) => Some(ValueType::JobBatch),
            Intent::Message(_) => Some(ValueType::Message),
            Intent::MessageStartEventSubscription(_) => {
                Some(ValueType::MessageStartEventSubscription)
            },
            Intent::MessageSubscription(_) => Some(ValueType::MessageSubscription),
            Intent::Process(_) => Some(ValueType::Process),
            Intent::ProcessEvent(_) => Some(ValueType::ProcessEvent),
            Intent::ProcessInstance(_) => Some(ValueType::ProcessInstance),
            Intent::ProcessInstanceCreation(_) => Some(ValueType::ProcessInstanceCreation),
            Intent::ProcessInstanceResult(_) => Some(ValueType::ProcessInstanceResult),
            Intent::ProcessMessageSubscription(_) => Some(ValueType::ProcessMessageSubscription),
            Intent::Timer(_) => Some(ValueType::Timer),
            Intent::Variable(_) => Some(ValueType::Variable),
            Intent::VariableDocument(_) => Some(ValueType::VariableDocument),
            Intent::DeploymentDistribution(_) => Some(ValueType::DeploymentDistribution),
            Intent::Unknown => None,
        }
    }

    /// Whether this is the cross-family sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Intent::Unknown)
    }
}

impl Default for Intent {
    fn default() -> Self {
        Intent::Unknown
    }
}

impl Serialize for Intent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Intent::Deployment(intent) => intent.serialize(serializer),
            Intent::Error(intent) => intent.serialize(serializer),
            Intent::Incident(intent) => intent.serialize(serializer),
            Intent::Job(intent) => intent.serialize(serializer),
            Intent::JobBatch(intent) => intent.serialize(serializer),
            Intent::Message(intent) => intent.serialize(serializer),
            Intent::MessageStartEventSubscription(intent) => intent.serialize(serializer),
            Intent::MessageSubscription(intent) => intent.serialize(serializer),
            Intent::Process(intent) => intent.serialize(serializer),
            Intent::ProcessEvent(intent) => intent.serialize(serializer),
            Intent::ProcessInstance(intent) => intent.serialize(serializer),
            Intent::ProcessInstanceCreation(intent) => intent.serialize(serializer),
            Intent::ProcessInstanceResult(intent) => intent.serialize(serializer),
            Intent::ProcessMessageSubscription(intent) => intent.serialize(serializer),
            Intent::Timer(intent) => intent.serialize(serializer),
            Intent::Variable(intent) => intent.serialize(serializer),
            Intent::VariableDocument(intent) => intent.serialize(serializer),
            Intent::DeploymentDistribution(intent) => intent.serialize(serializer),
            Intent::Unknown => serializer.serialize_str("UNKNOWN"),
        }
    }
}

impl From<DeploymentIntent> for Intent {
    fn from(intent: DeploymentIntent) -> Self {
        Intent::Deployment(intent)
    }
}

impl From<ErrorIntent> for Intent {
    fn from(intent: ErrorIntent) -> Self {
        Intent::Error(intent)
    }
}

impl From<IncidentIntent> for Intent {
    fn from(intent: IncidentIntent) -> Self {
        Intent::Incident(intent)
    }
}

impl From<JobIntent> for Intent {
    fn from(intent: JobIntent) -> Self {
        Intent::Job(intent)
    }
}

impl From<JobBatchIntent> for Intent {
    fn from(intent: JobBatchIntent) -> Self {
        Intent::JobBatch(intent)
    }
}

impl From<MessageIntent> for Intent {
    fn from(intent: MessageIntent) -> Self {
        Intent::Message(intent)
    }
}

impl From<MessageStartEventSubscriptionIntent> for Intent {
    fn from(intent: MessageStartEventSubscriptionIntent) -> Self {
        Intent::MessageStartEventSubscription(intent)
    }
}

impl From<MessageSubscriptionIntent> for Intent {
    fn from(intent: MessageSubscriptionIntent) -> Self {
        Intent::MessageSubscription(intent)
    }
}

impl From<ProcessIntent> for Intent {
    fn from(intent: ProcessIntent) -> Self {
        Intent::Process(intent)
    }
}

impl From<ProcessEventIntent> for Intent {
    fn from(intent: ProcessEventIntent) -> Self {
        Intent::ProcessEvent(intent)
    }
}

impl From<ProcessInstanceIntent> for Intent {
    fn from(intent: ProcessInstanceIntent) -> Self {
        Intent::ProcessInstance(intent)
    }
}

impl From<ProcessInstanceCreationIntent> for Intent {
    fn from(intent: ProcessInstanceCreationIntent) -> Self {
        Intent::ProcessInstanceCreation(intent)
    }
}

impl From<ProcessInstanceResultIntent> for Intent {
    fn from(intent: ProcessInstanceResultIntent) -> Self {
        Intent::ProcessInstanceResult(intent)
    }
}

impl From<ProcessMessageSubscriptionIntent> for Intent {
    fn from(intent: ProcessMessageSubscriptionIntent) -> Self {
        Intent::ProcessMessageSubscription(intent)
    }
}

impl From<TimerIntent> for Intent {
    fn from(intent: TimerIntent) -> Self {
        Intent::Timer(intent)
    }
}

impl From<VariableIntent> for Intent {
    fn from(intent: VariableIntent) -> Self {
        Intent::Variable(intent)
    }
}

impl From<VariableDocumentIntent> for Intent {
    fn from(intent: VariableDocumentIntent) -> Self {
        Intent::VariableDocument(intent)
    }
}

impl From<DeploymentDistributionIntent> for Intent {
    fn from(intent: DeploymentDistributionIntent) -> Self {
        Intent::DeploymentDistribution(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_serializes_to_wire_name() {
        let intent = Intent::Job(JobIntent::TimeOut);
        assert_eq!(serde_json::to_value(intent).unwrap(), "TIME_OUT");

        let intent = Intent::ProcessInstance(ProcessInstanceIntent::SequenceFlowTaken);
        assert_eq!(serde_json::to_value(intent).unwrap(), "SEQUENCE_FLOW_TAKEN");
    }

    #[test]
    fn unknown_serializes_to_sentinel_name() {
        assert_eq!(serde_json::to_value(Intent::Unknown).unwrap(), "UNKNOWN");
    }

    #[test]
    fn family_matches_value_type() {
        assert_eq!(
            Intent::from(DeploymentIntent::Created).family(),
            Some(ValueType::Deployment)
        );
        assert_eq!(
            Intent::from(JobBatchIntent::Activated).family(),
            Some(ValueType::JobBatch)
        );
        assert_eq!(Intent::Unknown.family(), None);
    }

    #[test]
    fn default_is_unknown() {
        assert!(Intent::default().is_unknown());
    }
}
