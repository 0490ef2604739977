//! Core record types: envelope, value payloads, and intents.

mod intent;
mod record;
mod value;

pub use intent::{
    DeploymentDistributionIntent, DeploymentIntent, ErrorIntent, IncidentIntent, Intent,
    JobBatchIntent, JobIntent, MessageIntent, MessageStartEventSubscriptionIntent,
    MessageSubscriptionIntent, ProcessEventIntent, ProcessInstanceCreationIntent,
    ProcessInstanceIntent, ProcessInstanceResultIntent, ProcessIntent,
    ProcessMessageSubscriptionIntent, TimerIntent, VariableDocumentIntent, VariableIntent,
};
pub use record::{Record, RecordType, RejectionType};
pub use value::{
    BpmnElementType, DeploymentDistributionRecord, DeploymentRecord, DeploymentResource,
    ErrorRecord, ErrorType, IncidentRecord, JobBatchRecord, JobRecord, MessageRecord,
    MessageStartEventSubscriptionRecord, MessageSubscriptionRecord, ProcessEventRecord,
    ProcessInstanceCreationRecord, ProcessInstanceRecord, ProcessInstanceResultRecord,
    ProcessMetadata, ProcessMessageSubscriptionRecord, ProcessRecord, RecordValue, ResourceType,
    TimerRecord, ValueType, VariableDocumentRecord, VariableRecord, Variables,
};
