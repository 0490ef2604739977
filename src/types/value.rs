//! Record value types: the closed value-type tag set and the polymorphic
//! payload carried by a record envelope.
//!
//! Every non-sentinel [`ValueType`] maps to exactly one payload struct, and
//! [`RecordValue`] is the closed variant over all of them. The mapping itself
//! lives in the [`registry`](crate::registry) so that decode, encode, and
//! deep copy all dispatch through one table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variables document attached to several record values.
///
/// Uses `serde_json`'s order-preserving map so a decode → encode round trip
/// keeps the original key order.
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// The closed set of record value types.
///
/// The wire representation is the SCREAMING_SNAKE_CASE member name (e.g.
/// `PROCESS_INSTANCE`), matched case-sensitively and 1:1. `NullVal` and
/// `SbeUnknown` are sentinels: they exist on the wire ("no real type" /
/// "unrecognized tag") but never resolve to a payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Deployment of one or more processes
    Deployment,
    /// Fatal processing error
    Error,
    /// Incident raised during process execution
    Incident,
    /// Service task job
    Job,
    /// Batch of activated jobs
    JobBatch,
    /// Published message
    Message,
    /// Subscription correlating messages to a process start event
    MessageStartEventSubscription,
    /// Subscription correlating messages to an element instance
    MessageSubscription,
    /// Deployed process definition
    Process,
    /// Event observed by a process element
    ProcessEvent,
    /// Process instance element lifecycle
    ProcessInstance,
    /// Explicit process instance creation
    ProcessInstanceCreation,
    /// Result of a completed process instance
    ProcessInstanceResult,
    /// Message subscription from the process side
    ProcessMessageSubscription,
    /// Timer created for a catch event
    Timer,
    /// Variable created or updated in some scope
    Variable,
    /// Variable document update request
    VariableDocument,
    /// Distribution of a deployment to other partitions
    DeploymentDistribution,
    /// Sentinel: no real value type
    NullVal,
    /// Sentinel: value type not recognized by the decoder that produced it
    SbeUnknown,
}

impl ValueType {
    /// Every non-sentinel member of the closed set, i.e. every tag with a
    /// registered payload shape. Conformance tests iterate this to assert
    /// exhaustiveness of the registry.
    pub const ALL: [ValueType; 18] = [
        ValueType::Deployment,
        ValueType::Error,
        ValueType::Incident,
        ValueType::Job,
        ValueType::JobBatch,
        ValueType::Message,
        ValueType::MessageStartEventSubscription,
        ValueType::MessageSubscription,
        ValueType::Process,
        ValueType::ProcessEvent,
        ValueType::ProcessInstance,
        ValueType::ProcessInstanceCreation,
        ValueType::ProcessInstanceResult,
        ValueType::ProcessMessageSubscription,
        ValueType::Timer,
        ValueType::Variable,
        ValueType::VariableDocument,
        ValueType::DeploymentDistribution,
    ];

    /// The wire name of this value type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Deployment => "DEPLOYMENT",
            ValueType::Error => "ERROR",
            ValueType::Incident => "INCIDENT",
            ValueType::Job => "JOB",
            ValueType::JobBatch => "JOB_BATCH",
            ValueType::Message => "MESSAGE",
            ValueType::MessageStartEventSubscription => "MESSAGE_START_EVENT_SUBSCRIPTION",
            ValueType::MessageSubscription => "MESSAGE_SUBSCRIPTION",
            ValueType::Process => "PROCESS",
            ValueType::ProcessEvent => "PROCESS_EVENT",
            ValueType::ProcessInstance => "PROCESS_INSTANCE",
            ValueType::ProcessInstanceCreation => "PROCESS_INSTANCE_CREATION",
            ValueType::ProcessInstanceResult => "PROCESS_INSTANCE_RESULT",
            ValueType::ProcessMessageSubscription => "PROCESS_MESSAGE_SUBSCRIPTION",
            ValueType::Timer => "TIMER",
            ValueType::Variable => "VARIABLE",
            ValueType::VariableDocument => "VARIABLE_DOCUMENT",
            ValueType::DeploymentDistribution => "DEPLOYMENT_DISTRIBUTION",
            ValueType::NullVal => "NULL_VAL",
            ValueType::SbeUnknown => "SBE_UNKNOWN",
        }
    }

    /// Resolve a wire name back to a member of the closed set, sentinels
    /// included. Returns `None` for any string that is not an exact member
    /// name. Derived from [`ValueType::as_str`] so the two directions cannot
    /// drift apart.
    pub fn from_name(name: &str) -> Option<ValueType> {
        ValueType::ALL
            .iter()
            .chain([ValueType::NullVal, ValueType::SbeUnknown].iter())
            .copied()
            .find(|value_type| value_type.as_str() == name)
    }

    /// Whether this member is one of the two sentinels that never resolve to
    /// a payload shape.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ValueType::NullVal | ValueType::SbeUnknown)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ValueType::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown value type '{name}'")))
    }
}

/// The polymorphic payload carried by a record envelope.
///
/// Exactly one variant per non-sentinel [`ValueType`]; the runtime variant
/// determines the tag via [`RecordValue::value_type`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// `DEPLOYMENT`
    Deployment(DeploymentRecord),
    /// `ERROR`
    Error(ErrorRecord),
    /// `INCIDENT`
    Incident(IncidentRecord),
    /// `JOB`
    Job(JobRecord),
    /// `JOB_BATCH`
    JobBatch(JobBatchRecord),
    /// `MESSAGE`
    Message(MessageRecord),
    /// `MESSAGE_START_EVENT_SUBSCRIPTION`
    MessageStartEventSubscription(MessageStartEventSubscriptionRecord),
    /// `MESSAGE_SUBSCRIPTION`
    MessageSubscription(MessageSubscriptionRecord),
    /// `PROCESS`
    Process(ProcessRecord),
    /// `PROCESS_EVENT`
    ProcessEvent(ProcessEventRecord),
    /// `PROCESS_INSTANCE`
    ProcessInstance(ProcessInstanceRecord),
    /// `PROCESS_INSTANCE_CREATION`
    ProcessInstanceCreation(ProcessInstanceCreationRecord),
    /// `PROCESS_INSTANCE_RESULT`
    ProcessInstanceResult(ProcessInstanceResultRecord),
    /// `PROCESS_MESSAGE_SUBSCRIPTION`
    ProcessMessageSubscription(ProcessMessageSubscriptionRecord),
    /// `TIMER`
    Timer(TimerRecord),
    /// `VARIABLE`
    Variable(VariableRecord),
    /// `VARIABLE_DOCUMENT`
    VariableDocument(VariableDocumentRecord),
    /// `DEPLOYMENT_DISTRIBUTION`
    DeploymentDistribution(DeploymentDistributionRecord),
}

impl RecordValue {
    /// The value type tag selecting this payload's shape.
    pub fn value_type(&self) -> ValueType {
        match self {
            RecordValue::Deployment(_) => ValueType::Deployment,
            RecordValue::Error(_) => ValueType::Error,
            RecordValue::Incident(_) => ValueType::Incident,
            RecordValue::Job(_) => ValueType::Job,
            RecordValue::JobBatch(_) => ValueType::JobBatch,
            RecordValue::Message(_) => ValueType::Message,
            RecordValue::MessageStartEventSubscription(_) => {
                ValueType::MessageStartEventSubscription
            },
            RecordValue::MessageSubscription(_) => ValueType::MessageSubscription,
            RecordValue::Process(_) => ValueType::Process,
            RecordValue::ProcessEvent(_) => ValueType::ProcessEvent,
            RecordValue::ProcessInstance(_) => ValueType::ProcessInstance,
            RecordValue::ProcessInstanceCreation(_) => ValueType::ProcessInstanceCreation,
            RecordValue::ProcessInstanceResult(_) => ValueType::ProcessInstanceResult,
            RecordValue::ProcessMessageSubscription(_) => ValueType::ProcessMessageSubscription,
            RecordValue::Timer(_) => ValueType::Timer,
            RecordValue::Variable(_) => ValueType::Variable,
            RecordValue::VariableDocument(_) => ValueType::VariableDocument,
            RecordValue::DeploymentDistribution(_) => ValueType::DeploymentDistribution,
        }
    }
}

/// A service task job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    /// Job type, matched against job worker subscriptions
    pub r#type: String,
    /// Name of the worker that activated the job
    pub worker: String,
    /// Deadline (epoch milliseconds) until which the job is exclusively
    /// assigned to the worker; -1 while not activated
    pub deadline: i64,
    /// Remaining retries
    pub retries: i32,
    /// Message of the last failure, empty if none
    pub error_message: String,
    /// Code of the last thrown error; the `NULL_VAL` sentinel name if none
    pub error_code: String,
    /// Headers declared on the service task element
    pub custom_headers: IndexMap<String, String>,
    /// Variables visible at job activation
    pub variables: Variables,
    /// Id of the service task element in the process model
    pub element_id: String,
    /// Key of the element instance the job was created for
    pub element_instance_key: i64,
    /// BPMN process id of the owning process
    pub bpmn_process_id: String,
    /// Version of the owning process definition
    pub process_definition_version: i32,
    /// Key of the owning process definition
    pub process_definition_key: i64,
    /// Key of the owning process instance
    pub process_instance_key: i64,
}

impl Default for JobRecord {
    fn default() -> Self {
        Self {
            r#type: String::new(),
            worker: String::new(),
            deadline: -1,
            retries: 0,
            error_message: String::new(),
            error_code: ValueType::NullVal.as_str().to_string(),
            custom_headers: IndexMap::new(),
            variables: Variables::new(),
            element_id: String::new(),
            element_instance_key: -1,
            bpmn_process_id: String::new(),
            process_definition_version: 0,
            process_definition_key: -1,
            process_instance_key: -1,
        }
    }
}

/// Kind of resource carried in a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// BPMN XML process model
    #[default]
    BpmnXml,
    /// YAML workflow definition
    YamlWorkflow,
}

/// A single resource within a deployment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentResource {
    /// Raw resource content
    pub resource: Vec<u8>,
    /// File name the resource was deployed under
    pub resource_name: String,
    /// Kind of the resource
    pub resource_type: ResourceType,
}

/// Metadata of a process contained in a deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessMetadata {
    /// BPMN process id
    pub bpmn_process_id: String,
    /// Assigned version
    pub version: i32,
    /// Assigned process definition key
    pub process_definition_key: i64,
    /// Name of the resource the process was parsed from
    pub resource_name: String,
    /// Checksum of the resource content
    pub checksum: Vec<u8>,
    /// Whether this process was already deployed before
    pub duplicate: bool,
}

impl Default for ProcessMetadata {
    fn default() -> Self {
        Self {
            bpmn_process_id: String::new(),
            version: 0,
            process_definition_key: -1,
            resource_name: String::new(),
            checksum: Vec::new(),
            duplicate: false,
        }
    }
}

/// A deployment of one or more process resources.
///
/// Both collections are polymorphic sub-sequences: the deep copier rebuilds
/// them element by element, preserving order and count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentRecord {
    /// Deployed resources, in deployment order
    pub resources: Vec<DeploymentResource>,
    /// Metadata of the processes parsed out of the resources
    pub processes_metadata: Vec<ProcessMetadata>,
}

/// A deployed process definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessRecord {
    /// BPMN process id
    pub bpmn_process_id: String,
    /// Assigned version
    pub version: i32,
    /// Assigned process definition key
    pub process_definition_key: i64,
    /// Name of the resource the process was parsed from
    pub resource_name: String,
    /// Checksum of the resource content
    pub checksum: Vec<u8>,
    /// Raw resource content
    pub resource: Vec<u8>,
    /// Whether this process was already deployed before
    pub duplicate: bool,
}

impl Default for ProcessRecord {
    fn default() -> Self {
        Self {
            bpmn_process_id: String::new(),
            version: 0,
            process_definition_key: -1,
            resource_name: String::new(),
            checksum: Vec::new(),
            resource: Vec::new(),
            duplicate: false,
        }
    }
}

/// BPMN element types a process instance record can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum BpmnElementType {
    #[default]
    Unspecified,
    Process,
    SubProcess,
    EventSubProcess,
    StartEvent,
    IntermediateCatchEvent,
    IntermediateThrowEvent,
    BoundaryEvent,
    EndEvent,
    ServiceTask,
    ReceiveTask,
    UserTask,
    ManualTask,
    ExclusiveGateway,
    ParallelGateway,
    EventBasedGateway,
    SequenceFlow,
    MultiInstanceBody,
    CallActivity,
    BusinessRuleTask,
    ScriptTask,
    SendTask,
}

/// Lifecycle record of a process instance element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInstanceRecord {
    /// BPMN process id of the process definition
    pub bpmn_process_id: String,
    /// Version of the process definition
    pub version: i32,
    /// Key of the process definition
    pub process_definition_key: i64,
    /// Key of the process instance
    pub process_instance_key: i64,
    /// Id of the element this record refers to
    pub element_id: String,
    /// Key of the enclosing flow scope; -1 for the process instance itself
    pub flow_scope_key: i64,
    /// BPMN type of the element
    pub bpmn_element_type: BpmnElementType,
    /// Key of the parent process instance; -1 if not a child instance
    pub parent_process_instance_key: i64,
    /// Key of the call activity instance in the parent; -1 if none
    pub parent_element_instance_key: i64,
}

impl Default for ProcessInstanceRecord {
    fn default() -> Self {
        Self {
            bpmn_process_id: String::new(),
            version: 0,
            process_definition_key: -1,
            process_instance_key: -1,
            element_id: String::new(),
            flow_scope_key: -1,
            bpmn_element_type: BpmnElementType::Unspecified,
            parent_process_instance_key: -1,
            parent_element_instance_key: -1,
        }
    }
}

/// Categories of incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorType {
    #[default]
    Unknown,
    IoMappingError,
    JobNoRetries,
    ConditionError,
    ExtractValueError,
    CalledElementError,
    UnhandledErrorEvent,
    MessageSizeExceeded,
}

/// An incident raised during process execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentRecord {
    /// Category of the incident
    pub error_type: ErrorType,
    /// Human-readable description of the failure
    pub error_message: String,
    /// BPMN process id of the affected process
    pub bpmn_process_id: String,
    /// Key of the affected process instance
    pub process_instance_key: i64,
    /// Id of the element where the incident occurred
    pub element_id: String,
    /// Key of the element instance where the incident occurred
    pub element_instance_key: i64,
    /// Key of the failed job; -1 if the incident is not job-related
    pub job_key: i64,
    /// Key of the affected process definition
    pub process_definition_key: i64,
    /// Key of the scope from which variables can be inspected
    pub variable_scope_key: i64,
}

impl Default for IncidentRecord {
    fn default() -> Self {
        Self {
            error_type: ErrorType::Unknown,
            error_message: String::new(),
            bpmn_process_id: String::new(),
            process_instance_key: -1,
            element_id: String::new(),
            element_instance_key: -1,
            job_key: -1,
            process_definition_key: -1,
            variable_scope_key: -1,
        }
    }
}

/// A published message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageRecord {
    /// Message name
    pub name: String,
    /// Correlation key the message is matched on
    pub correlation_key: String,
    /// Publisher-assigned id for deduplication, empty if none
    pub message_id: String,
    /// Time to live in milliseconds
    pub time_to_live: i64,
    /// Variables carried by the message
    pub variables: Variables,
}

/// A message subscription of an element instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageSubscriptionRecord {
    /// Key of the subscribing process instance
    pub process_instance_key: i64,
    /// Key of the subscribing element instance
    pub element_instance_key: i64,
    /// Subscribed message name
    pub message_name: String,
    /// Correlation key of the subscription
    pub correlation_key: String,
    /// BPMN process id of the subscribing process
    pub bpmn_process_id: String,
    /// Key of the correlated message; -1 while none
    pub message_key: i64,
    /// Whether correlation interrupts the subscribing element
    pub interrupting: bool,
}

impl Default for MessageSubscriptionRecord {
    fn default() -> Self {
        Self {
            process_instance_key: -1,
            element_instance_key: -1,
            message_name: String::new(),
            correlation_key: String::new(),
            bpmn_process_id: String::new(),
            message_key: -1,
            interrupting: true,
        }
    }
}

/// The process-side view of a message subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessMessageSubscriptionRecord {
    /// Key of the subscribing process instance
    pub process_instance_key: i64,
    /// Key of the subscribing element instance
    pub element_instance_key: i64,
    /// BPMN process id of the subscribing process
    pub bpmn_process_id: String,
    /// Key of the correlated message; -1 while none
    pub message_key: i64,
    /// Subscribed message name
    pub message_name: String,
    /// Correlation key of the subscription
    pub correlation_key: String,
    /// Id of the subscribing element
    pub element_id: String,
    /// Whether correlation interrupts the subscribing element
    pub interrupting: bool,
    /// Variables carried by the correlated message
    pub variables: Variables,
}

impl Default for ProcessMessageSubscriptionRecord {
    fn default() -> Self {
        Self {
            process_instance_key: -1,
            element_instance_key: -1,
            bpmn_process_id: String::new(),
            message_key: -1,
            message_name: String::new(),
            correlation_key: String::new(),
            element_id: String::new(),
            interrupting: true,
            variables: Variables::new(),
        }
    }
}

/// A batch of jobs activated for one worker.
///
/// `jobs` is a polymorphic sub-sequence of [`JobRecord`] payloads; the deep
/// copier routes each element through the same job copy routine used for
/// standalone `JOB` records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobBatchRecord {
    /// Job type the batch was activated for
    pub r#type: String,
    /// Name of the activating worker
    pub worker: String,
    /// Activation timeout in milliseconds
    pub timeout: i64,
    /// Maximum number of jobs to activate
    pub max_jobs_to_activate: i32,
    /// Keys of the activated jobs, index-aligned with `jobs`
    pub job_keys: Vec<i64>,
    /// The activated jobs
    pub jobs: Vec<JobRecord>,
    /// Whether the batch was truncated because the dispatch frame was full
    pub truncated: bool,
}

/// A timer created for a catch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerRecord {
    /// Key of the element instance the timer waits on
    pub element_instance_key: i64,
    /// Key of the owning process instance
    pub process_instance_key: i64,
    /// Key of the owning process definition
    pub process_definition_key: i64,
    /// Due date in epoch milliseconds
    pub due_date: i64,
    /// Id of the element to trigger
    pub target_element_id: String,
    /// Remaining repetitions; -1 for infinite cycles
    pub repetitions: i32,
}

impl Default for TimerRecord {
    fn default() -> Self {
        Self {
            element_instance_key: -1,
            process_instance_key: -1,
            process_definition_key: -1,
            due_date: -1,
            target_element_id: String::new(),
            repetitions: 0,
        }
    }
}

/// A message subscription of a process start event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageStartEventSubscriptionRecord {
    /// Key of the subscribed process definition
    pub process_definition_key: i64,
    /// BPMN process id of the subscribed process
    pub bpmn_process_id: String,
    /// Id of the subscribed start event
    pub start_event_id: String,
    /// Subscribed message name
    pub message_name: String,
    /// Correlation key of the triggering message, empty if none
    pub correlation_key: String,
    /// Key of the correlated message; -1 while none
    pub message_key: i64,
    /// Key of the created process instance; -1 while none
    pub process_instance_key: i64,
    /// Variables carried by the correlated message
    pub variables: Variables,
}

impl Default for MessageStartEventSubscriptionRecord {
    fn default() -> Self {
        Self {
            process_definition_key: -1,
            bpmn_process_id: String::new(),
            start_event_id: String::new(),
            message_name: String::new(),
            correlation_key: String::new(),
            message_key: -1,
            process_instance_key: -1,
            variables: Variables::new(),
        }
    }
}

/// A variable created or updated in some scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableRecord {
    /// Variable name
    pub name: String,
    /// Variable value as a JSON document string
    pub value: String,
    /// Key of the scope the variable lives in
    pub scope_key: i64,
    /// Key of the owning process instance
    pub process_instance_key: i64,
    /// Key of the owning process definition
    pub process_definition_key: i64,
}

impl Default for VariableRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            scope_key: -1,
            process_instance_key: -1,
            process_definition_key: -1,
        }
    }
}

/// How a variable document update propagates through enclosing scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableDocumentUpdateSemantic {
    /// Update existing variables in enclosing scopes, create the rest locally
    #[default]
    Propagate,
    /// Create or update all variables in the target scope only
    UpdateLocal,
}

/// A request to update the variables of some scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableDocumentRecord {
    /// Key of the scope to update
    pub scope_key: i64,
    /// Propagation semantics of the update
    pub update_semantics: VariableDocumentUpdateSemantic,
    /// Variables to apply
    pub variables: Variables,
}

impl Default for VariableDocumentRecord {
    fn default() -> Self {
        Self {
            scope_key: -1,
            update_semantics: VariableDocumentUpdateSemantic::Propagate,
            variables: Variables::new(),
        }
    }
}

/// An explicit request to create a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInstanceCreationRecord {
    /// BPMN process id of the process to instantiate
    pub bpmn_process_id: String,
    /// Version to instantiate; -1 for the latest
    pub version: i32,
    /// Key of the process definition to instantiate
    pub process_definition_key: i64,
    /// Key of the created process instance; -1 until created
    pub process_instance_key: i64,
    /// Initial variables
    pub variables: Variables,
}

impl Default for ProcessInstanceCreationRecord {
    fn default() -> Self {
        Self {
            bpmn_process_id: String::new(),
            version: -1,
            process_definition_key: -1,
            process_instance_key: -1,
            variables: Variables::new(),
        }
    }
}

/// The result of a completed process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInstanceResultRecord {
    /// BPMN process id of the completed process
    pub bpmn_process_id: String,
    /// Version of the completed process definition
    pub version: i32,
    /// Key of the completed process definition
    pub process_definition_key: i64,
    /// Key of the completed process instance
    pub process_instance_key: i64,
    /// Variables visible at completion
    pub variables: Variables,
}

impl Default for ProcessInstanceResultRecord {
    fn default() -> Self {
        Self {
            bpmn_process_id: String::new(),
            version: 0,
            process_definition_key: -1,
            process_instance_key: -1,
            variables: Variables::new(),
        }
    }
}

/// A fatal, unhandled processing error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorRecord {
    /// Message of the unhandled exception
    pub exception_message: String,
    /// Stacktrace of the unhandled exception
    pub stacktrace: String,
    /// Position of the event that caused the error; -1 if unknown
    pub error_event_position: i64,
    /// Key of the affected process instance; -1 if none
    pub process_instance_key: i64,
}

impl Default for ErrorRecord {
    fn default() -> Self {
        Self {
            exception_message: String::new(),
            stacktrace: String::new(),
            error_event_position: -1,
            process_instance_key: -1,
        }
    }
}

/// Distribution of a deployment to another partition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentDistributionRecord {
    /// Partition the deployment is distributed to
    pub partition_id: i32,
}

/// An event observed by a process element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessEventRecord {
    /// Key of the scope the event was observed in
    pub scope_key: i64,
    /// Id of the element the event targets
    pub target_element_id: String,
    /// Key of the owning process definition
    pub process_definition_key: i64,
    /// Key of the owning process instance
    pub process_instance_key: i64,
    /// Variables carried by the event
    pub variables: Variables,
}

impl Default for ProcessEventRecord {
    fn default() -> Self {
        Self {
            scope_key: -1,
            target_element_id: String::new(),
            process_definition_key: -1,
            process_instance_key: -1,
            variables: Variables::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_names_round_trip() {
        for value_type in ValueType::ALL
            .iter()
            .chain([ValueType::NullVal, ValueType::SbeUnknown].iter())
        {
            assert_eq!(ValueType::from_name(value_type.as_str()), Some(*value_type));
        }
    }

    #[test]
    fn value_type_rejects_unknown_names() {
        assert_eq!(ValueType::from_name("JOBS"), None);
        assert_eq!(ValueType::from_name("job"), None);
        assert_eq!(ValueType::from_name(""), None);
    }

    #[test]
    fn sentinels_are_not_registered() {
        assert!(ValueType::NullVal.is_sentinel());
        assert!(ValueType::SbeUnknown.is_sentinel());
        assert!(!ValueType::ALL.iter().any(ValueType::is_sentinel));
    }

    #[test]
    fn job_record_defaults() {
        let job = JobRecord::default();
        assert_eq!(job.error_code, "NULL_VAL");
        assert_eq!(job.deadline, -1);
        assert!(job.custom_headers.is_empty());
        assert!(job.variables.is_empty());
    }

    #[test]
    fn job_record_wire_names() {
        let mut job = JobRecord::default();
        job.r#type = "payment".to_string();
        job.bpmn_process_id = "order".to_string();

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["type"], "payment");
        assert_eq!(json["bpmnProcessId"], "order");
        assert_eq!(json["errorCode"], "NULL_VAL");
    }

    #[test]
    fn deployment_resource_serializes_bytes_as_array() {
        let resource = DeploymentResource {
            resource: vec![1, 2, 3],
            resource_name: "a.bpmn".to_string(),
            resource_type: ResourceType::BpmnXml,
        };

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["resource"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["resourceType"], "BPMN_XML");
    }
}
