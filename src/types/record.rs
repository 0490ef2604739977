//! The record envelope: immutable metadata plus a polymorphic payload.

use serde::{Deserialize, Serialize};

use crate::copier;
use crate::error::Result;
use crate::types::{Intent, RecordValue, ValueType};

/// Whether a record is an event, a command, or a command rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    /// Something that happened
    Event,
    /// A request to do something
    Command,
    /// A rejected command
    CommandRejection,
    /// Sentinel: no record type set
    #[default]
    NullVal,
    /// Sentinel: record type not recognized by the decoder that produced it
    SbeUnknown,
}

/// Why a command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionType {
    /// Sentinel: the record is not a rejection
    #[default]
    NullVal,
    /// A command argument was invalid
    InvalidArgument,
    /// The addressed entity does not exist
    NotFound,
    /// The entity to create already exists
    AlreadyExists,
    /// The entity is in the wrong state for the command
    InvalidState,
    /// The command failed during processing
    ProcessingError,
    /// The command would exceed the batch record size limit
    ExceededBatchRecordSize,
    /// Sentinel: rejection type not recognized by the decoder that produced it
    SbeUnknown,
}

/// An immutable record: envelope metadata plus the polymorphic payload.
///
/// Records are never mutated in place; every operation (decode, re-encode,
/// deep copy) yields a new instance. Construction starts from
/// [`Record::new`] with the defaults of the protocol (`key` and
/// `sourceRecordPosition` −1, intent [`Intent::Unknown`], rejection type
/// [`RejectionType::NullVal`], empty rejection reason) and is refined with
/// the `with_*` methods.
///
/// # Example
///
/// ```
/// use flowrec::types::{JobIntent, JobRecord, Record, RecordType, RecordValue, ValueType};
///
/// let record = Record::new(RecordValue::Job(JobRecord::default()))
///     .with_position(8)
///     .with_record_type(RecordType::Event)
///     .with_intent(JobIntent::Created);
///
/// assert_eq!(record.value_type(), ValueType::Job);
/// assert_eq!(record.key, -1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Position of the record in its partition's stream
    pub position: i64,
    /// Position of the record that caused this one; -1 if none
    pub source_record_position: i64,
    /// Key of the entity the record refers to; -1 if unassigned
    pub key: i64,
    /// Timestamp in epoch milliseconds
    pub timestamp: i64,
    /// Id of the partition the record was written on
    pub partition_id: i32,
    /// Whether the record is an event, a command, or a rejection
    pub record_type: RecordType,
    /// The action the record represents, scoped by the value type
    pub intent: Intent,
    /// Why the command was rejected; `NullVal` if not a rejection
    pub rejection_type: RejectionType,
    /// Human-readable rejection reason, empty if not a rejection
    pub rejection_reason: String,
    /// The polymorphic payload
    pub value: RecordValue,
}

impl Record {
    /// Create a record around `value` with all other fields at their
    /// protocol defaults.
    pub fn new(value: RecordValue) -> Self {
        Self {
            position: 0,
            source_record_position: -1,
            key: -1,
            timestamp: 0,
            partition_id: 0,
            record_type: RecordType::default(),
            intent: Intent::Unknown,
            rejection_type: RejectionType::NullVal,
            rejection_reason: String::new(),
            value,
        }
    }

    /// The value type tag, derived from the payload's runtime variant.
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    /// Set the stream position.
    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Set the position of the causing record.
    pub fn with_source_record_position(mut self, position: i64) -> Self {
        self.source_record_position = position;
        self
    }

    /// Set the entity key.
    pub fn with_key(mut self, key: i64) -> Self {
        self.key = key;
        self
    }

    /// Set the timestamp (epoch milliseconds).
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the partition id.
    pub fn with_partition_id(mut self, partition_id: i32) -> Self {
        self.partition_id = partition_id;
        self
    }

    /// Set the record type.
    pub fn with_record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Set the intent.
    pub fn with_intent(mut self, intent: impl Into<Intent>) -> Self {
        self.intent = intent.into();
        self
    }

    /// Mark the record as a rejection with the given type and reason.
    pub fn with_rejection(
        mut self,
        rejection_type: RejectionType,
        reason: impl Into<String>,
    ) -> Self {
        self.rejection_type = rejection_type;
        self.rejection_reason = reason.into();
        self
    }

    /// Structural equality across construction paths: scalar envelope fields
    /// are compared directly, payloads only after both sides have been
    /// canonicalized through the deep copier. Fails if either payload's tag
    /// is unregistered.
    pub fn structurally_eq(&self, other: &Record) -> Result<bool> {
        if self.position != other.position
            || self.source_record_position != other.source_record_position
            || self.key != other.key
            || self.timestamp != other.timestamp
            || self.partition_id != other.partition_id
            || self.record_type != other.record_type
            || self.intent != other.intent
            || self.rejection_type != other.rejection_type
            || self.rejection_reason != other.rejection_reason
        {
            return Ok(false);
        }

        let own = copier::deep_copy_value(self.value_type(), &self.value)?;
        let theirs = copier::deep_copy_value(other.value_type(), &other.value)?;
        Ok(own == theirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobIntent, JobRecord};

    fn job_record() -> Record {
        Record::new(RecordValue::Job(JobRecord::default()))
    }

    #[test]
    fn fresh_record_has_sentinel_defaults() {
        let record = job_record();

        assert_eq!(record.key, -1);
        assert_eq!(record.source_record_position, -1);
        assert!(record.intent.is_unknown());
        assert_eq!(record.rejection_type, RejectionType::NullVal);
        assert_eq!(record.rejection_reason, "");
    }

    #[test]
    fn builder_methods_set_fields() {
        let record = job_record()
            .with_position(12)
            .with_key(7)
            .with_timestamp(1_000)
            .with_partition_id(3)
            .with_record_type(RecordType::CommandRejection)
            .with_intent(JobIntent::Complete)
            .with_rejection(RejectionType::InvalidState, "job is not activated");

        assert_eq!(record.position, 12);
        assert_eq!(record.key, 7);
        assert_eq!(record.partition_id, 3);
        assert_eq!(record.intent, Intent::Job(JobIntent::Complete));
        assert_eq!(record.rejection_type, RejectionType::InvalidState);
        assert_eq!(record.rejection_reason, "job is not activated");
    }

    #[test]
    fn structural_equality_ignores_construction_path() {
        let built = job_record().with_key(4);
        let cloned = built.clone();

        assert!(built.structurally_eq(&cloned).unwrap());
        assert!(!built.structurally_eq(&job_record()).unwrap());
    }

    #[test]
    fn record_type_wire_names() {
        assert_eq!(
            serde_json::to_value(RecordType::CommandRejection).unwrap(),
            "COMMAND_REJECTION"
        );
        assert_eq!(serde_json::to_value(RejectionType::NullVal).unwrap(), "NULL_VAL");
    }
}
