//! The wire codec: self-describing JSON documents to and from [`Record`].
//!
//! A record document carries a `valueType` discriminator that governs two
//! sibling fields at once: the shape of the nested `value` payload and the
//! intent family of the `intent` field. Payload resolution goes through
//! [`decode_value`]/[`encode_value`]; intent resolution goes through a
//! [`DecodeContext`] carrying the already-resolved value type, making the
//! field-order dependency explicit instead of implicit.
//!
//! Unknown or extra document fields are ignored for forward compatibility.

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};
use crate::registry;
use crate::types::{Intent, Record, RecordType, RecordValue, RejectionType, ValueType};

/// Decode a raw value document as the payload shape registered for the given
/// wire tag.
///
/// The tag is matched case-sensitively, 1:1, against the closed set. Fails
/// with [`RecordError::UnknownValueType`] for anything unregistered,
/// including the `NULL_VAL` and `SBE_UNKNOWN` sentinels, and with
/// [`RecordError::MalformedValue`] if the document does not match the
/// registered shape.
pub fn decode_value(value_type_id: &str, raw: serde_json::Value) -> Result<RecordValue> {
    let value_type = ValueType::from_name(value_type_id)
        .ok_or_else(|| RecordError::UnknownValueType(value_type_id.to_string()))?;
    registry::lookup(value_type)?.decode_value(raw)
}

/// Encode a payload into its wire tag and raw value document.
///
/// The tag is determined by the payload's runtime variant, so encode and
/// decode resolve through the same registered shape.
pub fn encode_value(value: &RecordValue) -> Result<(ValueType, serde_json::Value)> {
    let value_type = value.value_type();
    let raw = serde_json::to_value(value).map_err(|source| RecordError::MalformedValue {
        value_type,
        source,
    })?;
    Ok((value_type, raw))
}

/// Decode context for fields whose resolution depends on a sibling field.
///
/// The intent field is scoped by the record's value type; resolving it
/// before the value type is known fails with
/// [`RecordError::MissingContext`] rather than guessing from field order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeContext {
    value_type: Option<ValueType>,
}

impl DecodeContext {
    /// An empty context: no value type resolved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context in which `value_type` has already been resolved.
    pub fn for_value_type(value_type: ValueType) -> Self {
        Self {
            value_type: Some(value_type),
        }
    }

    /// The value type carried by this context, if resolved.
    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    /// Resolve an intent wire name within the family selected by the
    /// context's value type.
    ///
    /// Fails with [`RecordError::MissingContext`] if no value type has been
    /// resolved yet, and with [`RecordError::UnknownIntent`] if the name is
    /// not a member of the family; the decoder never substitutes
    /// [`Intent::Unknown`] for an unrecognized wire value.
    pub fn resolve_intent(&self, raw: &str) -> Result<Intent> {
        let value_type = self.value_type.ok_or(RecordError::MissingContext)?;
        registry::lookup(value_type)?.decode_intent(raw)
    }
}

impl Serialize for RecordValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RecordValue::Deployment(payload) => payload.serialize(serializer),
            RecordValue::Error(payload) => payload.serialize(serializer),
            RecordValue::Incident(payload) => payload.serialize(serializer),
            RecordValue::Job(payload) => payload.serialize(serializer),
            RecordValue::JobBatch(payload) => payload.serialize(serializer),
            RecordValue::Message(payload) => payload.serialize(serializer),
            RecordValue::MessageStartEventSubscription(payload) => payload.serialize(serializer),
            RecordValue::MessageSubscription(payload) => payload.serialize(serializer),
            RecordValue::Process(payload) => payload.serialize(serializer),
            RecordValue::ProcessEvent(payload) => payload.serialize(serializer),
            RecordValue::ProcessInstance(payload) => payload.serialize(serializer),
            RecordValue::ProcessInstanceCreation(payload) => payload.serialize(serializer),
            RecordValue::ProcessInstanceResult(payload) => payload.serialize(serializer),
            RecordValue::ProcessMessageSubscription(payload) => payload.serialize(serializer),
            RecordValue::Timer(payload) => payload.serialize(serializer),
            RecordValue::Variable(payload) => payload.serialize(serializer),
            RecordValue::VariableDocument(payload) => payload.serialize(serializer),
            RecordValue::DeploymentDistribution(payload) => payload.serialize(serializer),
        }
    }
}

fn neg_one() -> i64 {
    -1
}

/// The record document as it appears on the wire, before the
/// `valueType`-governed fields are resolved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDocument {
    #[serde(default)]
    position: i64,
    #[serde(default = "neg_one")]
    source_record_position: i64,
    #[serde(default = "neg_one")]
    key: i64,
    #[serde(default)]
    timestamp: i64,
    #[serde(default)]
    partition_id: i32,
    #[serde(default)]
    record_type: RecordType,
    #[serde(default)]
    rejection_type: RejectionType,
    #[serde(default)]
    rejection_reason: String,
    value_type: String,
    #[serde(default)]
    intent: Option<String>,
    value: serde_json::Value,
}

/// Borrowed view of a record in document field order, for serialization.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordDocumentRef<'a> {
    position: i64,
    source_record_position: i64,
    key: i64,
    timestamp: i64,
    partition_id: i32,
    record_type: RecordType,
    rejection_type: RejectionType,
    rejection_reason: &'a str,
    value_type: ValueType,
    // Intent::Unknown is a local-construction default, never a wire value;
    // it round-trips as an absent field.
    #[serde(skip_serializing_if = "Intent::is_unknown")]
    intent: Intent,
    value: &'a RecordValue,
}

fn decode_document(document: RecordDocument) -> Result<Record> {
    tracing::debug!(
        value_type = document.value_type.as_str(),
        position = document.position,
        "decoding record document"
    );

    let value = decode_value(&document.value_type, document.value)?;
    let context = DecodeContext::for_value_type(value.value_type());
    let intent = match document.intent.as_deref() {
        Some(raw) => context.resolve_intent(raw)?,
        None => Intent::Unknown,
    };

    Ok(Record {
        position: document.position,
        source_record_position: document.source_record_position,
        key: document.key,
        timestamp: document.timestamp,
        partition_id: document.partition_id,
        record_type: document.record_type,
        intent,
        rejection_type: document.rejection_type,
        rejection_reason: document.rejection_reason,
        value,
    })
}

impl Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RecordDocumentRef {
            position: self.position,
            source_record_position: self.source_record_position,
            key: self.key,
            timestamp: self.timestamp,
            partition_id: self.partition_id,
            record_type: self.record_type,
            rejection_type: self.rejection_type,
            rejection_reason: &self.rejection_reason,
            value_type: self.value_type(),
            intent: self.intent,
            value: &self.value,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let document = RecordDocument::deserialize(deserializer)?;
        decode_document(document).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobIntent, JobRecord, MessageIntent};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_job_document_with_defaults() {
        let record: Record = serde_json::from_value(json!({
            "valueType": "JOB",
            "value": {"type": "foo", "retries": 3}
        }))
        .unwrap();

        assert_eq!(record.value_type(), ValueType::Job);
        assert!(record.intent.is_unknown());
        assert_eq!(record.key, -1);
        assert_eq!(record.source_record_position, -1);

        match &record.value {
            RecordValue::Job(job) => {
                assert_eq!(job.r#type, "foo");
                assert_eq!(job.retries, 3);
                assert_eq!(job.error_code, "NULL_VAL");
                assert!(job.custom_headers.is_empty());
                assert!(job.variables.is_empty());
            },
            other => panic!("expected a job payload, got {other:?}"),
        }
    }

    #[test]
    fn decodes_intent_within_the_value_type_family() {
        let record: Record = serde_json::from_value(json!({
            "valueType": "MESSAGE",
            "intent": "PUBLISHED",
            "value": {"name": "order-placed", "correlationKey": "order-17"}
        }))
        .unwrap();

        assert_eq!(record.intent, Intent::Message(MessageIntent::Published));
    }

    #[test]
    fn rejects_sentinel_discriminators() {
        for sentinel in ["NULL_VAL", "SBE_UNKNOWN"] {
            let err = decode_value(sentinel, json!({})).unwrap_err();
            assert!(matches!(err, RecordError::UnknownValueType(_)));

            let document = json!({"valueType": sentinel, "value": {}});
            assert!(serde_json::from_value::<Record>(document).is_err());
        }
    }

    #[test]
    fn rejects_unregistered_discriminators() {
        let err = decode_value("CHECKPOINT", json!({})).unwrap_err();
        assert!(matches!(err, RecordError::UnknownValueType(id) if id == "CHECKPOINT"));
    }

    #[test]
    fn rejects_foreign_family_intent() {
        let document = json!({
            "valueType": "JOB",
            "intent": "PUBLISH",
            "value": {}
        });

        let err = serde_json::from_value::<Record>(document).unwrap_err();
        assert!(err.to_string().contains("intent 'PUBLISH'"));
    }

    #[test]
    fn missing_intent_defaults_to_unknown_sentinel() {
        let record: Record = serde_json::from_value(json!({
            "valueType": "TIMER",
            "value": {}
        }))
        .unwrap();

        assert!(record.intent.is_unknown());
    }

    #[test]
    fn intent_resolution_requires_context() {
        let err = DecodeContext::new().resolve_intent("CREATED").unwrap_err();
        assert!(matches!(err, RecordError::MissingContext));
    }

    #[test]
    fn ignores_unknown_document_fields() {
        let record: Record = serde_json::from_value(json!({
            "valueType": "JOB",
            "value": {"retries": 1, "recurringTime": 500},
            "brokerVersion": "9.9.9"
        }))
        .unwrap();

        assert_eq!(record.value_type(), ValueType::Job);
    }

    #[test]
    fn unknown_intent_round_trips_as_absent_field() {
        let record = Record::new(RecordValue::Job(JobRecord::default()));
        let document = serde_json::to_value(&record).unwrap();

        assert!(document.get("intent").is_none());

        let decoded: Record = serde_json::from_value(document).unwrap();
        assert!(decoded.intent.is_unknown());
    }

    #[test]
    fn encodes_the_runtime_tag() {
        let record = Record::new(RecordValue::Job(JobRecord::default()))
            .with_intent(JobIntent::Created);
        let document = serde_json::to_value(&record).unwrap();

        assert_eq!(document["valueType"], "JOB");
        assert_eq!(document["intent"], "CREATED");
        assert_eq!(document["value"]["errorCode"], "NULL_VAL");
        assert_eq!(document["rejectionType"], "NULL_VAL");
    }

    #[test]
    fn encode_value_reports_the_variant_tag() {
        let (value_type, raw) = encode_value(&RecordValue::Job(JobRecord::default())).unwrap();
        assert_eq!(value_type, ValueType::Job);
        assert!(raw.is_object());
    }
}
