//! Smoke tests asserting that every member of the closed value type set is
//! handled by the codec and the deep copier, and that the sentinels never
//! resolve to a shape. These are the tests that should fail first when a new
//! value type is added to the protocol.

use flowrec::{codec, copier, registry, RecordError, ValueType};
use serde_json::json;

#[test]
fn every_known_value_type_decodes() {
    for value_type in ValueType::ALL {
        let value = codec::decode_value(value_type.as_str(), json!({}))
            .unwrap_or_else(|err| panic!("{value_type} failed to decode: {err}"));
        assert_eq!(value.value_type(), value_type);
    }
}

#[test]
fn every_known_value_type_encodes() {
    for value_type in ValueType::ALL {
        let value = codec::decode_value(value_type.as_str(), json!({})).unwrap();
        let (encoded_type, raw) = codec::encode_value(&value).unwrap();

        assert_eq!(encoded_type, value_type);
        assert!(raw.is_object(), "{value_type} should encode to an object");
    }
}

#[test]
fn every_known_value_type_deep_copies() {
    for value_type in ValueType::ALL {
        let value = codec::decode_value(value_type.as_str(), json!({})).unwrap();
        let copied = copier::deep_copy_value(value_type, &value)
            .unwrap_or_else(|err| panic!("{value_type} failed to copy: {err}"));

        assert_eq!(copied, value);
    }
}

#[test]
fn every_known_value_type_has_a_registry_row() {
    for value_type in ValueType::ALL {
        let entry = registry::lookup(value_type).unwrap();
        assert_eq!(entry.value_type(), value_type);
    }
}

#[test]
fn sentinels_never_resolve_to_a_shape() {
    for sentinel in [ValueType::NullVal, ValueType::SbeUnknown] {
        assert!(matches!(
            registry::lookup(sentinel),
            Err(RecordError::UnknownValueType(_))
        ));
        assert!(matches!(
            codec::decode_value(sentinel.as_str(), json!({})),
            Err(RecordError::UnknownValueType(_))
        ));
    }
}

#[test]
fn closed_set_members_are_distinct() {
    for (index, value_type) in ValueType::ALL.iter().enumerate() {
        for other in &ValueType::ALL[index + 1..] {
            assert_ne!(value_type, other);
            assert_ne!(value_type.as_str(), other.as_str());
        }
    }
}
