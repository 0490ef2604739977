//! Error types for record decoding, encoding, and deep copying.

use thiserror::Error;

use crate::types::ValueType;

/// Result type alias using [`RecordError`].
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors surfaced by the codec, the type registry, and the deep copier.
///
/// All errors are terminal for the operation in progress: there is no retry
/// and no partial result. Whether a failed record is skipped, retried, or
/// aborts an entire batch is the caller's decision.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The value type tag is not registered, either because the wire string
    /// matches no member of the closed set or because it names one of the
    /// sentinel members (`NULL_VAL`, `SBE_UNKNOWN`) that carry no shape.
    #[error("unknown value type '{0}'")]
    UnknownValueType(String),

    /// The intent string is not part of the family selected by the record's
    /// value type. Decoding never falls back to [`Intent::Unknown`].
    ///
    /// [`Intent::Unknown`]: crate::types::Intent::Unknown
    #[error("intent '{intent}' is not part of the {value_type} intent family")]
    UnknownIntent {
        /// The value type whose family was searched
        value_type: ValueType,
        /// The intent string that was not found
        intent: String,
    },

    /// An intent was resolved before its governing value type was known.
    #[error("intent cannot be resolved before the value type is known")]
    MissingContext,

    /// The value document does not match the shape registered for its tag.
    #[error("malformed {value_type} value: {source}")]
    MalformedValue {
        /// The value type whose shape the document failed to match
        value_type: ValueType,
        /// The underlying deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// A copy or encode was dispatched with a tag that does not match the
    /// payload's runtime variant.
    #[error("value type mismatch: expected {expected}, found {actual}")]
    ValueTypeMismatch {
        /// The tag the operation was dispatched with
        expected: ValueType,
        /// The tag derived from the payload's runtime variant
        actual: ValueType,
    },
}
