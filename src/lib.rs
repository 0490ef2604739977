//! # flowrec
//!
//! Immutable workflow-engine records with a self-describing JSON codec and
//! deep-copy normalization.
//!
//! A [`Record`](types::Record) is an immutable envelope (stream position,
//! key, timestamp, partition, record type, intent, rejection info) around a
//! polymorphic payload whose concrete shape is selected by a closed
//! [`ValueType`](types::ValueType) tag. This crate provides:
//!
//! - a [`registry`] mapping every non-sentinel tag to its payload shape,
//!   intent family, and deep-copy routine in one authoritative table, so the
//!   codec and the copier cannot drift out of sync;
//! - a [`codec`] that resolves the `valueType` discriminator of a JSON
//!   document into the registered payload shape, and the `intent` field
//!   within the family selected by that same discriminator (an explicit
//!   [`DecodeContext`](codec::DecodeContext) dependency);
//! - a [`copier`] that rebuilds canonical deep copies of records, recursing
//!   into nested polymorphic sequences (deployment resources, job-batch job
//!   lists), so records built via different code paths can be compared for
//!   structural equality.
//!
//! All operations are pure, synchronous transformations: records are never
//! mutated, every operation yields a new instance, and everything is safe to
//! call from any number of threads.
//!
//! # Example
//!
//! ```
//! use flowrec::types::{Record, ValueType};
//!
//! let json = r#"{
//!     "position": 3,
//!     "valueType": "JOB",
//!     "intent": "CREATED",
//!     "value": {"type": "payment", "retries": 3}
//! }"#;
//!
//! let record: Record = serde_json::from_str(json)?;
//! assert_eq!(record.value_type(), ValueType::Job);
//!
//! let canonical = flowrec::copier::deep_copy_record(&record)?;
//! assert!(record.structurally_eq(&canonical)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod copier;
pub mod error;
pub mod registry;
pub mod types;

pub use error::{RecordError, Result};
pub use types::{Intent, Record, RecordValue, ValueType};
