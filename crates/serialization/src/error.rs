//! Decode and encode error taxonomy.
//!
//! Every failure aborts the surrounding node decode/encode and propagates
//! verbatim; there is no partial-success or default-substitution path.

use thiserror::Error;

/// Deserialization failure. The first error raised while walking a node tree
/// fails the whole tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("unknown value for enum {enum_name}: {value:?}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization failure, propagated from the first field that cannot be
/// written.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("non-finite number for property {property:?}")]
    NonFiniteNumber { property: String },
    #[error("document serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
