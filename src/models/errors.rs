use thiserror::Error;

use crate::domain::types::{ChannelKind, SearchKind};

/// Failure to turn a loosely-typed response body into a domain record.
///
/// Callers can tell malformed input (`FieldMissing`, `FieldTypeMismatch`,
/// `ArityError`, `UnknownDiscriminator`) apart from well-formed input naming
/// a feature the client has not implemented yet (`Unimplemented*`).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{field} not set")]
    FieldMissing { field: String },

    #[error("failed to cast {field} to {expected}")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("{field} must have {expected} elements, got {actual}")]
    ArityError {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} search on {channel} not implemented")]
    UnimplementedCombination {
        channel: ChannelKind,
        kind: SearchKind,
    },

    #[error("{channel} prospects not implemented")]
    UnimplementedProspect { channel: ChannelKind },

    #[error("unknown {field}: {value}")]
    UnknownDiscriminator { field: String, value: String },

    #[error("data not set")]
    EmptyList,

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        DecodeError::FieldMissing {
            field: field.into(),
        }
    }

    pub(crate) fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        DecodeError::FieldTypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Returns `true` when the input was valid but names an unbuilt decoder.
    pub fn is_unimplemented(&self) -> bool {
        matches!(
            self,
            DecodeError::UnimplementedCombination { .. } | DecodeError::UnimplementedProspect { .. }
        )
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failure to build an outbound request envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unsupported search data type: {received}")]
    UnsupportedVariant { received: SearchKind },
}

pub type EncodeResult<T> = Result<T, EncodeError>;
