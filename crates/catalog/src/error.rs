use thiserror::Error;

use crate::records::RecordKind;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading, validating, or accepting content
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two records in the same catalog share an id
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: RecordKind, id: String },

    /// A stored record carries a date field that does not parse
    #[error("{kind} '{id}': {field} '{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        kind: RecordKind,
        id: String,
        field: &'static str,
        value: String,
    },

    /// A submitted draft left a required field empty
    #[error("{kind} submission: {field} must not be empty")]
    EmptyField { kind: RecordKind, field: &'static str },

    /// A submitted draft carries a date field that does not parse
    #[error("{kind} submission: {field} '{value}' is not a YYYY-MM-DD date")]
    InvalidDraftDate {
        kind: RecordKind,
        field: &'static str,
        value: String,
    },

    /// Unrecognized record kind name
    #[error("unknown record kind '{0}'")]
    UnknownKind(String),

    /// Malformed content or draft JSON
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a content store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
