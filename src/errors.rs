// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for topology operations

use thiserror::Error;

use crate::domain::NetworkError;

/// Errors raised by the graph mutator, the serializer and the generators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Referenced device/connection/interface does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Connection endpoint does not resolve to a device in the project
    #[error("Connection endpoint does not reference a device: {0}")]
    InvalidReference(String),

    /// Connection source and target are the same device
    #[error("Device cannot be connected to itself: {0}")]
    SelfConnection(String),

    /// Token outside a closed enumeration
    #[error("Unknown {kind} value: {value:?}")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// Serialized input is missing a required field or has the wrong shape
    #[error("Malformed project document: {0}")]
    MalformedDocument(String),

    /// Project state cannot be represented in the target artifact
    #[error("Generation error: {0}")]
    GenerationError(String),

    /// Rejected field edit
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Reading or writing artifacts failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;

impl TopologyError {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        TopologyError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn unknown_enum(kind: &'static str, value: impl Into<String>) -> Self {
        TopologyError::UnknownEnumValue {
            kind,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for TopologyError {
    fn from(err: serde_json::Error) -> Self {
        TopologyError::MalformedDocument(err.to_string())
    }
}

impl From<serde_yaml::Error> for TopologyError {
    fn from(err: serde_yaml::Error) -> Self {
        TopologyError::GenerationError(err.to_string())
    }
}

impl From<std::io::Error> for TopologyError {
    fn from(err: std::io::Error) -> Self {
        TopologyError::Io(err.to_string())
    }
}

impl From<NetworkError> for TopologyError {
    fn from(err: NetworkError) -> Self {
        TopologyError::InvalidValue(err.to_string())
    }
}
