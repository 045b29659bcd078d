// SPDX-License-Identifier: MIT OR Apache-2.0

//! EventFlux Math Error Types
//!
//! Validation errors reject a query at compile time, execution errors fail a
//! single event and leave the executor usable for the next one.

use crate::core::executor::function::LifecycleState;
use crate::query_api::definition::attribute::{join_types, Type as ApiAttributeType};
use thiserror::Error;

/// Result type for EventFlux operations
pub type EventFluxResult<T> = Result<T, EventFluxError>;

/// Raised once, while a function call site is being compiled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid no of arguments passed to {function} function, required {expected}, but found {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error(
        "Invalid parameter type found for argument {position} of {function} function, required {}, but found {found}",
        join_types(.expected)
    )]
    TypeMismatch {
        function: String,
        position: usize,
        expected: Vec<ApiAttributeType>,
        found: ApiAttributeType,
    },
}

/// Raised per event; the executor stays valid afterwards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error("Argument {position} to the {function} function cannot be null")]
    NullArgument { function: String, position: usize },

    #[error("Result of the {function} function is undefined: {message}")]
    UndefinedDomain { function: String, message: String },

    #[error("Argument {position} to the {function} function is not numeric (found {found})")]
    UnsupportedValue {
        function: String,
        position: usize,
        found: ApiAttributeType,
    },

    #[error("Cannot {operation} {function} while it is {state}")]
    InvalidState {
        function: String,
        operation: &'static str,
        state: LifecycleState,
    },
}

/// Checkpoint blob problems.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to encode state: {0}")]
    Encode(String),

    #[error("Failed to decode state: {0}")]
    Decode(String),

    #[error("State version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Umbrella error for registry, configuration and persistence operations
#[derive(Error, Debug)]
pub enum EventFluxError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        config_key: Option<String>,
    },

    #[error("Extension '{extension_type}:{name}' not found")]
    ExtensionNotFound {
        extension_type: String,
        name: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl EventFluxError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: None,
        }
    }

    /// Create a configuration error with a specific key
    pub fn configuration_with_key(message: impl Into<String>, config_key: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: Some(config_key.into()),
        }
    }

    /// Create an extension not found error
    pub fn extension_not_found(extension_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ExtensionNotFound {
            extension_type: extension_type.into(),
            name: name.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create a generic error from a string
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_message() {
        let error = ValidationError::ArityMismatch {
            function: "math:log()".to_string(),
            expected: 2,
            found: 1,
        };
        assert_eq!(
            error.to_string(),
            "Invalid no of arguments passed to math:log() function, required 2, but found 1"
        );
    }

    #[test]
    fn test_type_mismatch_message_lists_accepted_types() {
        let error = ValidationError::TypeMismatch {
            function: "math:round()".to_string(),
            position: 0,
            expected: vec![ApiAttributeType::FLOAT, ApiAttributeType::DOUBLE],
            found: ApiAttributeType::INT,
        };
        let msg = error.to_string();
        assert!(msg.contains("required FLOAT or DOUBLE, but found INT"));
    }

    #[test]
    fn test_extension_not_found_error() {
        let error = EventFluxError::extension_not_found("function", "math:cbrt");
        assert!(matches!(error, EventFluxError::ExtensionNotFound { .. }));
        assert_eq!(error.to_string(), "Extension 'function:math:cbrt' not found");
    }

    #[test]
    fn test_validation_converts_into_umbrella() {
        let error: EventFluxError = ValidationError::ArityMismatch {
            function: "math:sinh()".to_string(),
            expected: 1,
            found: 3,
        }
        .into();
        assert!(matches!(error, EventFluxError::Validation(_)));
    }
}
