//! Unified error types for the domain layer
//!
//! Provides a common error type usable across domain operations, so
//! adapters and services do not have to invent per-module string errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Validation failed (e.g., a required argument was not supplied)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for contract violations.
    ///
    /// This is a programming-error class: the caller was expected to have
    /// validated its input already, so these are never retried.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("sessionId cannot be null or undefined");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: sessionId cannot be null or undefined"
        );
    }
}
