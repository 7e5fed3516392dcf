//! Domain error model.

use thiserror::Error;

use crate::notification::Notification;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Storage failures belong to the repository implementation.
///
/// The `Display` output of the validation variants is the human-readable reason
/// itself (e.g. `Id is required.`), so callers can surface it as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single invariant was violated (fail-fast entities).
    #[error("{0}")]
    Validation(String),

    /// One or more invariants were violated (entities that accumulate failures).
    #[error("{0}")]
    Notification(Notification),

    /// A requested entity does not exist.
    #[error("{entity} not found.")]
    NotFound { entity: &'static str },

    /// The operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Every violated-invariant reason carried by this error, in evaluation order.
    ///
    /// Empty for non-validation errors.
    pub fn reasons(&self) -> Vec<&str> {
        match self {
            DomainError::Validation(reason) => vec![reason.as_str()],
            DomainError::Notification(n) => n.errors().iter().map(|e| e.message.as_str()).collect(),
            DomainError::NotFound { .. } | DomainError::Conflict(_) => Vec::new(),
        }
    }

    /// Whether this error is a validation failure (as opposed to not-found/conflict).
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_) | DomainError::Notification(_))
    }
}

impl From<Notification> for DomainError {
    fn from(value: Notification) -> Self {
        Self::Notification(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_the_bare_reason() {
        let err = DomainError::validation("Id is required.");
        assert_eq!(err.to_string(), "Id is required.");
        assert_eq!(err.reasons(), vec!["Id is required."]);
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::not_found("Customer");
        assert_eq!(err.to_string(), "Customer not found.");
        assert!(err.reasons().is_empty());
        assert!(!err.is_validation());
    }
}
