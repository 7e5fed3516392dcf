use thiserror::Error;

use shop_core::DomainError;

/// Persistence-layer failures of the in-memory adapters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// No row with the requested primary key.
    #[error("{entity} not found.")]
    NotFound { entity: &'static str },

    /// `create` was called with a primary key that already exists.
    #[error("{table}: duplicate key {key}")]
    DuplicateKey { table: &'static str, key: String },

    /// A writer panicked while holding the table lock.
    #[error("{table}: lock poisoned")]
    Poisoned { table: &'static str },

    /// A stored row no longer satisfies the entity's invariants.
    #[error("rehydration failed: {0}")]
    Rehydration(#[from] DomainError),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}
