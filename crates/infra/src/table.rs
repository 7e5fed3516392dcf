use std::fmt::Display;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RepositoryError;

/// A storable row keyed by a primary key.
pub trait Row: Clone + Send + Sync + 'static {
    type Key: Eq + Display;

    /// Table name, used in error messages and logs.
    const TABLE: &'static str;
    /// Entity name reported when a row is missing (`"<ENTITY> not found."`).
    const ENTITY: &'static str;

    fn key(&self) -> &Self::Key;
}

/// In-memory table: rows kept in insertion order.
///
/// Intended for tests/dev. Lookups are linear scans.
#[derive(Debug)]
pub struct Table<R> {
    rows: RwLock<Vec<R>>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Row> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<R>>, RepositoryError> {
        self.rows
            .read()
            .map_err(|_| RepositoryError::Poisoned { table: R::TABLE })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<R>>, RepositoryError> {
        self.rows
            .write()
            .map_err(|_| RepositoryError::Poisoned { table: R::TABLE })
    }

    /// Append a new row. Fails if the key is already taken.
    pub fn insert(&self, row: R) -> Result<(), RepositoryError> {
        let mut rows = self.write()?;
        if rows.iter().any(|r| r.key() == row.key()) {
            return Err(RepositoryError::DuplicateKey {
                table: R::TABLE,
                key: row.key().to_string(),
            });
        }
        tracing::debug!(table = R::TABLE, key = %row.key(), "row inserted");
        rows.push(row);
        Ok(())
    }

    /// Replace an existing row in place, keeping its position.
    pub fn replace(&self, row: R) -> Result<(), RepositoryError> {
        let mut rows = self.write()?;
        let slot = rows
            .iter_mut()
            .find(|r| r.key() == row.key())
            .ok_or(RepositoryError::NotFound { entity: R::ENTITY })?;
        tracing::debug!(table = R::TABLE, key = %row.key(), "row replaced");
        *slot = row;
        Ok(())
    }

    pub fn get(&self, key: &R::Key) -> Result<R, RepositoryError> {
        self.read()?
            .iter()
            .find(|r| r.key() == key)
            .cloned()
            .ok_or(RepositoryError::NotFound { entity: R::ENTITY })
    }

    pub fn all(&self) -> Result<Vec<R>, RepositoryError> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}
