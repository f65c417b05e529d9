//! Key/value persistence for dashboard state.
//!
//! # Responsibility
//! - Define the local-first `PersistenceStore` contract (JSON text by key).
//! - Provide an in-memory store and a SQLite-backed store.
//!
//! # Invariants
//! - `save` is last-write-wins per key.
//! - `load` of an unknown key returns `Ok(None)`, never an error.

use crate::db::DbError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Stored or outgoing JSON could not be (de)serialized.
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "invalid persisted state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Local-first JSON document store.
pub trait PersistenceStore {
    fn save(&mut self, key: &str, json: &str) -> StoreResult<()>;
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    entries: HashMap<String, String>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersistenceStore for InMemoryPersistence {
    fn save(&mut self, key: &str, json: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}
