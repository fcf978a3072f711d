//! Persistent identity store contracts.
//!
//! # Responsibility
//! - Map identity names to identity records durably.
//! - Hold the durable "current identity" pointer used to restore sessions.
//!
//! # Invariants
//! - Every call is durable when it returns; there is no batching.
//! - A failed write leaves the previously stored document untouched.
//! - Failures are surfaced, never retried.

use crate::model::identity::IdentityRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite_store;

pub use sqlite_store::SqliteIdentityStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage failure. Treated as fatal by callers.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// Database file was migrated by a newer planner build.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    /// Stored document could not be encoded or decoded.
    Corrupt(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "store unavailable: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "planner database is at schema version {found}, this build reads up to {supported}"
            ),
            Self::Corrupt(err) => write!(f, "store document is corrupt: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Corrupt(value)
    }
}

/// Durable name -> record mapping plus the current-identity pointer.
pub trait IdentityStore {
    fn get(&self, name: &str) -> StoreResult<Option<IdentityRecord>>;
    fn set(&self, name: &str, record: &IdentityRecord) -> StoreResult<()>;
    fn current_name(&self) -> StoreResult<Option<String>>;
    fn set_current_name(&self, name: Option<&str>) -> StoreResult<()>;

    fn contains(&self, name: &str) -> StoreResult<bool> {
        Ok(self.get(name)?.is_some())
    }
}
