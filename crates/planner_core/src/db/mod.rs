//! SQLite bootstrap for the planner store.
//!
//! The schema is a single `kv_entries` table; identity data lives in JSON
//! values written by [`crate::store::SqliteIdentityStore`]. Connections are
//! only handed out after `PRAGMA user_version` has caught up with
//! [`migrations::latest_version`]. Failures surface as [`crate::store::StoreError`].

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
