//! SQLite-backed identity store.
//!
//! # Responsibility
//! - Keep all identity records in one JSON document under `identities`.
//! - Keep the signed-in identity name under `current_identity`.
//!
//! # Invariants
//! - `set` rewrites the whole document inside one immediate transaction.
//! - An absent `current_identity` row means "signed out".

use super::{IdentityStore, StoreResult};
use crate::model::identity::IdentityRecord;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::collections::BTreeMap;

const IDENTITIES_KEY: &str = "identities";
const CURRENT_IDENTITY_KEY: &str = "current_identity";

type IdentityMap = BTreeMap<String, IdentityRecord>;

/// Identity store over a migrated planner connection.
pub struct SqliteIdentityStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteIdentityStore<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl IdentityStore for SqliteIdentityStore<'_> {
    fn get(&self, name: &str) -> StoreResult<Option<IdentityRecord>> {
        let mut identities = load_map(self.conn)?;
        Ok(identities.remove(name))
    }

    fn set(&self, name: &str, record: &IdentityRecord) -> StoreResult<()> {
        // Store calls never nest, so no other transaction is open on `conn`.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let mut identities = load_map(&tx)?;
        identities.insert(name.to_string(), record.clone());
        let document = serde_json::to_string(&identities)?;
        write_entry(&tx, IDENTITIES_KEY, &document)?;
        if let Err(err) = tx.commit() {
            error!("event=store_write module=store status=error key={IDENTITIES_KEY} error={err}");
            return Err(err.into());
        }

        debug!(
            "event=store_write module=store status=ok key={IDENTITIES_KEY} events={} tasks={}",
            record.events.len(),
            record.tasks.len()
        );
        Ok(())
    }

    fn current_name(&self) -> StoreResult<Option<String>> {
        read_entry(self.conn, CURRENT_IDENTITY_KEY)
    }

    fn set_current_name(&self, name: Option<&str>) -> StoreResult<()> {
        match name {
            Some(name) => write_entry(self.conn, CURRENT_IDENTITY_KEY, name)?,
            None => {
                self.conn.execute(
                    "DELETE FROM kv_entries WHERE key = ?1;",
                    [CURRENT_IDENTITY_KEY],
                )?;
            }
        }
        debug!(
            "event=store_write module=store status=ok key={CURRENT_IDENTITY_KEY} signed_in={}",
            name.is_some()
        );
        Ok(())
    }
}

fn load_map(conn: &Connection) -> StoreResult<IdentityMap> {
    match read_entry(conn, IDENTITIES_KEY)? {
        Some(document) => Ok(serde_json::from_str(&document)?),
        None => Ok(IdentityMap::new()),
    }
}

fn read_entry(conn: &Connection, key: &str) -> StoreResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_entries WHERE key = ?1;",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

fn write_entry(conn: &Connection, key: &str, value: &str) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO kv_entries (key, value)
         VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = (strftime('%s', 'now') * 1000);",
        params![key, value],
    )?;
    Ok(())
}
