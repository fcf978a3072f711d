use planner_core::db::migrations::latest_version;
use planner_core::db::{open_db, open_db_in_memory};
use planner_core::{IdentityRecord, IdentityStore, SqliteIdentityStore, StoreError};
use rusqlite::Connection;

#[test]
fn fresh_database_has_no_identities_and_no_session() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);

    assert_eq!(user_version(&conn), latest_version());
    assert_eq!(entry_count(&conn), 0);
    assert!(store.get("alice").unwrap().is_none());
    assert_eq!(store.current_name().unwrap(), None);
}

#[test]
fn unversioned_database_keeps_existing_identities() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE kv_entries (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT 0
        );
        INSERT INTO kv_entries (key, value)
        VALUES ('identities', '{\"alice\":{\"credential\":\"pw1\"}}'),
               ('current_identity', 'alice');",
    )
    .unwrap();
    assert_eq!(user_version(&conn), 0);
    drop(conn);

    for _ in 0..2 {
        let conn = open_db(&path).unwrap();
        let store = SqliteIdentityStore::new(&conn);

        assert_eq!(user_version(&conn), latest_version());
        let record = store.get("alice").unwrap().unwrap();
        assert_eq!(record.credential, "pw1");
        assert!(record.events.is_empty());
        assert_eq!(store.current_name().unwrap().as_deref(), Some("alice"));
    }
}

#[test]
fn rewriting_identities_replaces_the_row_and_bumps_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);
    store.set("alice", &IdentityRecord::new("pw1")).unwrap();
    conn.execute(
        "UPDATE kv_entries SET updated_at = 0 WHERE key = 'identities';",
        [],
    )
    .unwrap();

    store.set("alice", &IdentityRecord::new("pw2")).unwrap();

    let (rows, updated_at): (i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(updated_at) FROM kv_entries WHERE key = 'identities';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert!(updated_at > 0);
    assert_eq!(store.get("alice").unwrap().unwrap().credential, "pw2");
}

#[test]
fn newer_schema_is_refused_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        StoreError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(user_version(&conn), 999);
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE name = 'kv_entries';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn entry_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap()
}
