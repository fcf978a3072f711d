use chrono::NaiveDate;
use planner_core::db::{open_db, open_db_in_memory};
use planner_core::{
    Event, IdentityRecord, IdentityStore, SqliteIdentityStore, StoreError, Task, Theme,
};
use uuid::Uuid;

fn sample_record() -> IdentityRecord {
    let mut record = IdentityRecord::new("pw1");
    record.events.push(Event {
        id: Uuid::new_v4(),
        title: "Dentist".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        time: Some("09:30".to_string()),
        category: Some("health".to_string()),
        description: None,
    });
    record.tasks.push(Task {
        id: Uuid::new_v4(),
        title: "Buy milk".to_string(),
        due: None,
        description: None,
        done: false,
    });
    record
}

fn stored_document(conn: &rusqlite::Connection) -> String {
    conn.query_row(
        "SELECT value FROM kv_entries WHERE key = 'identities';",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn get_returns_none_for_unknown_identity() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);

    assert!(store.get("nobody").unwrap().is_none());
    assert!(!store.contains("nobody").unwrap());
}

#[test]
fn set_then_get_returns_same_record() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);
    let record = sample_record();

    store.set("alice", &record).unwrap();

    assert_eq!(store.get("alice").unwrap(), Some(record));
}

#[test]
fn names_are_case_sensitive_and_independent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);

    store.set("alice", &sample_record()).unwrap();
    store.set("Alice", &IdentityRecord::new("other")).unwrap();

    assert_eq!(store.get("alice").unwrap().unwrap().events.len(), 1);
    assert!(store.get("Alice").unwrap().unwrap().events.is_empty());
    assert!(store.get("ALICE").unwrap().is_none());
}

#[test]
fn current_name_can_be_set_and_cleared() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);

    assert_eq!(store.current_name().unwrap(), None);
    store.set_current_name(Some("alice")).unwrap();
    assert_eq!(store.current_name().unwrap().as_deref(), Some("alice"));
    store.set_current_name(None).unwrap();
    assert_eq!(store.current_name().unwrap(), None);

    // Clearing twice is harmless.
    store.set_current_name(None).unwrap();
}

#[test]
fn writes_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.db");
    let record = sample_record();

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteIdentityStore::new(&conn);
        store.set("alice", &record).unwrap();
        store.set_current_name(Some("alice")).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteIdentityStore::new(&conn);
    assert_eq!(store.get("alice").unwrap(), Some(record));
    assert_eq!(store.current_name().unwrap().as_deref(), Some("alice"));
}

#[test]
fn document_is_plain_json_keyed_by_name() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteIdentityStore::new(&conn);
    let record = sample_record();
    store.set("alice", &record).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stored_document(&conn)).unwrap();

    assert_eq!(value["alice"]["credential"], "pw1");
    assert_eq!(value["alice"]["settings"]["theme"], "dark");
    assert_eq!(value["alice"]["events"][0]["date"], "2025-06-03");
    assert_eq!(value["alice"]["events"][0]["time"], "09:30");
    assert_eq!(value["alice"]["tasks"][0]["done"], false);
}

#[test]
fn corrupt_document_surfaces_as_store_error_without_overwrite() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES ('identities', '{not json');",
        [],
    )
    .unwrap();
    let store = SqliteIdentityStore::new(&conn);

    let err = store.get("alice").unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));

    let write_err = store.set("alice", &IdentityRecord::new("pw1")).unwrap_err();
    assert!(matches!(write_err, StoreError::Corrupt(_)));
    assert_eq!(stored_document(&conn), "{not json");
}

#[test]
fn theme_defaults_to_dark_for_new_records() {
    assert_eq!(IdentityRecord::new("pw").settings.theme, Theme::Dark);
}
