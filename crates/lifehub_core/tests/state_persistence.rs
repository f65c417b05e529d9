use chrono::{Duration, NaiveDate, NaiveDateTime};
use lifehub_core::db::{latest_version, open_db, open_db_in_memory, schema_version, DbError};
use lifehub_core::{
    Clock, DashboardServices, FixedClock, FocusSessionKind, InMemoryPersistence, Note,
    PersistenceStore, SqlitePersistence, StateSnapshot, StoreError, TaskItem, STATE_KEY,
};
use rusqlite::Connection;
use std::sync::Arc;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

#[test]
fn open_db_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn store_rejects_unmigrated_connection() {
    let raw = Connection::open_in_memory().unwrap();
    let result = SqlitePersistence::try_new(&raw);
    assert!(matches!(
        result,
        Err(StoreError::Db(DbError::SchemaNotReady { found: 0, .. }))
    ));
}

#[test]
fn sqlite_store_upserts_and_reports_missing_keys() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqlitePersistence::try_new(&conn).unwrap();

    assert_eq!(store.load("missing").unwrap(), None);

    store.save("b", "{\"v\":1}").unwrap();
    store.save("a", "[]").unwrap();
    store.save("b", "{\"v\":2}").unwrap();

    assert_eq!(store.load("b").unwrap().as_deref(), Some("{\"v\":2}"));
    assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn in_memory_store_is_last_write_wins() {
    let mut store = InMemoryPersistence::new();
    store.save(STATE_KEY, "one").unwrap();
    store.save(STATE_KEY, "two").unwrap();
    assert_eq!(store.load(STATE_KEY).unwrap().as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn corrupt_state_surfaces_serialization_error() {
    let clock = Arc::new(FixedClock::new(morning()));
    let mut services = DashboardServices::local(clock);
    let mut store = InMemoryPersistence::new();
    store.save(STATE_KEY, "{not json").unwrap();

    let result = services.restore_state(&store);
    assert!(matches!(result, Err(StoreError::Serialization(_))));
    assert_eq!(services.tasks.all_tasks().len(), 3);
}

#[test]
fn restore_without_saved_state_keeps_services() {
    let clock = Arc::new(FixedClock::new(morning()));
    let mut services = DashboardServices::local(clock);
    let store = InMemoryPersistence::new();

    assert!(!services.restore_state(&store).unwrap());
    assert_eq!(services.tasks.all_tasks().len(), 3);
    assert_eq!(services.calendar.all_events().len(), 3);
}

#[test]
fn state_survives_reopening_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lifehub.sqlite3");
    let clock = Arc::new(FixedClock::new(morning()));

    let saved = {
        let mut services = DashboardServices::local(clock.clone());
        services
            .tasks
            .add_task(TaskItem::new("Call the bank", clock.now()));
        services
            .notes
            .create_note(Note::new("Remember the milk", clock.now()));
        let session = services.focus.start_session(FocusSessionKind::Focus, 25);
        clock.advance(Duration::minutes(25));
        services.focus.end_session(session.id, true);

        let conn = open_db(&db_path).unwrap();
        let mut store = SqlitePersistence::try_new(&conn).unwrap();
        services.save_state(&mut store).unwrap();
        services.snapshot()
    };

    let conn = open_db(&db_path).unwrap();
    let store = SqlitePersistence::try_new(&conn).unwrap();
    let mut restored = DashboardServices::empty(clock.clone());
    assert!(restored.restore_state(&store).unwrap());

    assert_eq!(restored.tasks.all_tasks(), saved.tasks);
    assert_eq!(restored.calendar.all_events(), saved.events);
    assert_eq!(restored.notes.all_notes(), saved.notes);
    assert_eq!(restored.focus.all_sessions(), saved.focus_sessions);
    assert_eq!(restored.focus.today_focus_minutes(), 25);

    let json = store.load(STATE_KEY).unwrap().unwrap();
    let snapshot = StateSnapshot::from_json(&json).unwrap();
    assert_eq!(snapshot.tasks.len(), 4);
}
