use parcel_core::db::migrations::{current_user_version, latest_version};
use parcel_core::db::{open_db, open_db_in_memory, DbError};
use parcel_core::{Parcel, ParcelRepository, SqliteParcelRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "parcel");
}

#[test]
fn opening_same_database_twice_is_idempotent_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.db");

    let conn_first = open_db(&path).unwrap();
    let number = SqliteParcelRepository::try_new(&conn_first)
        .unwrap()
        .add_parcel(&Parcel::with_created_at(7, "dock 4", "2024-05-01T12:00:00Z"))
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(current_user_version(&conn_second).unwrap(), latest_version());

    let repo = SqliteParcelRepository::try_new(&conn_second).unwrap();
    let stored = repo.get_parcel(number).unwrap();
    assert_eq!(stored.address, "dock 4");
    assert_eq!(stored.created_at, "2024-05-01T12:00:00Z");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
