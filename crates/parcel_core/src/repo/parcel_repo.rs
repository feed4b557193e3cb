//! Parcel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate parcel use-cases into single-row statements on `parcel`.
//! - Map stored rows back to `Parcel`, rejecting undecodable data.
//!
//! # Invariants
//! - Address change and delete only apply to `registered` rows. The guard
//!   lives in the mutating statement itself, so there is no window between
//!   observing the status and acting on it.
//! - `get_parcel` reports a missing row as `NotFound`, never as a default
//!   value.
//! - `set_status` is unconditional and silent when no row matches.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_TABLE: &str = "parcel";
const PARCEL_COLUMNS: [&str; 5] = ["number", "client", "status", "address", "created_at"];

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from parcel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage engine failure (connection, syntax, constraint).
    Db(DbError),
    /// No parcel row carries this number.
    NotFound(ParcelNumber),
    /// The parcel exists but its status forbids the requested mutation.
    InvalidState {
        number: ParcelNumber,
        status: ParcelStatus,
    },
    /// Persisted row cannot be converted into a valid `Parcel`.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::InvalidState { number, status } => write!(
                f,
                "parcel {number} has status `{status}`; only registered parcels can be changed"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "parcel repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "parcel repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "parcel repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::InvalidState { .. }
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for parcel data access.
pub trait ParcelRepository {
    /// Inserts a parcel and returns the storage-assigned number.
    ///
    /// `parcel.number` is ignored.
    fn add_parcel(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;
    /// Gets one parcel by number.
    fn get_parcel(&self, number: ParcelNumber) -> RepoResult<Parcel>;
    /// Lists every parcel of a client. Order is not part of the contract.
    fn get_parcels_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>>;
    /// Overwrites the status without checking transition legality.
    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()>;
    /// Changes the address of a registered parcel.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;
    /// Deletes a registered parcel.
    fn delete_parcel(&self, number: ParcelNumber) -> RepoResult<()>;
}

/// SQLite-backed parcel repository over a caller-owned connection.
pub struct SqliteParcelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the `parcel` layout.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_parcel_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Explains why a guarded mutation matched no row.
    fn rejection(&self, number: ParcelNumber) -> RepoError {
        match self.get_parcel(number) {
            Ok(parcel) => RepoError::InvalidState {
                number,
                status: parcel.status,
            },
            Err(err) => err,
        }
    }
}

impl ParcelRepository for SqliteParcelRepository<'_> {
    fn add_parcel(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        self.conn.execute(
            "INSERT INTO parcel (
                client,
                status,
                address,
                created_at
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_parcel(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"))?;

        let mut rows = stmt.query([number])?;
        if let Some(row) = rows.next()? {
            return parse_parcel_row(row);
        }

        Err(RepoError::NotFound(number))
    }

    fn get_parcels_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PARCEL_SELECT_SQL} WHERE client = ?1 ORDER BY number ASC;"
        ))?;

        let mut rows = stmt.query([client])?;
        let mut parcels = Vec::new();
        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(row)?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2;",
            params![status.as_str(), number],
        )?;

        Ok(())
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel
             SET address = ?1
             WHERE number = ?2
               AND status = ?3;",
            params![address, number, ParcelStatus::Registered.as_str()],
        )?;

        if changed == 0 {
            return Err(self.rejection(number));
        }

        Ok(())
    }

    fn delete_parcel(&self, number: ParcelNumber) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM parcel
             WHERE number = ?1
               AND status = ?2;",
            params![number, ParcelStatus::Registered.as_str()],
        )?;

        if changed == 0 {
            return Err(self.rejection(number));
        }

        Ok(())
    }
}

fn parse_parcel_row(row: &Row<'_>) -> RepoResult<Parcel> {
    let number: ParcelNumber = row.get("number")?;

    let status_text: String = row.get("status")?;
    let status = ParcelStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in parcel.status for parcel {number}"
        ))
    })?;

    Ok(Parcel {
        number,
        client: row.get("client")?,
        status,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    })
}

fn ensure_parcel_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, PARCEL_TABLE)? {
        return Err(RepoError::MissingRequiredTable(PARCEL_TABLE));
    }

    let present = table_columns(conn, PARCEL_TABLE)?;
    if let Some(column) = PARCEL_COLUMNS
        .into_iter()
        .find(|column| !present.iter().any(|name| name.as_str() == *column))
    {
        return Err(RepoError::MissingRequiredColumn {
            table: PARCEL_TABLE,
            column,
        });
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
