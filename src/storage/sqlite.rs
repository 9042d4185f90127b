//! `SQLite` storage engine.
//!
//! [`Database`] owns the one live connection to the school database. A
//! handle can only be obtained through [`Database::open`] or
//! [`Database::open_in_memory`], both of which apply the schema first, so a
//! store that failed to initialize never reaches a repository.

use crate::error::{DojangError, Result};
use crate::storage::schema::apply_schema;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Location reported for in-memory databases.
const MEMORY_PATH: &str = ":memory:";

/// Acknowledgment returned by [`Database::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub rows_affected: usize,
    /// Row id of the most recent successful insert on this connection.
    pub last_insert_id: i64,
}

/// SQLite-backed store shared by every repository.
#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl Database {
    /// Open (or create) the database file at `path` and apply the schema.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`DojangError::Initialization`] if the file cannot be opened or
    /// the schema cannot be applied.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|err| DojangError::initialization(path, err))?;
        }

        let conn =
            Connection::open(path).map_err(|err| DojangError::initialization(path, err))?;
        Self::from_connection(conn, path.to_path_buf())
    }

    /// Open an in-memory database for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|err| DojangError::initialization(MEMORY_PATH, err))?;
        Self::from_connection(conn, PathBuf::from(MEMORY_PATH))
    }

    fn from_connection(conn: Connection, path: PathBuf) -> Result<Self> {
        let db = Self {
            conn: Mutex::new(conn),
            path,
        };
        db.initialize()?;
        Ok(db)
    }

    /// Ensure the three tables and their constraints exist.
    ///
    /// Idempotent; [`Database::open`] already calls it, but calling it again on
    /// a live handle is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`DojangError::Initialization`] if the schema cannot be applied.
    pub fn initialize(&self) -> Result<()> {
        let mut conn = self.lock();
        apply_schema(&mut conn).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "Schema setup failed");
            DojangError::initialization(&self.path, err)
        })?;
        debug!(path = %self.path.display(), "Database initialized");
        Ok(())
    }

    /// Where the database lives (`:memory:` for in-memory stores).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one parameterized write statement.
    ///
    /// # Errors
    ///
    /// Returns [`DojangError::Execution`] on constraint violations (unique
    /// pair, dangling foreign key) or malformed SQL.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<Ack> {
        let conn = self.lock();
        debug!(sql = %compact(sql), "execute");
        let rows_affected = conn
            .execute(sql, params)
            .map_err(|err| rejected(sql, err))?;
        Ok(Ack {
            rows_affected,
            last_insert_id: conn.last_insert_rowid(),
        })
    }

    /// Run one parameterized read and map every row.
    ///
    /// # Errors
    ///
    /// Returns [`DojangError::Execution`] if the statement is rejected or a
    /// row cannot be mapped.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.lock();
        debug!(sql = %compact(sql), "query");
        let mut stmt = conn.prepare(sql).map_err(|err| rejected(sql, err))?;
        let rows = stmt
            .query_map(params, map)
            .map_err(|err| rejected(sql, err))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|err| rejected(sql, err))?;
        Ok(rows)
    }

    /// Run one parameterized read expected to match at most one row.
    ///
    /// # Errors
    ///
    /// Returns [`DojangError::Execution`] if the statement is rejected.
    pub fn query_optional<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.lock();
        debug!(sql = %compact(sql), "query_optional");
        conn.query_row(sql, params, map)
            .optional()
            .map_err(|err| rejected(sql, err))
    }

    // A panic while holding the lock cannot leave the connection half-written:
    // every statement is atomic on the SQLite side.
    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn rejected(sql: &str, err: rusqlite::Error) -> DojangError {
    warn!(sql = %compact(sql), error = %err, "Statement rejected");
    DojangError::Execution(err)
}

/// Collapse whitespace so multi-line SQL fits on one log line.
fn compact(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read a `CURRENT_TIMESTAMP` column (`YYYY-MM-DD HH:MM:SS`, UTC).
///
/// RFC 3339 text is accepted too. NULL reads as `None`; so does text in any
/// other shape, which is logged, so one odd row never hides the rest of a
/// listing.
pub(crate) fn timestamp_column(
    row: &Row<'_>,
    idx: usize,
) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    Ok(raw.and_then(|raw| match parse_timestamp(&raw) {
        Ok(ts) => Some(ts),
        Err(err) => {
            warn!(column = idx, value = %raw, error = %err, "Unreadable timestamp");
            None
        }
    }))
}

fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")?;
    Ok(Utc.from_utc_datetime(&naive))
}
