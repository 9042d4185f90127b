//! Roster access.

use crate::error::Result;
use crate::model::{NewStudent, Student};
use crate::storage::Database;
use crate::storage::sqlite::timestamp_column;
use rusqlite::{Row, params};
use tracing::info;

pub(crate) const STUDENT_COLUMNS: &str = "id, full_name, belt, notes, joined_at";

/// Typed access to the `students` table.
#[derive(Debug, Clone, Copy)]
pub struct StudentRepository<'a> {
    db: &'a Database,
}

impl<'a> StudentRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All students ordered by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is rejected.
    pub fn list(&self) -> Result<Vec<Student>> {
        self.db.query(
            &format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY full_name COLLATE NOCASE"),
            [],
            student_from_row,
        )
    }

    /// Look up one student.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is rejected.
    pub fn find(&self, id: i64) -> Result<Option<Student>> {
        self.db.query_optional(
            &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?"),
            params![id],
            student_from_row,
        )
    }

    /// Insert a student and return its id. The join timestamp is assigned by
    /// the store.
    ///
    /// Every field is trimmed and blank optional fields are stored as NULL.
    /// No validation happens here: an empty `full_name` is inserted as-is, so
    /// callers must run their own presence check first.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert is rejected.
    pub fn create(&self, student: &NewStudent) -> Result<i64> {
        let full_name = student.full_name.trim();
        let ack = self.db.execute(
            "INSERT INTO students (full_name, belt, notes) VALUES (?, ?, ?)",
            params![
                full_name,
                trimmed(student.belt.as_deref()),
                trimmed(student.notes.as_deref()),
            ],
        )?;
        info!(student_id = ack.last_insert_id, full_name = %full_name, "Student created");
        Ok(ack.last_insert_id)
    }
}

/// Map the leading [`STUDENT_COLUMNS`] of a row.
pub(crate) fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        full_name: row.get(1)?,
        belt: row.get(2)?,
        notes: row.get(3)?,
        joined_at: timestamp_column(row, 4)?,
    })
}

pub(crate) fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
