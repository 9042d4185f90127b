//! Attendance sheets and marks.
//!
//! A (class, student) pair is in one of two states: no stored mark, which
//! reads as absent, or a stored mark carrying an explicit flag. Only
//! [`AttendanceRepository::set_status`] moves a pair between states; reading
//! never creates a row.

use crate::error::Result;
use crate::model::{AttendanceEntry, AttendanceMark};
use crate::repository::students::student_from_row;
use crate::storage::Database;
use crate::storage::sqlite::timestamp_column;
use rusqlite::params;
use tracing::info;

/// Typed access to the `attendance` table.
#[derive(Debug, Clone, Copy)]
pub struct AttendanceRepository<'a> {
    db: &'a Database,
}

impl<'a> AttendanceRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// The full roster for a class with each student's presence.
    ///
    /// Every student appears, marked or not; unmarked students are absent.
    /// Ordered by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is rejected.
    pub fn for_class(&self, class_id: i64) -> Result<Vec<AttendanceEntry>> {
        self.db.query(
            "SELECT s.id, s.full_name, s.belt, s.notes, s.joined_at,
                    COALESCE(a.present, 0) AS present
               FROM students s
               LEFT JOIN attendance a ON a.student_id = s.id AND a.class_id = ?
              ORDER BY s.full_name COLLATE NOCASE",
            params![class_id],
            |row| {
                Ok(AttendanceEntry {
                    student: student_from_row(row)?,
                    present: row.get(5)?,
                })
            },
        )
    }

    /// Record whether a student attended a class.
    ///
    /// Inserts the mark or overwrites the flag of the existing one and
    /// refreshes its timestamp, in a single statement guarded by the
    /// `UNIQUE(class_id, student_id)` constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if either id does not exist (foreign key) or the
    /// statement is otherwise rejected.
    pub fn set_status(&self, class_id: i64, student_id: i64, present: bool) -> Result<()> {
        self.db.execute(
            "INSERT INTO attendance (class_id, student_id, present, updated_at)
             VALUES (?, ?, ?, CURRENT_TIMESTAMP)
             ON CONFLICT(class_id, student_id) DO UPDATE SET
               present = excluded.present,
               updated_at = CURRENT_TIMESTAMP",
            params![class_id, student_id, present],
        )?;
        info!(class_id, student_id, present, "Attendance updated");
        Ok(())
    }

    /// The stored mark for a pair, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is rejected.
    pub fn mark(&self, class_id: i64, student_id: i64) -> Result<Option<AttendanceMark>> {
        self.db.query_optional(
            "SELECT id, class_id, student_id, present, updated_at
               FROM attendance
              WHERE class_id = ? AND student_id = ?",
            params![class_id, student_id],
            |row| {
                Ok(AttendanceMark {
                    id: row.get(0)?,
                    class_id: row.get(1)?,
                    student_id: row.get(2)?,
                    present: row.get(3)?,
                    updated_at: timestamp_column(row, 4)?,
                })
            },
        )
    }
}
