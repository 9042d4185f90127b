//! Class sessions and their planned training topics.

use crate::error::{DojangError, Result};
use crate::model::{NewClass, TrainingClass};
use crate::repository::students::trimmed;
use crate::storage::Database;
use crate::storage::sqlite::timestamp_column;
use crate::storage::topics;
use chrono::{DateTime, Utc};
use rusqlite::{Row, params};
use tracing::info;

const CLASS_COLUMNS: &str = "id, title, description, class_date, trainings, created_at";

/// A `classes` row before its topic list is decoded.
struct ClassRow {
    id: i64,
    title: String,
    description: Option<String>,
    class_date: String,
    trainings: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl ClassRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            class_date: row.get(3)?,
            trainings: row.get(4)?,
            created_at: timestamp_column(row, 5)?,
        })
    }

    fn into_class(self) -> Result<TrainingClass> {
        let trainings = topics::decode(self.trainings.as_deref()).map_err(|reason| {
            DojangError::CorruptTopics {
                class_id: self.id,
                reason,
            }
        })?;
        Ok(TrainingClass {
            id: self.id,
            title: self.title,
            description: self.description,
            class_date: self.class_date,
            trainings,
            created_at: self.created_at,
        })
    }
}

/// Typed access to the `classes` table.
#[derive(Debug, Clone, Copy)]
pub struct ClassRepository<'a> {
    db: &'a Database,
}

impl<'a> ClassRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All classes, most recent date first. Classes sharing a date are
    /// ordered newest insert first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is rejected or a stored topic list is
    /// corrupt.
    pub fn list(&self) -> Result<Vec<TrainingClass>> {
        self.db
            .query(
                &format!("SELECT {CLASS_COLUMNS} FROM classes ORDER BY class_date DESC, id DESC"),
                [],
                ClassRow::from_row,
            )?
            .into_iter()
            .map(ClassRow::into_class)
            .collect()
    }

    /// Look up one class.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is rejected or its topic list is corrupt.
    pub fn find(&self, id: i64) -> Result<Option<TrainingClass>> {
        self.db
            .query_optional(
                &format!("SELECT {CLASS_COLUMNS} FROM classes WHERE id = ?"),
                params![id],
                ClassRow::from_row,
            )?
            .map(ClassRow::into_class)
            .transpose()
    }

    /// Insert a class and return its id.
    ///
    /// Title and description are trimmed; topics are stored in the given
    /// order. The date and the topic contents are not validated here.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert is rejected.
    pub fn create(&self, class: &NewClass) -> Result<i64> {
        let title = class.title.trim();
        let ack = self.db.execute(
            "INSERT INTO classes (title, description, class_date, trainings) VALUES (?, ?, ?, ?)",
            params![
                title,
                trimmed(class.description.as_deref()),
                class.class_date,
                topics::encode(&class.trainings),
            ],
        )?;
        info!(
            class_id = ack.last_insert_id,
            title = %title,
            class_date = %class.class_date,
            topics = class.trainings.len(),
            "Class created"
        );
        Ok(ack.last_insert_id)
    }
}
