//! Records stored by the school: students, training classes and attendance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    /// Belt or rank label, e.g. "Cinturón amarillo".
    pub belt: Option<String>,
    pub notes: Option<String>,
    /// Assigned by the store on insert and never changed afterwards. `None`
    /// when the stored value is missing or unreadable.
    pub joined_at: Option<DateTime<Utc>>,
}

/// A scheduled class session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingClass {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Calendar date as entered (`YYYY-MM-DD`). Stored as text and sorted
    /// lexically, which matches chronological order for that format.
    pub class_date: String,
    /// Planned drills or techniques, in the order they were added.
    pub trainings: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A stored attendance decision for one student in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub present: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One roster line of a class attendance sheet.
///
/// Students without a stored mark appear with `present == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student: Student,
    pub present: bool,
}

/// Input for [`crate::repository::StudentRepository::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub full_name: String,
    pub belt: Option<String>,
    pub notes: Option<String>,
}

impl NewStudent {
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn belt(mut self, belt: impl Into<String>) -> Self {
        self.belt = Some(belt.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Input for [`crate::repository::ClassRepository::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClass {
    pub title: String,
    pub description: Option<String>,
    pub class_date: String,
    pub trainings: Vec<String>,
}

impl NewClass {
    #[must_use]
    pub fn new(title: impl Into<String>, class_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            class_date: class_date.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn trainings<I, S>(mut self, trainings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trainings = trainings.into_iter().map(Into::into).collect();
        self
    }
}
