//! Error types for `dojang`.
//!
//! The storage layer only ever produces two kinds of failure:
//! [`DojangError::Initialization`] (the database could not be opened or the
//! schema could not be applied) and [`DojangError::Execution`] (one statement
//! was rejected). The remaining variants belong to the command-line shell and
//! the ambient configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = DojangError> = std::result::Result<T, E>;

/// Primary error type.
#[derive(Error, Debug)]
pub enum DojangError {
    /// The store could not be prepared. Nothing can run without it.
    #[error("Failed to initialize database at {path}: {source}")]
    Initialization {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A single statement was rejected (constraint violation, malformed SQL).
    #[error("Statement rejected: {0}")]
    Execution(#[from] rusqlite::Error),

    /// A stored training-topic list could not be decoded.
    #[error("Corrupt training list for class {class_id}: {reason}")]
    CorruptTopics { class_id: i64, reason: String },

    /// Input failed a presence check before reaching the store.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DojangError {
    pub(crate) fn initialization(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Initialization {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Build a validation error for a named input field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure is fatal to the whole application.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Initialization { .. })
    }

    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_fatal() { 2 } else { 1 }
    }

    /// Message suitable for showing to the person at the keyboard.
    ///
    /// Storage failures collapse into a generic "could not load/save" line;
    /// the detailed cause goes to the log instead.
    #[must_use]
    pub fn user_message(&self, action: Action) -> String {
        match self {
            Self::Initialization { .. } => "Could not prepare the database.".to_string(),
            Self::Validation { reason, .. } => reason.clone(),
            Self::NotFound { entity, id } => format!("No {entity} with id {id}."),
            Self::Execution(_)
            | Self::CorruptTopics { .. }
            | Self::Io(_)
            | Self::Yaml(_)
            | Self::Json(_) => action.failure_message().to_string(),
        }
    }
}

/// What the caller was trying to do when an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadStudents,
    SaveStudent,
    LoadClasses,
    SaveClass,
    LoadAttendance,
    SaveAttendance,
}

impl Action {
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::LoadStudents => "Could not load the students. Try again.",
            Self::SaveStudent => "Could not save the student.",
            Self::LoadClasses => "Could not load the classes. Try again.",
            Self::SaveClass => "Could not save the class. Try again.",
            Self::LoadAttendance => "Could not load the attendance.",
            Self::SaveAttendance => "Could not save the attendance.",
        }
    }
}
