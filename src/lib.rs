//! `dojang` - class, roster and attendance records for a martial-arts school.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`storage`] - `SQLite` database handle, schema and topic-list format
//! - [`repository`] - Typed access to students, classes and attendance
//! - [`model`] - Record types
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use dojang::model::{NewClass, NewStudent};
//! use dojang::repository::{AttendanceRepository, ClassRepository, StudentRepository};
//! use dojang::storage::Database;
//!
//! let db = Database::open_in_memory()?;
//! let ana = StudentRepository::new(&db).create(&NewStudent::new("Ana López"))?;
//! let class = ClassRepository::new(&db).create(&NewClass::new("Clase Lunes", "2024-01-08"))?;
//!
//! let attendance = AttendanceRepository::new(&db);
//! attendance.set_status(class, ana, true)?;
//! assert!(attendance.for_class(class)?[0].present);
//! # Ok::<(), dojang::DojangError>(())
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod repository;
pub mod storage;

pub use error::{Action, DojangError, Result};
