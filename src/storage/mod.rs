//! `SQLite` storage layer for `dojang`.
//!
//! # Submodules
//!
//! - [`schema`] - Database schema definition
//! - [`sqlite`] - The [`Database`] handle and its statement primitives
//! - [`topics`] - Stored format of a class's training-topic list

pub mod schema;
pub mod sqlite;
pub mod topics;

pub use sqlite::{Ack, Database};
