//! Typed repositories over the [`Database`](crate::storage::Database).
//!
//! Each repository borrows the shared handle and translates one table to and
//! from the records in [`crate::model`]. They perform no input validation.

pub mod attendance;
pub mod classes;
pub mod students;

pub use attendance::AttendanceRepository;
pub use classes::ClassRepository;
pub use students::StudentRepository;
