//! Command implementations.
//!
//! Each command validates its input, calls the repositories, and renders the
//! result. Nothing is printed to stdout when a command fails; the caller turns
//! the error into a user-facing message.

pub mod attendance;
pub mod classes;
pub mod students;

use crate::cli::Commands;
use crate::error::Result;
use crate::format::OutputContext;
use crate::storage::Database;

/// Dispatch a parsed command against an initialized database.
///
/// # Errors
///
/// Returns the first validation or storage error the command hits.
pub fn execute(command: &Commands, db: &Database, ctx: &OutputContext) -> Result<()> {
    match command {
        Commands::Students(cmd) => students::execute(cmd, db, ctx),
        Commands::Classes(cmd) => classes::execute(cmd, db, ctx),
        Commands::Attendance(cmd) => attendance::execute(cmd, db, ctx),
    }
}
