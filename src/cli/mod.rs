//! Command-line interface definitions.

use crate::config::CliOverrides;
use crate::error::Action;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Classes, roster and attendance for a martial-arts school.
#[derive(Parser, Debug)]
#[command(name = "dojang", version, propagate_version = true)]
pub struct Cli {
    /// Database file (overrides DOJANG_DB and config files)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            db: self.db.clone(),
            json: self.json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the student roster
    #[command(subcommand)]
    Students(StudentCommands),

    /// Manage class sessions
    #[command(subcommand)]
    Classes(ClassCommands),

    /// Take attendance for a class
    #[command(subcommand)]
    Attendance(AttendanceCommands),
}

impl Commands {
    /// What the command is trying to do, for user-facing failure messages.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Students(StudentCommands::List) => Action::LoadStudents,
            Self::Students(StudentCommands::Add(_)) => Action::SaveStudent,
            Self::Classes(ClassCommands::List | ClassCommands::Show { .. }) => Action::LoadClasses,
            Self::Classes(ClassCommands::Add(_)) => Action::SaveClass,
            Self::Attendance(AttendanceCommands::Show { .. }) => Action::LoadAttendance,
            Self::Attendance(AttendanceCommands::Mark(_) | AttendanceCommands::Unmark(_)) => {
                Action::SaveAttendance
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// List students by name
    List,
    /// Add a student
    Add(StudentAddArgs),
}

#[derive(Args, Debug)]
pub struct StudentAddArgs {
    /// Full name (required)
    pub full_name: String,

    /// Belt or rank
    #[arg(long, short = 'b')]
    pub belt: Option<String>,

    /// Free-text notes
    #[arg(long, short = 'n')]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ClassCommands {
    /// List classes, most recent first
    List,
    /// Schedule a class
    Add(ClassAddArgs),
    /// Show one class with its training topics
    Show {
        /// Class id
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct ClassAddArgs {
    /// Class title (required)
    pub title: String,

    /// Longer description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Class date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Training topic; repeat for several, order is kept
    #[arg(long = "training", short = 't', value_name = "TOPIC")]
    pub trainings: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum AttendanceCommands {
    /// Show the attendance sheet for a class
    Show {
        /// Class id (defaults to the most recent class)
        class_id: Option<i64>,
    },
    /// Mark students present
    Mark(MarkArgs),
    /// Mark students absent
    Unmark(MarkArgs),
}

#[derive(Args, Debug)]
pub struct MarkArgs {
    /// Class id
    pub class_id: i64,

    /// Student ids
    #[arg(required = true)]
    pub student_ids: Vec<i64>,
}
