//! Attendance command implementation.
//!
//! `show` prints the whole roster for a class with each student's presence,
//! opening on the most recent class when no id is given; `mark` and `unmark`
//! record it.

use crate::cli::{AttendanceCommands, MarkArgs};
use crate::error::{DojangError, Result};
use crate::format::{
    OutputContext, format_attendance_line, format_attendance_summary, format_class_details,
};
use crate::model::{AttendanceEntry, TrainingClass};
use crate::repository::{AttendanceRepository, ClassRepository, StudentRepository};
use crate::storage::Database;
use serde::Serialize;
use tracing::{debug, info};

/// JSON output for `attendance show`.
#[derive(Serialize)]
struct AttendanceSheet<'a> {
    class: Option<&'a TrainingClass>,
    entries: &'a [AttendanceEntry],
}

/// JSON output for `attendance mark` / `unmark`.
#[derive(Serialize)]
struct MarkResult<'a> {
    class_id: i64,
    student_id: i64,
    full_name: &'a str,
    present: bool,
}

/// Execute the attendance command.
///
/// # Errors
///
/// Returns an error if the class or a student does not exist, or the store
/// rejects the operation.
pub fn execute(command: &AttendanceCommands, db: &Database, ctx: &OutputContext) -> Result<()> {
    match command {
        AttendanceCommands::Show { class_id } => show(*class_id, db, ctx),
        AttendanceCommands::Mark(args) => set(args, true, db, ctx),
        AttendanceCommands::Unmark(args) => set(args, false, db, ctx),
    }
}

fn require_class(db: &Database, class_id: i64) -> Result<TrainingClass> {
    ClassRepository::new(db)
        .find(class_id)?
        .ok_or(DojangError::NotFound {
            entity: "class",
            id: class_id,
        })
}

/// The requested class, or the most recent one when none was named.
fn pick_class(db: &Database, class_id: Option<i64>) -> Result<Option<TrainingClass>> {
    match class_id {
        Some(id) => require_class(db, id).map(Some),
        None => Ok(ClassRepository::new(db).list()?.into_iter().next()),
    }
}

fn show(class_id: Option<i64>, db: &Database, ctx: &OutputContext) -> Result<()> {
    let Some(class) = pick_class(db, class_id)? else {
        debug!("No classes to take attendance for");
        if ctx.is_json() {
            ctx.json_pretty(&AttendanceSheet {
                class: None,
                entries: &[],
            })?;
        } else {
            ctx.line("No classes scheduled yet. Add one with `dojang classes add <title>`.");
        }
        return Ok(());
    };
    let entries = AttendanceRepository::new(db).for_class(class.id)?;
    debug!(class_id = class.id, students = entries.len(), "Loaded attendance");

    if ctx.is_json() {
        ctx.json_pretty(&AttendanceSheet {
            class: Some(&class),
            entries: &entries,
        })?;
        return Ok(());
    }

    ctx.line(format_class_details(&class).trim_end());
    ctx.line("");
    if entries.is_empty() {
        ctx.line("No students yet. Add students to take attendance.");
        return Ok(());
    }
    for entry in &entries {
        ctx.line(format_attendance_line(entry));
    }
    ctx.line(format_attendance_summary(&entries));
    Ok(())
}

fn set(args: &MarkArgs, present: bool, db: &Database, ctx: &OutputContext) -> Result<()> {
    require_class(db, args.class_id)?;

    let students = StudentRepository::new(db);
    let attendance = AttendanceRepository::new(db);

    // Resolve every id before writing so a typo leaves no partial update.
    let mut resolved = Vec::with_capacity(args.student_ids.len());
    for &student_id in &args.student_ids {
        let student = students
            .find(student_id)?
            .ok_or(DojangError::NotFound {
                entity: "student",
                id: student_id,
            })?;
        resolved.push(student);
    }

    let mut results = Vec::with_capacity(resolved.len());
    for student in &resolved {
        attendance.set_status(args.class_id, student.id, present)?;
        results.push(MarkResult {
            class_id: args.class_id,
            student_id: student.id,
            full_name: &student.full_name,
            present,
        });
    }
    info!(class_id = args.class_id, count = results.len(), present, "Attendance saved");

    if ctx.is_json() {
        ctx.json_pretty(&results)?;
    } else {
        let state = if present { "present" } else { "absent" };
        for result in &results {
            ctx.success(format!("{} marked {state}", result.full_name));
        }
    }
    Ok(())
}
