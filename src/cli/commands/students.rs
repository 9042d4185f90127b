//! Student command implementation.
//!
//! Provides roster management: list and add.

use crate::cli::{StudentAddArgs, StudentCommands};
use crate::error::{DojangError, Result};
use crate::format::{OutputContext, format_student_line};
use crate::model::NewStudent;
use crate::repository::StudentRepository;
use crate::storage::Database;
use tracing::debug;

/// Execute the students command.
///
/// # Errors
///
/// Returns an error if validation fails or the store rejects the operation.
pub fn execute(command: &StudentCommands, db: &Database, ctx: &OutputContext) -> Result<()> {
    let repo = StudentRepository::new(db);
    match command {
        StudentCommands::List => list(&repo, ctx),
        StudentCommands::Add(args) => add(args, &repo, ctx),
    }
}

fn list(repo: &StudentRepository<'_>, ctx: &OutputContext) -> Result<()> {
    let students = repo.list()?;
    debug!(count = students.len(), "Loaded students");

    if ctx.is_json() {
        ctx.json_pretty(&students)?;
    } else if students.is_empty() {
        ctx.line("No students yet. Add one with `dojang students add <name>`.");
    } else {
        for student in &students {
            ctx.line(format_student_line(student));
        }
    }
    Ok(())
}

/// Presence check done before anything reaches the store.
pub(crate) fn validate(args: &StudentAddArgs) -> Result<NewStudent> {
    if args.full_name.trim().is_empty() {
        return Err(DojangError::validation(
            "full_name",
            "The student's name is required.",
        ));
    }
    Ok(NewStudent {
        full_name: args.full_name.clone(),
        belt: args.belt.clone(),
        notes: args.notes.clone(),
    })
}

fn add(args: &StudentAddArgs, repo: &StudentRepository<'_>, ctx: &OutputContext) -> Result<()> {
    let new_student = validate(args)?;
    let id = repo.create(&new_student)?;
    let student = repo
        .find(id)?
        .ok_or(DojangError::NotFound { entity: "student", id })?;

    if ctx.is_json() {
        ctx.json_pretty(&student)?;
    } else {
        ctx.success(format!("Student saved: {}", format_student_line(&student)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> StudentAddArgs {
        StudentAddArgs {
            full_name: name.to_string(),
            belt: Some(" Amarillo ".to_string()),
            notes: None,
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate(&args("   ")).unwrap_err();
        assert!(matches!(err, DojangError::Validation { ref field, .. } if field == "full_name"));
    }

    #[test]
    fn valid_input_passes_through_untrimmed() {
        let student = validate(&args(" Ana López ")).unwrap();
        assert_eq!(student.full_name, " Ana López ");
        assert_eq!(student.belt.as_deref(), Some(" Amarillo "));
    }

    #[test]
    fn add_then_list() {
        let db = Database::open_in_memory().unwrap();
        let ctx = OutputContext::from_flags(false, true);
        execute(&StudentCommands::Add(args("Ana López")), &db, &ctx).unwrap();
        execute(&StudentCommands::List, &db, &ctx).unwrap();

        let students = StudentRepository::new(&db).list().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].belt.as_deref(), Some("Amarillo"));
    }

    #[test]
    fn rejected_add_writes_nothing() {
        let db = Database::open_in_memory().unwrap();
        let ctx = OutputContext::from_flags(false, true);
        assert!(execute(&StudentCommands::Add(args("")), &db, &ctx).is_err());
        assert!(StudentRepository::new(&db).list().unwrap().is_empty());
    }
}
