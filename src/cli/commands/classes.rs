//! Class command implementation.
//!
//! Provides class management: list, add and show.

use crate::cli::{ClassAddArgs, ClassCommands};
use crate::error::{DojangError, Result};
use crate::format::{OutputContext, format_class_details, format_class_line};
use crate::model::NewClass;
use crate::repository::ClassRepository;
use crate::storage::{Database, topics};
use chrono::{Local, NaiveDate};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Execute the classes command.
///
/// # Errors
///
/// Returns an error if validation fails or the store rejects the operation.
pub fn execute(command: &ClassCommands, db: &Database, ctx: &OutputContext) -> Result<()> {
    let repo = ClassRepository::new(db);
    match command {
        ClassCommands::List => list(&repo, ctx),
        ClassCommands::Add(args) => add(args, &repo, ctx),
        ClassCommands::Show { id } => show(*id, &repo, ctx),
    }
}

fn list(repo: &ClassRepository<'_>, ctx: &OutputContext) -> Result<()> {
    let classes = repo.list()?;
    debug!(count = classes.len(), "Loaded classes");

    if ctx.is_json() {
        ctx.json_pretty(&classes)?;
    } else if classes.is_empty() {
        ctx.line("No classes scheduled yet. Add one with `dojang classes add <title>`.");
    } else {
        for class in &classes {
            ctx.line(format_class_line(class));
        }
    }
    Ok(())
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Presence checks plus the calendar-date check, done before the store.
pub(crate) fn validate(args: &ClassAddArgs) -> Result<NewClass> {
    if args.title.trim().is_empty() {
        return Err(DojangError::validation("title", "The class needs a title."));
    }

    let class_date = match args.date.as_deref().map(str::trim) {
        None => today(),
        Some("") => {
            return Err(DojangError::validation(
                "class_date",
                "Enter a date for the class.",
            ));
        }
        Some(date) => {
            NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
                DojangError::validation(
                    "class_date",
                    format!("'{date}' is not a date; use YYYY-MM-DD."),
                )
            })?;
            date.to_string()
        }
    };

    Ok(NewClass {
        title: args.title.clone(),
        description: args.description.clone(),
        class_date,
        trainings: topics::normalize(&args.trainings),
    })
}

fn add(args: &ClassAddArgs, repo: &ClassRepository<'_>, ctx: &OutputContext) -> Result<()> {
    let new_class = validate(args)?;
    let id = repo.create(&new_class)?;
    let class = repo
        .find(id)?
        .ok_or(DojangError::NotFound { entity: "class", id })?;

    if ctx.is_json() {
        ctx.json_pretty(&class)?;
    } else {
        ctx.success(format!("Class saved: {}", format_class_line(&class)));
    }
    Ok(())
}

fn show(id: i64, repo: &ClassRepository<'_>, ctx: &OutputContext) -> Result<()> {
    let class = repo
        .find(id)?
        .ok_or(DojangError::NotFound { entity: "class", id })?;

    if ctx.is_json() {
        ctx.json_pretty(&class)?;
    } else {
        ctx.line(format_class_details(&class).trim_end());
    }
    Ok(())
}
