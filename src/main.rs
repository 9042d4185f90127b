use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use dojang::cli::{Cli, commands};
use dojang::config;
use dojang::format::OutputContext;
use dojang::logging::init_logging;
use dojang::storage::Database;
use tracing::{error, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Error: failed to initialize logging: {err:#}");
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Startup failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot read the working directory")?;
    let settings =
        config::load_settings(&cwd, &cli.overrides()).context("failed to load configuration")?;
    let ctx = OutputContext::from_flags(settings.json, cli.quiet);
    let action = cli.command.action();

    // Nothing runs until the store is ready.
    let db = match Database::open(&settings.db_path) {
        Ok(db) => db,
        Err(err) => {
            error!(path = %settings.db_path.display(), error = %err, "Database initialization failed");
            ctx.failure(err.user_message(action));
            return Ok(exit_code(err.exit_code()));
        }
    };

    match commands::execute(&cli.command, &db, &ctx) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            warn!(?action, error = %err, "Command failed");
            ctx.failure(err.user_message(action));
            Ok(exit_code(err.exit_code()))
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
