//! Command-line host for the expense tracker core.
//!
//! # Responsibility
//! - Resolve configuration, open storage and load the stores once.
//! - Own file I/O for import/export and report outcomes to the user.

mod commands;
mod config;

use clap::Parser;
use config::{Cli, HostConfig};
use expense_core::db::open_db;
use expense_core::{init_logging, ExpenseStore, SqliteKvRepository, ThemeStore};
use log::error;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = HostConfig::resolve(&cli.settings)?;

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let conn = open_db(&config.db_path)?;
    let repo = SqliteKvRepository::new(&conn);
    let mut expenses = ExpenseStore::load(&repo);
    let mut theme = ThemeStore::load(&repo);

    commands::dispatch(cli.command, &mut expenses, &mut theme)
}
