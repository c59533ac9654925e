//! Host configuration resolved from flags and environment.

use clap::{Args, Parser, Subcommand};
use expense_core::{default_log_level, TimeRange};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "expense-tracker", version, about = "Record and review personal expenses")]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct Settings {
    /// SQLite file holding the expense and theme stores.
    #[arg(
        long,
        env = "EXPENSE_TRACKER_DB",
        default_value = "expense-tracker.sqlite3",
        global = true
    )]
    pub db: PathBuf,
    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, env = "EXPENSE_TRACKER_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, env = "EXPENSE_TRACKER_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new expense.
    Add {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        category: String,
        /// YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete an expense by id.
    Delete { id: String },
    /// List expenses, newest first.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show total, this month, average and largest.
    Stats,
    /// Show spending per category.
    Breakdown,
    /// Show the spending trend for a window.
    Chart {
        #[arg(long, default_value = "month")]
        range: TimeRange,
    },
    /// List categories.
    Categories,
    /// Add, update or delete a category.
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Write all expenses to a dated JSON file.
    Export {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Append expenses from a JSON array file.
    Import { file: PathBuf },
    /// Delete every expense; categories are kept.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Show or change the stored theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryAction {
    Add {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set { theme: expense_core::Theme },
}

/// Settings with paths made absolute and defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub db_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl HostConfig {
    pub fn resolve(settings: &Settings) -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve_in(settings, &cwd))
    }

    fn resolve_in(settings: &Settings, cwd: &Path) -> Self {
        Self {
            db_path: absolutize(&settings.db, cwd),
            log_dir: settings.log_dir.as_deref().map(|dir| absolutize(dir, cwd)),
            log_level: settings
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, HostConfig};
    use clap::Parser;
    use expense_core::TimeRange;
    use std::path::Path;

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let cli = Cli::parse_from([
            "expense-tracker",
            "--db",
            "data/x.sqlite3",
            "--log-dir",
            "/var/log/et",
            "stats",
        ]);
        let config = HostConfig::resolve_in(&cli.settings, Path::new("/home/me"));

        assert_eq!(config.db_path, Path::new("/home/me/data/x.sqlite3"));
        assert_eq!(config.log_dir.as_deref(), Some(Path::new("/var/log/et")));
    }

    #[test]
    fn chart_range_parses_from_text() {
        let cli = Cli::parse_from(["expense-tracker", "chart", "--range", "week"]);
        assert!(matches!(
            cli.command,
            Command::Chart {
                range: TimeRange::Week
            }
        ));
    }
}
