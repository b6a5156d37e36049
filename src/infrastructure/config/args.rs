use super::app_config::{IdSource, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tasklist",
    version,
    about = "A small keyboard-driven to-do list for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Source of new task ids.
    #[arg(long, value_enum)]
    pub id_source: Option<IdSource>,

    /// Accept renaming a task to its current title instead of reporting a duplicate.
    #[arg(long)]
    pub allow_same_title_edit: bool,
}
