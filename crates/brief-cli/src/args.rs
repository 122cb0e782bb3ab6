use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::AdminCommands;

/// Interactive project briefing questionnaire
///
/// Without a subcommand, brief walks a client through the briefing wizard
/// section by section, stores the result, and prints a messaging link that
/// carries the summary. The `admin` subcommands inspect stored briefings and
/// manage settings.
#[derive(Parser)]
#[command(version, about, name = "brief")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/brief/brief.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the brief CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Fill in a new briefing (the default)
    #[command(alias = "w")]
    Wizard,
    /// Inspect briefings and manage settings
    #[command(alias = "a")]
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}
