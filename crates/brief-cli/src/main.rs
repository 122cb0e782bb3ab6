//! Brief CLI Application
//!
//! Terminal host for the briefing wizard and its admin views.

mod args;
mod cli;
mod interactive;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use brief_core::SessionBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize briefing session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Brief started");

    match command {
        Some(Admin { command }) => {
            Cli::new(session, renderer)
                .handle_admin_command(command)
                .await
        }
        Some(Wizard) | None => Cli::new(session, renderer).run_wizard().await,
    }
}
