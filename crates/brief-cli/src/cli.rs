//! Admin command definitions and handlers.
//!
//! Argument structs carry the clap derives and convert into the core's
//! parameter types with `From`, so `brief_core::params` stays free of CLI
//! attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → BriefingSession
//! ```

use std::io;

use anyhow::{Context, Result};
use brief_core::{
    display::{Briefings, OperationStatus},
    params::SettingsUpdate,
    BriefingSession,
};
use clap::{Args, Subcommand};

use crate::{interactive::Interactive, renderer::TerminalRenderer};

/// Admin operations on stored briefings and settings
#[derive(Subcommand)]
pub enum AdminCommands {
    /// Show totals and the most recent briefings
    #[command(alias = "d")]
    Dashboard,
    /// List every stored briefing in submission order
    #[command(alias = "ls")]
    List,
    /// Show a briefing with its full summary
    Show(BriefingIdArgs),
    /// Print the messaging link to resend a briefing
    Resend(BriefingIdArgs),
    /// Fetch and display the briefings held by the remote store
    Pull,
    /// Show settings, or change them when any option is given
    Settings(SettingsArgs),
}

/// Identifies one stored briefing
#[derive(Args)]
pub struct BriefingIdArgs {
    /// ID of the briefing, as shown by `admin list`
    pub id: u64,
}

/// Change settings
///
/// Options left out keep their current value. An empty `--sync-url`
/// disables remote sync.
#[derive(Args)]
pub struct SettingsArgs {
    /// Name shown in the summary footer
    #[arg(long)]
    pub developer_name: Option<String>,
    /// Title shown on the intro screen and the summary header
    #[arg(long)]
    pub title: Option<String>,
    /// Intro screen description
    #[arg(long)]
    pub description: Option<String>,
    /// Intro screen subtitle
    #[arg(long)]
    pub subtitle: Option<String>,
    /// Expected time to fill in the questionnaire
    #[arg(long)]
    pub time_estimate: Option<String>,
    /// Recipient identifier of the messaging link (phone number)
    #[arg(long)]
    pub messaging_target: Option<String>,
    /// Host of the messaging link
    #[arg(long)]
    pub messaging_host: Option<String>,
    /// Remote store endpoint
    #[arg(long)]
    pub sync_url: Option<String>,
}

impl From<SettingsArgs> for SettingsUpdate {
    fn from(val: SettingsArgs) -> Self {
        SettingsUpdate {
            developer_name: val.developer_name,
            title: val.title,
            description: val.description,
            subtitle: val.subtitle,
            time_estimate: val.time_estimate,
            messaging_target: val.messaging_target,
            messaging_host: val.messaging_host,
            sync_url: val.sync_url,
        }
    }
}

/// Runs one command against a session and renders its output.
pub struct Cli {
    session: BriefingSession,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: BriefingSession, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Runs the interactive wizard on stdin/stdout.
    pub async fn run_wizard(mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Interactive::new(&mut self.session, &self.renderer, stdin.lock(), stdout.lock())
            .run()
            .await
    }

    pub async fn handle_admin_command(mut self, command: AdminCommands) -> Result<()> {
        match command {
            AdminCommands::Dashboard => {
                let dashboard = self
                    .session
                    .dashboard()
                    .context("Failed to load briefings")?;
                self.renderer.render(&dashboard.to_string())
            }
            AdminCommands::List => {
                let briefings = self
                    .session
                    .briefings()
                    .context("Failed to load briefings")?;
                self.renderer.render(&briefings.to_string())
            }
            AdminCommands::Show(args) => {
                let briefing = self
                    .session
                    .briefing(args.id)
                    .with_context(|| format!("Failed to show briefing {}", args.id))?;
                self.renderer.render(&briefing.to_string())?;
                println!("{}", self.session.summary_for(&briefing));
                Ok(())
            }
            AdminCommands::Resend(args) => {
                let link = self
                    .session
                    .resend_link(args.id)
                    .with_context(|| format!("Failed to build link for briefing {}", args.id))?;
                println!("{link}");
                Ok(())
            }
            AdminCommands::Pull => self.pull().await,
            AdminCommands::Settings(args) => {
                let update = SettingsUpdate::from(args);
                if !update.is_empty() {
                    let changed = self
                        .session
                        .update_settings(&update)
                        .context("Failed to update settings")?;
                    let status = if changed.is_empty() {
                        OperationStatus::success("Settings unchanged")
                    } else {
                        OperationStatus::success(format!("Updated {}", changed.join(", ")))
                    };
                    self.renderer.render(&status.to_string())?;
                    println!();
                }
                self.renderer.render(&self.session.settings().to_string())
            }
        }
    }

    async fn pull(&self) -> Result<()> {
        match self.session.pull_remote().await {
            Ok(records) => {
                let status =
                    OperationStatus::success(format!("Fetched {} briefings", records.len()));
                self.renderer.render(&status.to_string())?;
                println!();
                self.renderer.render(&Briefings(records).to_string())
            }
            Err(e) => {
                let status = OperationStatus::failure(format!("Could not load from remote: {e}"));
                self.renderer.render(&status.to_string())
            }
        }
    }
}
