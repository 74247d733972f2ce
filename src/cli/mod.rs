use clap::{Parser, Subcommand};

use crate::services::{GitHubClient, GridBuilder};
use crate::tui;

/// GitHub contribution calendar in your terminal
#[derive(Parser)]
#[command(name = "ghcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub username to show contributions for
    username: String,

    /// GitHub API token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the contribution grid as JSON
    Json,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let token = self.token.or_else(|| std::env::var("GITHUB_TOKEN").ok());

        match self.command {
            None | Some(Commands::Tui) => tui::run(self.username, token),
            Some(Commands::Json) => {
                let builder = GridBuilder::new(GitHubClient::new(token));
                let model = builder.fetch_and_build(&self.username)?;
                println!("{}", serde_json::to_string_pretty(&model)?);
                Ok(())
            }
        }
    }
}
