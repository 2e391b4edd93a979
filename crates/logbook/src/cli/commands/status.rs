//! Status command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use logbook_changelog::ChangelogSync;
use logbook_git::GitCli;

use crate::cli::{Cli, OutputFormat};

/// Show the last recorded commit and pending count
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Changelog file to inspect
    #[arg(short, long, default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl StatusCommand {
    /// Execute the status command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = %self.file.display(), "executing status command");
        let cwd = std::env::current_dir()?;
        let sync = ChangelogSync::new(GitCli::new(&cwd), cwd.join(&self.file));

        let status = sync.status()?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            OutputFormat::Text => {
                println!("{}", style("Changelog Status").bold());
                println!();
                match &status.last_recorded {
                    Some(hash) => {
                        println!("  Last recorded commit: {}", style(hash).cyan());
                    }
                    None => {
                        println!(
                            "  Last recorded commit: {} (first run)",
                            style("none").yellow()
                        );
                    }
                }
                println!("  Pending commits:      {}", status.pending);
            }
        }

        Ok(())
    }
}
