//! Sync command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use logbook_changelog::ChangelogSync;
use logbook_git::GitCli;

use crate::cli::{Cli, OutputFormat};

/// Append new commits to the changelog
#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Changelog file to update
    #[arg(short, long, default_value = "CHANGELOG.md")]
    pub file: PathBuf,

    /// Compute the merged document without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    /// Execute the sync command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = %self.file.display(), dry_run = self.dry_run, "executing sync command");
        let cwd = std::env::current_dir()?;
        let sync = ChangelogSync::new(GitCli::new(&cwd), cwd.join(&self.file));

        let report = sync.run(self.dry_run)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }
                if cli.verbose {
                    match &report.last_recorded {
                        Some(hash) => println!("Last recorded commit: {hash}"),
                        None => println!("No prior record found, fetched full history"),
                    }
                }
                if report.commits_added == 0 {
                    println!("No new commits to add to {}", self.file.display());
                } else {
                    let verb = if self.dry_run { "Would update" } else { "Updated" };
                    println!(
                        "{} {} {} with {} new commit(s)",
                        style("✓").green().bold(),
                        verb,
                        style(self.file.display()).cyan(),
                        report.commits_added
                    );
                }
            }
        }

        Ok(())
    }
}
