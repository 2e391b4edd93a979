//! The sync pipeline: locate, fetch, classify, merge, write
//!
//! Strictly linear and synchronous. The document is read once at the start
//! and written once, whole, at the end; a failure anywhere before the write
//! leaves the on-disk file unchanged.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use logbook_core::{ChangelogError, Result};
use logbook_git::{CommitStats, GitCli};

use crate::locator;
use crate::merge::merge;

/// Report produced by a sync run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Commits recorded by this run
    pub commits_added: usize,
    /// Whether the changelog file was rewritten
    pub wrote: bool,
    /// True when no prior record existed in the document
    pub first_run: bool,
    /// Hash the document recorded before this run
    pub last_recorded: Option<String>,
}

/// Read-only view of what a sync run would record
#[derive(Debug, Clone, Serialize)]
pub struct SyncStatus {
    /// Hash the document currently records
    pub last_recorded: Option<String>,
    /// Commits not yet recorded
    pub pending: usize,
}

/// Synchronizes git history into a changelog document
pub struct ChangelogSync {
    git: GitCli,
    changelog_path: PathBuf,
}

impl ChangelogSync {
    /// Create a sync over the given repository handle and changelog path
    pub fn new(git: GitCli, changelog_path: impl Into<PathBuf>) -> Self {
        Self {
            git,
            changelog_path: changelog_path.into(),
        }
    }

    /// Changelog path this sync reads and writes
    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }

    /// Inspect the document and repository without modifying anything
    #[instrument(skip(self), fields(changelog = %self.changelog_path.display()))]
    pub fn status(&self) -> Result<SyncStatus> {
        let document = self.read_document()?;
        let last = locator::last_recorded_hash(&document);
        let commits = self.git.commits_since(last.as_deref())?;

        Ok(SyncStatus {
            last_recorded: last,
            pending: commits.len(),
        })
    }

    /// Run the full pipeline. With `dry_run` the merged document is computed
    /// but not written back.
    #[instrument(skip(self), fields(changelog = %self.changelog_path.display()))]
    pub fn run(&self, dry_run: bool) -> Result<SyncReport> {
        let document = self.read_document()?;

        let last = locator::last_recorded_hash(&document);
        match &last {
            Some(hash) => info!(%hash, "last recorded commit"),
            None => info!("no prior record found, fetching full history"),
        }

        let commits = self.git.commits_since(last.as_deref())?;
        if commits.is_empty() {
            info!("no new commits to record");
            return Ok(SyncReport {
                commits_added: 0,
                wrote: false,
                first_run: last.is_none(),
                last_recorded: last,
            });
        }

        let stats: HashMap<String, CommitStats> = commits
            .iter()
            .map(|c| (c.hash.clone(), self.git.commit_stats(&c.hash)))
            .collect();

        let outcome = match merge(&document, &commits, &stats) {
            Some(outcome) => outcome,
            None => {
                return Ok(SyncReport {
                    commits_added: 0,
                    wrote: false,
                    first_run: last.is_none(),
                    last_recorded: last,
                });
            }
        };

        if dry_run {
            info!(commits = outcome.commits_added, "dry run, skipping write");
        } else {
            fs::write(&self.changelog_path, &outcome.text)
                .map_err(|e| ChangelogError::WriteFailed(e.to_string()))?;
            info!(commits = outcome.commits_added, "changelog updated");
        }

        Ok(SyncReport {
            commits_added: outcome.commits_added,
            wrote: !dry_run,
            first_run: last.is_none(),
            last_recorded: last,
        })
    }

    fn read_document(&self) -> Result<String> {
        fs::read_to_string(&self.changelog_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChangelogError::FileNotFound(self.changelog_path.clone()).into()
            } else {
                ChangelogError::Io(e).into()
            }
        })
    }
}
