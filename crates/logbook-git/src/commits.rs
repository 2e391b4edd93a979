//! Commit log fetching and parsing

use tracing::{debug, instrument};

use logbook_core::GitError;

use crate::repository::{GitCli, Result};
use crate::types::CommitRecord;

/// Log line format: hash|date|author|email|subject
const LOG_FORMAT: &str = "%h|%ad|%an|%ae|%s";

impl GitCli {
    /// Get commits after the given hash, newest first.
    ///
    /// A `since` hash git no longer knows (rewritten history, shallow clone)
    /// silently falls back to fetching the full history.
    #[instrument(skip(self))]
    pub fn commits_since(&self, since: Option<&str>) -> Result<Vec<CommitRecord>> {
        let Some(hash) = since else {
            return self.all_commits();
        };

        match self.log(Some(hash)) {
            Ok(output) => Ok(parse_log(&output)),
            Err(GitError::UnknownRevision(reason)) => {
                debug!(since = hash, %reason, "recorded hash not found, refetching full history");
                self.all_commits()
            }
            Err(e) => Err(e),
        }
    }

    /// Get every commit reachable from HEAD, newest first
    pub fn all_commits(&self) -> Result<Vec<CommitRecord>> {
        Ok(parse_log(&self.log(None)?))
    }

    fn log(&self, since: Option<&str>) -> Result<String> {
        let pretty = format!("--pretty=format:{LOG_FORMAT}");
        let range;
        let mut args = vec!["log"];
        if let Some(hash) = since {
            range = format!("{hash}..HEAD");
            args.push(&range);
        }
        args.push(&pretty);
        args.push("--date=iso");
        self.run(&args)
    }
}

/// Parse `git log` output, one commit per line
fn parse_log(output: &str) -> Vec<CommitRecord> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

/// Parse a single pipe-delimited log line.
///
/// The subject may itself contain pipes, so everything after the fourth
/// delimiter belongs to the message.
fn parse_line(line: &str) -> Option<CommitRecord> {
    let mut fields = line.splitn(5, '|');
    let hash = fields.next()?.trim();
    let date = fields.next()?.trim();
    let author = fields.next()?.trim();
    let email = fields.next()?.trim();
    let message = fields.next().unwrap_or("").trim();
    Some(CommitRecord::new(hash, date, author, email, message))
}
