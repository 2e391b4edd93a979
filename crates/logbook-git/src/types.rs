//! Commit record types

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A single commit parsed from `git log` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Abbreviated commit hash
    pub hash: String,
    /// Commit date as reported by git (`--date=iso`)
    pub date: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Commit subject line
    pub message: String,
}

impl CommitRecord {
    /// Create a new CommitRecord
    pub fn new(
        hash: impl Into<String>,
        date: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            date: date.into(),
            author: author.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Calendar date (YYYY-MM-DD) of the commit.
    ///
    /// Git's `--date=iso` output parses cleanly; anything else falls back to
    /// the date-like prefix of the raw string.
    pub fn date_key(&self) -> String {
        DateTime::parse_from_str(&self.date, "%Y-%m-%d %H:%M:%S %z")
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| {
                self.date
                    .split(['T', ' '])
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
    }
}

/// Per-commit diffstat summary.
///
/// Stats are advisory: they default to zeros whenever the underlying lookup
/// fails or its output cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    /// Number of files changed
    pub files_changed: u32,
    /// Lines inserted
    pub insertions: u32,
    /// Lines deleted
    pub deletions: u32,
}

impl CommitStats {
    /// Check if the commit touched no files
    pub fn is_empty(&self) -> bool {
        self.files_changed == 0
    }
}
