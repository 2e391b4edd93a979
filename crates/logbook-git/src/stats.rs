//! Per-commit diffstat parsing

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::repository::GitCli;
use crate::types::CommitStats;

/// Regex for the trailing summary line of `git show --stat`
static DIFFSTAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) files? changed(?:, (\d+) insertions?\(\+\))?(?:, (\d+) deletions?\(-\))?")
        .expect("Invalid regex")
});

impl GitCli {
    /// Diffstat counts for a single commit.
    ///
    /// Stats are advisory: any failure or unparseable output yields zeros
    /// instead of an error.
    pub fn commit_stats(&self, hash: &str) -> CommitStats {
        match self.run(&["show", "--stat", "--format=", hash]) {
            Ok(output) => parse_diffstat(&output),
            Err(e) => {
                debug!(hash, error = %e, "diffstat lookup failed, using zero stats");
                CommitStats::default()
            }
        }
    }
}

/// Parse the last line of a diffstat summary
fn parse_diffstat(output: &str) -> CommitStats {
    let Some(last) = output.trim_end().lines().last() else {
        return CommitStats::default();
    };

    let Some(caps) = DIFFSTAT_REGEX.captures(last) else {
        return CommitStats::default();
    };

    CommitStats {
        files_changed: capture_count(&caps, 1),
        insertions: capture_count(&caps, 2),
        deletions: capture_count(&caps, 3),
    }
}

/// Numeric value of a capture group, zero when absent
fn capture_count(caps: &regex::Captures<'_>, index: usize) -> u32 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
