//! Change categories, classification, and date grouping

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use logbook_git::CommitRecord;

/// Keep-a-Changelog style change category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// New functionality
    Added,
    /// Changes to existing functionality
    Changed,
    /// Bug fixes
    Fixed,
    /// Removed functionality
    Removed,
}

impl Category {
    /// Classify a commit message by its lower-cased prefix, first match wins.
    ///
    /// This is a heuristic: a feature commit whose message happens to start
    /// with "update" lands in Changed.
    pub fn classify(message: &str) -> Self {
        let msg = message.to_lowercase();
        if starts_with_any(&msg, &["fix", "bugfix"]) {
            Self::Fixed
        } else if starts_with_any(&msg, &["remove", "delete"]) {
            Self::Removed
        } else if starts_with_any(&msg, &["update", "change", "modify"]) {
            Self::Changed
        } else {
            Self::Added
        }
    }

    /// Section title used under the Unreleased header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Removed => "Removed",
        }
    }
}

fn starts_with_any(message: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| message.starts_with(prefix))
}

/// Commits partitioned into the four change categories.
///
/// Every commit lands in exactly one bucket; order within a bucket preserves
/// the input (newest-first) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classified {
    /// Commits classified as additions
    pub added: Vec<CommitRecord>,
    /// Commits classified as changes
    pub changed: Vec<CommitRecord>,
    /// Commits classified as fixes
    pub fixed: Vec<CommitRecord>,
    /// Commits classified as removals
    pub removed: Vec<CommitRecord>,
}

impl Classified {
    /// Partition commits by message classification
    pub fn partition(commits: &[CommitRecord]) -> Self {
        let mut classified = Self::default();
        for commit in commits {
            match Category::classify(&commit.message) {
                Category::Added => classified.added.push(commit.clone()),
                Category::Changed => classified.changed.push(commit.clone()),
                Category::Fixed => classified.fixed.push(commit.clone()),
                Category::Removed => classified.removed.push(commit.clone()),
            }
        }
        classified
    }

    /// Buckets in render order, paired with their section titles
    pub fn buckets(&self) -> [(&'static str, &[CommitRecord]); 4] {
        [
            (Category::Added.title(), self.added.as_slice()),
            (Category::Changed.title(), self.changed.as_slice()),
            (Category::Fixed.title(), self.fixed.as_slice()),
            (Category::Removed.title(), self.removed.as_slice()),
        ]
    }

    /// Total commits across all buckets
    pub fn len(&self) -> usize {
        self.added.len() + self.changed.len() + self.fixed.len() + self.removed.len()
    }

    /// Check if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Commits sharing one calendar date, in fetch (newest-first) order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateGroup {
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Member commits
    pub commits: Vec<CommitRecord>,
}

/// Group commits by calendar date, dates descending.
///
/// Lexicographic order on YYYY-MM-DD keys is chronological order, so a
/// reversed BTreeMap walk emits newest dates first.
pub fn group_by_date(commits: &[CommitRecord]) -> Vec<DateGroup> {
    let mut groups: BTreeMap<String, Vec<CommitRecord>> = BTreeMap::new();
    for commit in commits {
        groups
            .entry(commit.date_key())
            .or_default()
            .push(commit.clone());
    }

    groups
        .into_iter()
        .rev()
        .map(|(date, commits)| DateGroup { date, commits })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: &str, date: &str, message: &str) -> CommitRecord {
        CommitRecord::new(hash, date, "Test Author", "test@example.com", message)
    }

    #[test]
    fn test_classify_fixed() {
        assert_eq!(Category::classify("Fix crash on startup"), Category::Fixed);
        assert_eq!(Category::classify("bugfix: handle nulls"), Category::Fixed);
    }

    #[test]
    fn test_classify_removed() {
        assert_eq!(Category::classify("Remove legacy API"), Category::Removed);
        assert_eq!(Category::classify("delete unused assets"), Category::Removed);
    }

    #[test]
    fn test_classify_changed() {
        assert_eq!(Category::classify("Update dependencies"), Category::Changed);
        assert_eq!(Category::classify("change default port"), Category::Changed);
        assert_eq!(Category::classify("Modify config layout"), Category::Changed);
    }

    #[test]
    fn test_classify_defaults_to_added() {
        assert_eq!(Category::classify("Add login page"), Category::Added);
        assert_eq!(Category::classify("Refactor parser"), Category::Added);
        assert_eq!(Category::classify(""), Category::Added);
    }

    #[test]
    fn test_partition_is_exact() {
        let commits = vec![
            record("a1", "2024-01-02 10:00:00 +0000", "Add login page"),
            record("b2", "2024-01-02 09:00:00 +0000", "Fix crash"),
            record("c3", "2024-01-01 12:00:00 +0000", "Update docs"),
            record("d4", "2024-01-01 11:00:00 +0000", "Remove dead code"),
            record("e5", "2024-01-01 10:00:00 +0000", "Rework cache"),
        ];
        let classified = Classified::partition(&commits);

        assert_eq!(classified.len(), commits.len());
        assert_eq!(classified.added.len(), 2);
        assert_eq!(classified.changed.len(), 1);
        assert_eq!(classified.fixed.len(), 1);
        assert_eq!(classified.removed.len(), 1);
    }

    #[test]
    fn test_partition_preserves_order_within_bucket() {
        let commits = vec![
            record("a1", "2024-01-02 10:00:00 +0000", "Add login page"),
            record("b2", "2024-01-02 09:00:00 +0000", "Add logout page"),
        ];
        let classified = Classified::partition(&commits);
        assert_eq!(classified.added[0].hash, "a1");
        assert_eq!(classified.added[1].hash, "b2");
    }

    #[test]
    fn test_group_by_date_descending() {
        let commits = vec![
            record("a1", "2024-01-02 10:00:00 +0000", "Add a"),
            record("b2", "2024-01-01 12:00:00 +0000", "Add b"),
            record("c3", "2024-01-02 09:00:00 +0000", "Add c"),
        ];
        let groups = group_by_date(&commits);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-01-02");
        assert_eq!(groups[1].date, "2024-01-01");
        // insertion order within a date follows the input
        assert_eq!(groups[0].commits[0].hash, "a1");
        assert_eq!(groups[0].commits[1].hash, "c3");
    }
}
