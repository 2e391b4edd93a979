//! Last-sync locator
//!
//! Finds the most recent commit hash already recorded in the document. A
//! missing record is not an error; it signals a first run.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// First bolded hash under the newest date subsection of the history section
static HISTORY_HASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)## Commit History.*?### \d{4}-\d{2}-\d{2}.*?\*\*([0-9a-f]+)\*\*")
        .expect("Invalid regex")
});

/// Older single-version document shape: a bolded Commit field
static COMMIT_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Commit:\*\* `([0-9a-f]+)`").expect("Invalid regex"));

/// Find the most recently recorded commit hash in the document
pub fn last_recorded_hash(document: &str) -> Option<String> {
    if let Some(caps) = HISTORY_HASH_REGEX.captures(document) {
        let hash = caps[1].to_string();
        debug!(%hash, "found last recorded hash in history section");
        return Some(hash);
    }

    if let Some(caps) = COMMIT_FIELD_REGEX.captures(document) {
        let hash = caps[1].to_string();
        debug!(%hash, "found last recorded hash in commit field");
        return Some(hash);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locates_newest_hash_in_history_section() {
        let document = "\
# Changelog

## Commit History

### 2024-01-02
- **def456** - Add login page
  - Author: A (a@example.com)
  - Date: 2024-01-02 10:00:00 +0000

### 2024-01-01
- **abc123** - Initial commit
  - Author: A (a@example.com)
  - Date: 2024-01-01 09:00:00 +0000
";
        assert_eq!(last_recorded_hash(document), Some("def456".to_string()));
    }

    #[test]
    fn test_falls_back_to_commit_field() {
        let document = "\
# Changelog

## [1.0.0] - 2024-01-01

**Commit:** `abc123`
";
        assert_eq!(last_recorded_hash(document), Some("abc123".to_string()));
    }

    #[test]
    fn test_history_section_wins_over_commit_field() {
        let document = "\
**Commit:** `999999`

## Commit History

### 2024-01-02
- **def456** - Add login page
";
        assert_eq!(last_recorded_hash(document), Some("def456".to_string()));
    }

    #[test]
    fn test_no_record_means_first_run() {
        assert_eq!(last_recorded_hash("# Changelog\n\n## [Unreleased]\n"), None);
        assert_eq!(last_recorded_hash(""), None);
    }

    #[test]
    fn test_history_header_without_entries() {
        assert_eq!(last_recorded_hash("# Changelog\n\n## Commit History\n"), None);
    }

    #[test]
    fn test_unreleased_entries_are_not_matched() {
        // hashes in unreleased bullets are parenthesized, not bolded, and sit
        // outside the history section
        let document = "\
## [Unreleased]

### Added
- Add login page (def456)
";
        assert_eq!(last_recorded_hash(document), None);
    }
}
