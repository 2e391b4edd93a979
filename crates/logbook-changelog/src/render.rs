//! Markdown rendering for history and unreleased blocks

use std::collections::HashMap;

use logbook_git::CommitStats;

use crate::types::{Classified, DateGroup};

/// Render date groups as `### <date>` history blocks.
///
/// Each commit gets a bolded-hash bullet with indented author, date, and
/// stats lines; the stats line is omitted for commits with no recorded file
/// changes. Returned blocks carry no trailing blank lines; callers splice in
/// their own surrounding whitespace.
pub fn history_block(groups: &[DateGroup], stats: &HashMap<String, CommitStats>) -> String {
    let mut out = String::new();

    for group in groups {
        out.push_str(&format!("### {}\n", group.date));
        for commit in &group.commits {
            out.push_str(&format!("- **{}** - {}\n", commit.hash, commit.message));
            out.push_str(&format!(
                "  - Author: {} ({})\n",
                commit.author, commit.email
            ));
            out.push_str(&format!("  - Date: {}\n", commit.date));

            if let Some(s) = stats.get(&commit.hash).filter(|s| !s.is_empty()) {
                out.push_str(&format!(
                    "  - Files: {} changed, {} insertions(+), {} deletions(-)\n",
                    s.files_changed, s.insertions, s.deletions
                ));
            }
            out.push('\n');
        }
    }

    out.trim_end().to_string()
}

/// Render classified commits as Unreleased sub-lists, empty buckets omitted
pub fn unreleased_block(classified: &Classified) -> String {
    let mut out = String::new();

    for (title, commits) in classified.buckets() {
        if commits.is_empty() {
            continue;
        }
        out.push_str(&format!("### {title}\n"));
        for commit in commits {
            out.push_str(&format!("- {} ({})\n", commit.message, commit.hash));
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::group_by_date;
    use logbook_git::CommitRecord;

    fn record(hash: &str, date: &str, message: &str) -> CommitRecord {
        CommitRecord::new(hash, date, "Test Author", "test@example.com", message)
    }

    #[test]
    fn test_history_block_layout() {
        let commits = vec![record("def456", "2024-01-02 10:00:00 +0000", "Add login page")];
        let groups = group_by_date(&commits);
        let stats = HashMap::from([(
            "def456".to_string(),
            CommitStats {
                files_changed: 2,
                insertions: 10,
                deletions: 1,
            },
        )]);

        let block = history_block(&groups, &stats);
        assert_eq!(
            block,
            "### 2024-01-02\n\
             - **def456** - Add login page\n\
             \x20 - Author: Test Author (test@example.com)\n\
             \x20 - Date: 2024-01-02 10:00:00 +0000\n\
             \x20 - Files: 2 changed, 10 insertions(+), 1 deletions(-)"
        );
    }

    #[test]
    fn test_history_block_omits_zero_stats() {
        let commits = vec![record("def456", "2024-01-02 10:00:00 +0000", "Add login page")];
        let groups = group_by_date(&commits);

        let block = history_block(&groups, &HashMap::new());
        assert!(!block.contains("- Files:"));
        assert!(block.contains("- **def456** - Add login page"));
    }

    #[test]
    fn test_history_block_separates_commits_with_blank_lines() {
        let commits = vec![
            record("def456", "2024-01-02 10:00:00 +0000", "Add login page"),
            record("ghi789", "2024-01-02 09:00:00 +0000", "Fix crash"),
        ];
        let groups = group_by_date(&commits);
        let block = history_block(&groups, &HashMap::new());

        assert!(block.contains("+0000\n\n- **ghi789**"));
    }

    #[test]
    fn test_unreleased_block_omits_empty_buckets() {
        let commits = vec![
            record("def456", "2024-01-02 10:00:00 +0000", "Add login page"),
            record("ghi789", "2024-01-02 09:00:00 +0000", "Fix crash on startup"),
        ];
        let classified = Classified::partition(&commits);
        let block = unreleased_block(&classified);

        assert_eq!(
            block,
            "### Added\n- Add login page (def456)\n\n### Fixed\n- Fix crash on startup (ghi789)"
        );
        assert!(!block.contains("### Changed"));
        assert!(!block.contains("### Removed"));
    }

    #[test]
    fn test_unreleased_block_empty_input() {
        assert_eq!(unreleased_block(&Classified::default()), "");
    }
}
