//! Idempotent merge of new commits into a changelog document

use std::collections::HashMap;

use tracing::{debug, instrument};

use logbook_git::{CommitRecord, CommitStats};

use crate::document::Document;
use crate::render;
use crate::types::{group_by_date, Classified};

/// Result of merging new commits into a document
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The full replacement document text
    pub text: String,
    /// Number of commits recorded
    pub commits_added: usize,
}

/// Merge newly fetched commits into the document text.
///
/// Two edits are applied to the same base text: the rendered history block
/// is inserted at the top of the history section, and the classified commits
/// replace the unreleased body when that section exists. Returns `None` when
/// there is nothing to merge; the caller skips the file write entirely.
#[instrument(skip_all, fields(commit_count = commits.len()))]
pub fn merge(
    document: &str,
    commits: &[CommitRecord],
    stats: &HashMap<String, CommitStats>,
) -> Option<MergeOutcome> {
    if commits.is_empty() {
        return None;
    }

    let mut doc = Document::parse(document);

    let groups = group_by_date(commits);
    doc.prepend_history(&render::history_block(&groups, stats));

    if doc.has_unreleased() {
        let classified = Classified::partition(commits);
        doc.replace_unreleased(&render::unreleased_block(&classified));
    }

    debug!(commit_count = commits.len(), "merged commits into document");

    Some(MergeOutcome {
        text: doc.render(),
        commits_added: commits.len(),
    })
}
