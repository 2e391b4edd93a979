//! Logbook Changelog - incremental changelog document maintenance
//!
//! Locates the last recorded commit in a changelog document, classifies and
//! groups newly fetched commits, and splices them into the document's
//! commit-history and unreleased sections without disturbing the rest of the
//! text.

pub mod document;
pub mod locator;
pub mod merge;
pub mod render;
pub mod sync;
pub mod types;

pub use document::Document;
pub use locator::last_recorded_hash;
pub use merge::{merge, MergeOutcome};
pub use sync::{ChangelogSync, SyncReport, SyncStatus};
pub use types::{group_by_date, Category, Classified, DateGroup};
