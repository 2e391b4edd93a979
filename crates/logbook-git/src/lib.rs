//! Logbook Git - external git plumbing
//!
//! Git is treated as a black box: every operation shells out to the `git`
//! binary with a fixed argument template and parses its line-oriented text
//! output.

pub mod commits;
pub mod repository;
pub mod stats;
pub mod types;

pub use repository::{GitCli, Result};
pub use types::{CommitRecord, CommitStats};
