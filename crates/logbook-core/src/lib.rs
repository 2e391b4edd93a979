//! Logbook core - shared error types
//!
//! The error taxonomy mirrors how the tool recovers: unknown revisions and
//! missing records are handled by the callers that hit them, everything else
//! propagates to the binary boundary.

pub mod error;

pub use error::{ChangelogError, GitError, LogbookError, Result};
