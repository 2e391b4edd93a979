//! External git invocation

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument};

use logbook_core::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Handle for running git commands in a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a handle rooted at the given working directory
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Get the working directory
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run a git subcommand and capture its stdout
    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    pub(crate) fn run(&self, args: &[&str]) -> Result<String> {
        debug!(?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotFound
                } else {
                    GitError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.lines().next().unwrap_or("").trim().to_string();
            if is_unknown_revision(&stderr) {
                return Err(GitError::UnknownRevision(reason));
            }
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                reason,
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Check whether a failure was caused by a revision git does not know
fn is_unknown_revision(stderr: &str) -> bool {
    stderr.contains("bad revision") || stderr.contains("unknown revision")
}
