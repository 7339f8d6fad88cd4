//! Git subprocess invocation.
//!
//! A thin wrapper around running the `git` binary so the rest of the
//! codebase never touches `std::process::Command` directly. Every
//! repository-scoped invocation takes an explicit working directory;
//! nothing in this crate reads or changes the process working directory.

use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running git commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute git: {0}")]
    SpawnError(#[from] std::io::Error),

    /// The git command exited with a non-zero status.
    #[error("git command failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Execute a `git` command with the given arguments and working directory.
///
/// Returns the trimmed contents of stdout on success.
///
/// # Errors
///
/// Returns [`GitError::SpawnError`] if `git` cannot be found, or
/// [`GitError::CommandFailed`] if the command exits with a non-zero status.
///
/// # Examples
///
/// ```no_run
/// use guides_git::commands::git_command;
/// use std::path::Path;
///
/// let root = git_command(&["rev-parse", "--show-toplevel"], Path::new("."))?;
/// println!("Repository root: {root}");
/// # Ok::<(), guides_git::commands::GitError>(())
/// ```
pub fn git_command(args: &[&str], cwd: &Path) -> Result<String> {
    debug!(?args, cwd = %cwd.display(), "running git");

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(code = ?output.status.code(), %stderr, "git command failed");
        return Err(GitError::CommandFailed {
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(stdout)
}

/// Execute a `git` command that is not scoped to a repository.
///
/// Identical to [`git_command`] but inherits the process working directory,
/// which is what `git --version` and similar probes want.
pub fn git_probe(args: &[&str]) -> Result<String> {
    debug!(?args, "running git probe");

    let output = Command::new("git").args(args).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::CommandFailed {
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(stdout)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
