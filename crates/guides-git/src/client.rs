//! Narrow git client interface.
//!
//! The tool needs a handful of git operations: probing the binary, locating
//! the repository root, and registering or refreshing one submodule. This
//! module defines that surface as a trait so command handlers can be
//! exercised against a scripted implementation without a real repository.

use crate::commands::{git_command, git_probe, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// GitClient trait
// ---------------------------------------------------------------------------

/// The git operations the tool is allowed to perform.
///
/// Every repository-scoped method takes the repository directory explicitly;
/// implementations must not depend on the process working directory.
pub trait GitClient {
    /// Returns the `git --version` banner, trimmed.
    fn version(&self) -> Result<String>;

    /// Whether a usable git binary is on the `PATH`.
    fn is_available(&self) -> bool {
        self.version().is_ok()
    }

    /// Whether `dir` is inside a git working tree.
    fn is_working_tree(&self, dir: &Path) -> bool;

    /// Returns the repository root containing `dir`.
    fn top_level(&self, dir: &Path) -> Result<PathBuf>;

    /// Registers `url` as a submodule at `path` (relative to the root).
    fn submodule_add(&self, repo: &Path, url: &str, path: &str) -> Result<()>;

    /// Fetches and checks out the latest upstream state of the submodule.
    fn submodule_update(&self, repo: &Path, path: &str) -> Result<()>;

    /// Returns `git status --short` output for `path`, trimmed.
    fn status_of(&self, repo: &Path, path: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// SystemGit
// ---------------------------------------------------------------------------

/// [`GitClient`] backed by the real `git` binary.
///
/// Each call is a blocking subprocess invocation via
/// [`git_command`](crate::commands::git_command).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl SystemGit {
    pub fn new() -> Self {
        SystemGit
    }
}

impl GitClient for SystemGit {
    fn version(&self) -> Result<String> {
        git_probe(&["--version"])
    }

    fn is_working_tree(&self, dir: &Path) -> bool {
        git_command(&["rev-parse", "--git-dir"], dir).is_ok()
    }

    fn top_level(&self, dir: &Path) -> Result<PathBuf> {
        let output = git_command(&["rev-parse", "--show-toplevel"], dir)?;
        Ok(PathBuf::from(output))
    }

    fn submodule_add(&self, repo: &Path, url: &str, path: &str) -> Result<()> {
        git_command(&["submodule", "add", url, path], repo)?;
        Ok(())
    }

    fn submodule_update(&self, repo: &Path, path: &str) -> Result<()> {
        git_command(&["submodule", "update", "--remote", path], repo)?;
        Ok(())
    }

    fn status_of(&self, repo: &Path, path: &str) -> Result<String> {
        git_command(&["status", "--short", path], repo)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GitError;
    use std::fs;
    use std::process::Command;

    /// Run a git command in `cwd` for test setup, panicking on failure.
    fn run_git(args: &[&str], cwd: &Path) {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Create a git repository with a committed file in a temp directory.
    fn init_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        run_git(&["init", "--initial-branch=main"], dir.path());
        run_git(&["config", "user.name", "Test"], dir.path());
        run_git(&["config", "user.email", "test@example.com"], dir.path());
        fs::write(dir.path().join("README.md"), "# test\n").unwrap();
        run_git(&["add", "."], dir.path());
        run_git(&["commit", "-m", "initial"], dir.path());
        dir
    }

    #[test]
    fn test_version_reports_git_banner() {
        let git = SystemGit::new();
        let version = git.version().unwrap();
        assert!(version.starts_with("git version"), "got: {version}");
        assert!(git.is_available());
    }

    #[test]
    fn test_working_tree_detection() {
        let repo = init_repo();
        let plain = tempfile::tempdir().unwrap();
        let git = SystemGit::new();

        assert!(git.is_working_tree(repo.path()));
        assert!(!git.is_working_tree(plain.path()));
    }

    #[test]
    fn test_top_level_from_subdirectory() {
        let repo = init_repo();
        let nested = repo.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let git = SystemGit::new();
        let root = git.top_level(&nested).unwrap();

        // Canonicalize both sides; on macOS /tmp is a symlink to /private/tmp.
        assert_eq!(
            root.canonicalize().unwrap(),
            repo.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_top_level_outside_repo_fails() {
        let plain = tempfile::tempdir().unwrap();
        let git = SystemGit::new();
        let err = git.top_level(plain.path()).unwrap_err();
        match err {
            GitError::CommandFailed { stderr, .. } => {
                assert!(stderr.contains("not a git repository"), "got: {stderr}");
            }
            other => panic!("expected CommandFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_status_of_reports_untracked_and_clean() {
        let repo = init_repo();
        let git = SystemGit::new();

        assert_eq!(git.status_of(repo.path(), "README.md").unwrap(), "");

        fs::write(repo.path().join("noise.txt"), "x\n").unwrap();
        let status = git.status_of(repo.path(), "noise.txt").unwrap();
        assert!(status.contains("noise.txt"), "got: {status}");
    }

    #[test]
    fn test_submodule_add_failure_surfaces_stderr() {
        let repo = init_repo();
        let git = SystemGit::new();

        let err = git
            .submodule_add(repo.path(), "/nonexistent/fixture.git", "vendor/dep")
            .unwrap_err();
        match err {
            GitError::CommandFailed { code, stderr } => {
                assert!(code.is_some());
                assert!(!stderr.is_empty());
            }
            other => panic!("expected CommandFailed, got: {other:?}"),
        }
        // A failed registration must not leave the directory behind.
        assert!(!repo.path().join("vendor/dep").exists());
    }
}
