//! Scripted git client for tests.
//!
//! [`ScriptedGit`] answers the [`GitClient`] surface from configured state
//! instead of a subprocess, and records every call it receives so tests can
//! assert on ordering (for example that no mutation happens after a failed
//! precondition).

use crate::client::GitClient;
use crate::commands::{GitError, Result};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory [`GitClient`] with scriptable outcomes.
#[derive(Debug)]
pub struct ScriptedGit {
    available: bool,
    working_tree: bool,
    top_level: Option<PathBuf>,
    submodule_add_error: Option<String>,
    submodule_update_error: Option<String>,
    status: String,
    calls: RefCell<Vec<String>>,
}

impl ScriptedGit {
    /// A client that reports a healthy repository rooted at `root`.
    pub fn healthy(root: &Path) -> Self {
        ScriptedGit {
            available: true,
            working_tree: true,
            top_level: Some(root.to_path_buf()),
            submodule_add_error: None,
            submodule_update_error: None,
            status: String::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Behave as if no git binary is installed.
    pub fn without_git(mut self) -> Self {
        self.available = false;
        self.working_tree = false;
        self.top_level = None;
        self
    }

    /// Behave as if the directory is not inside a working tree.
    pub fn outside_repository(mut self) -> Self {
        self.working_tree = false;
        self.top_level = None;
        self
    }

    /// Make `submodule_add` fail with the given stderr.
    pub fn failing_submodule_add(mut self, stderr: &str) -> Self {
        self.submodule_add_error = Some(stderr.to_string());
        self
    }

    /// Make `submodule_update` fail with the given stderr.
    pub fn failing_submodule_update(mut self, stderr: &str) -> Self {
        self.submodule_update_error = Some(stderr.to_string());
        self
    }

    /// Script the output of `status_of`.
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// The calls received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl GitClient for ScriptedGit {
    fn version(&self) -> Result<String> {
        self.record("version".to_string());
        if self.available {
            Ok("git version 2.43.0".to_string())
        } else {
            Err(GitError::SpawnError(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )))
        }
    }

    fn is_working_tree(&self, dir: &Path) -> bool {
        self.record(format!("is-working-tree {}", dir.display()));
        self.working_tree
    }

    fn top_level(&self, dir: &Path) -> Result<PathBuf> {
        self.record(format!("top-level {}", dir.display()));
        match &self.top_level {
            Some(root) => Ok(root.clone()),
            None => Err(GitError::CommandFailed {
                code: Some(128),
                stderr: "fatal: not a git repository (or any of the parent directories): .git"
                    .to_string(),
            }),
        }
    }

    fn submodule_add(&self, _repo: &Path, url: &str, path: &str) -> Result<()> {
        self.record(format!("submodule-add {url} {path}"));
        match &self.submodule_add_error {
            Some(stderr) => Err(GitError::CommandFailed {
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }

    fn submodule_update(&self, _repo: &Path, path: &str) -> Result<()> {
        self.record(format!("submodule-update {path}"));
        match &self.submodule_update_error {
            Some(stderr) => Err(GitError::CommandFailed {
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }

    fn status_of(&self, _repo: &Path, path: &str) -> Result<String> {
        self.record(format!("status {path}"));
        Ok(self.status.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
