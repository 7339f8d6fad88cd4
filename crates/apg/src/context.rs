//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the global flags and performs the
//! precondition chain every repository-touching command runs first.

use std::env;

use anyhow::{bail, Context, Result};
use guides_core::layout::GuideLayout;
use guides_git::client::GitClient;
use guides_ui::styles::{status_fail, status_info};
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Check preconditions and resolve the repository layout.
    ///
    /// The chain is the same for every command that touches the repository:
    /// git must be installed, the current directory must be inside a working
    /// tree, and the repository root must resolve. Failures are fatal and
    /// print remediation before the error propagates.
    ///
    /// The process working directory is read once and never changed; the
    /// resolved root travels in the returned [`GuideLayout`].
    pub fn resolve_layout(&self, git: &dyn GitClient) -> Result<GuideLayout> {
        let cwd = env::current_dir().context("failed to get current directory")?;

        if !git.is_available() {
            if !self.json {
                println!(
                    "{}",
                    status_fail("Git is not installed. Please install git first.")
                );
            }
            bail!("git is not installed or not in PATH");
        }

        if !git.is_working_tree(&cwd) {
            if !self.json {
                println!("{}", status_fail("Not in a git repository"));
                println!();
                println!("Run this from your project root and make it a git repository:");
                println!("  cd /path/to/your/project");
                println!("  git init");
            }
            bail!("not in a git repository");
        }

        let root = git
            .top_level(&cwd)
            .context("failed to resolve repository root")?;
        debug!(root = %root.display(), "resolved repository root");

        if !self.json && !self.quiet && root != cwd {
            println!(
                "{}",
                status_info(&format!("Using repository root: {}", root.display()))
            );
        }

        Ok(GuideLayout::new(root))
    }
}
