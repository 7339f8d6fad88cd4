//! `apg doctor` -- check environment and installation health.
//!
//! A read-only report covering:
//! - git availability and version
//! - working-tree membership and repository root
//! - the seven scaffold directories under `project-documents/private/`
//! - the `.gitkeep` marker file and its content
//! - the submodule directory and whether it is populated
//!
//! The command always exits 0; it reports problems, it does not gate on them.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use guides_core::layout::{GuideLayout, GITKEEP_CONTENT, PRIVATE_SUBDIRS, SUBMODULE_PATH};
use guides_git::client::GitClient;

use crate::context::RuntimeContext;

/// Execute the `apg doctor` command.
pub fn run(_ctx: &RuntimeContext, git: &dyn GitClient) -> Result<()> {
    let mut issues_found = 0u32;

    println!("apg doctor: checking installation health...");
    println!();

    // 1. Git binary
    match git.version() {
        Ok(version) => {
            println!("[OK] Git available: {}", version);
        }
        Err(_) => {
            println!("[FAIL] Git is not installed or not in PATH");
            issues_found += 1;
            print_summary(issues_found);
            return Ok(());
        }
    }

    // 2. Working tree membership
    let cwd = env::current_dir().context("failed to get current directory")?;
    if !git.is_working_tree(&cwd) {
        println!("[FAIL] Not inside a git working tree");
        println!();
        println!("Hint: run 'git init' in your project first");
        issues_found += 1;
        print_summary(issues_found);
        return Ok(());
    }
    println!("[OK] Inside a git working tree");

    // 3. Repository root
    let layout = match git.top_level(&cwd) {
        Ok(root) => {
            println!("[OK] Repository root: {}", root.display());
            GuideLayout::new(root)
        }
        Err(e) => {
            println!("[FAIL] Cannot resolve repository root: {}", e);
            issues_found += 1;
            print_summary(issues_found);
            return Ok(());
        }
    };

    // 4. Scaffold directories
    for name in PRIVATE_SUBDIRS {
        let dir = layout.private_subdir(name);
        if dir.is_dir() {
            println!("[OK] Directory 'project-documents/private/{}' exists", name);
        } else {
            println!(
                "[FAIL] Directory 'project-documents/private/{}' is missing",
                name
            );
            issues_found += 1;
        }
    }

    // 5. Marker file
    let gitkeep = layout.gitkeep_path();
    match fs::read_to_string(&gitkeep) {
        Ok(content) if content == GITKEEP_CONTENT => {
            println!("[OK] Marker file present with expected content");
        }
        Ok(_) => {
            println!("[WARN] Marker file content differs from the expected marker");
            issues_found += 1;
        }
        Err(_) => {
            println!("[FAIL] Marker file not found: {}", gitkeep.display());
            issues_found += 1;
        }
    }

    // 6. Submodule directory
    let submodule = layout.submodule_dir();
    if !submodule.is_dir() {
        println!("[FAIL] Submodule directory not found: {SUBMODULE_PATH}");
        println!();
        println!("Hint: run 'apg setup' to install the guide");
        issues_found += 1;
        print_summary(issues_found);
        return Ok(());
    }
    println!("[OK] Submodule directory exists: {SUBMODULE_PATH}");

    // Directory emptiness only; content integrity is git's business.
    let populated = fs::read_dir(&submodule)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    if populated {
        println!("[OK] Submodule directory is populated");
    } else {
        println!("[WARN] Submodule directory is empty");
        println!();
        println!("Hint: run 'git submodule update --init {SUBMODULE_PATH}'");
        issues_found += 1;
    }

    print_summary(issues_found);
    Ok(())
}

/// Print the final summary line.
fn print_summary(issues_found: u32) {
    println!();
    if issues_found == 0 {
        println!("Health check passed: no issues found");
    } else {
        println!("Health check completed: {} issue(s) found", issues_found);
    }
}
