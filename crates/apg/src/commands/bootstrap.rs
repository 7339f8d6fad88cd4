//! `apg bootstrap` -- one-shot setup of the ai-project-guide framework.
//!
//! Checks preconditions, scaffolds the work area, registers the guide
//! submodule, and prints next steps. When the guide is already installed it
//! prints update instructions and succeeds instead of failing, so the
//! command is safe to run from a fresh clone or a scripted installer.

use anyhow::{Context, Result};
use guides_core::layout::{GUIDE_REPO_URL, SUBMODULE_PATH};
use guides_core::scaffold::ensure_tree;
use guides_git::client::GitClient;
use guides_ui::styles::{status_fail, status_info, status_pass, status_warn};

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `apg bootstrap` command.
pub fn run(ctx: &RuntimeContext, git: &dyn GitClient) -> Result<()> {
    let layout = ctx.resolve_layout(git)?;

    if !ctx.json && !ctx.quiet {
        println!("{}", status_info("Setting up AI Project Guide..."));
        println!();
    }

    // Already installed: point at the update path and succeed.
    if layout.is_installed() {
        if ctx.json {
            output_json(&serde_json::json!({
                "status": "already-installed",
                "submodule": SUBMODULE_PATH,
            }));
        } else if !ctx.quiet {
            println!(
                "{}",
                status_warn("AI Project Guide submodule already exists!")
            );
            println!();
            println!("{}", status_info("To update, run:"));
            println!("  git submodule update --remote {SUBMODULE_PATH}");
            println!();
            println!("{}", status_info("Or:"));
            println!("  apg setup --update");
        }
        return Ok(());
    }

    if !ctx.json && !ctx.quiet {
        println!("{}", status_info("Creating directory structure..."));
    }

    let report = ensure_tree(&layout).context("failed to create directory structure")?;

    if !ctx.json && !ctx.quiet {
        println!(
            "{}",
            status_pass("Created project-documents/private/ subdirectories")
        );
        println!();
        println!(
            "{}",
            status_info("Adding ai-project-guide as git submodule...")
        );
    }

    if let Err(e) = git.submodule_add(layout.root(), GUIDE_REPO_URL, SUBMODULE_PATH) {
        if !ctx.json {
            println!(
                "{}",
                status_fail("Failed to add submodule. This might happen if:")
            );
            println!("  \u{2022} You don't have internet connection");
            println!("  \u{2022} GitHub is unreachable");
            println!("  \u{2022} The submodule already exists");
            println!();
            println!("{}", status_info("Try manual setup:"));
            println!("  git submodule add {GUIDE_REPO_URL} {SUBMODULE_PATH}");
        }
        return Err(e).context("failed to add submodule");
    }

    if ctx.json {
        output_json(&serde_json::json!({
            "status": "installed",
            "root": layout.root().display().to_string(),
            "created": report.created,
            "existing": report.existing,
            "submodule": SUBMODULE_PATH,
        }));
    } else if !ctx.quiet {
        println!("{}", status_pass("Submodule added successfully!"));
        println!();
        println!("{}", status_pass("Setup complete!"));
        println!();
        println!("{}", status_info("Next steps:"));
        println!("  1. Commit the changes:");
        println!("       git add .");
        println!("       git commit -m 'Add ai-project-guide'");
        println!();
        println!("  2. To update guides later:");
        println!("       git submodule update --remote {SUBMODULE_PATH}");
        println!();
        println!("  3. Start using the framework:");
        println!("       \u{2022} Review: {SUBMODULE_PATH}/readme.md");
        println!(
            "       \u{2022} Process: {SUBMODULE_PATH}/project-guides/guide.ai-project.000-process.md"
        );
        println!("       \u{2022} Your work goes in: project-documents/private/");
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guides_core::layout::{GuideLayout, PRIVATE_SUBDIRS};
    use guides_git::script::ScriptedGit;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_ctx() -> RuntimeContext {
        RuntimeContext {
            json: false,
            verbose: false,
            quiet: true,
        }
    }

    #[test]
    fn creates_tree_and_registers_submodule() {
        let tmp = TempDir::new().unwrap();
        let git = ScriptedGit::healthy(tmp.path());

        run(&quiet_ctx(), &git).unwrap();

        let layout = GuideLayout::new(tmp.path());
        for name in PRIVATE_SUBDIRS {
            assert!(layout.private_subdir(name).is_dir(), "missing {name}");
        }
        assert!(layout.gitkeep_path().is_file());
        assert!(git
            .calls()
            .contains(&format!("submodule-add {GUIDE_REPO_URL} {SUBMODULE_PATH}")));
    }

    #[test]
    fn already_installed_succeeds_without_touching_anything() {
        let tmp = TempDir::new().unwrap();
        let layout = GuideLayout::new(tmp.path());
        fs::create_dir_all(layout.submodule_dir()).unwrap();
        let git = ScriptedGit::healthy(tmp.path());

        run(&quiet_ctx(), &git).unwrap();

        // The guard runs before the scaffold: no directories, no registration.
        assert!(!layout.private_dir().exists());
        assert!(!git.calls().iter().any(|c| c.starts_with("submodule-add")));
    }

    #[test]
    fn failed_registration_keeps_scaffold_and_errors() {
        let tmp = TempDir::new().unwrap();
        let git = ScriptedGit::healthy(tmp.path())
            .failing_submodule_add("fatal: unable to access remote");

        let err = run(&quiet_ctx(), &git).unwrap_err();
        assert!(err.to_string().contains("failed to add submodule"));

        // Directories created before the failure stay in place.
        let layout = GuideLayout::new(tmp.path());
        assert!(layout.private_subdir("tasks").is_dir());
    }
}
