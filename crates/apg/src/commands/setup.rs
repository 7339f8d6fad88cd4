//! `apg setup` -- set up or update the guide installation.
//!
//! Without flags this creates the work area and registers the submodule,
//! refusing to run over an existing installation. With `--update` it
//! refreshes the already-registered submodule from its remote and reports
//! whether anything changed.

use anyhow::{bail, Context, Result};
use guides_core::layout::{GUIDE_REPO_URL, SUBMODULE_PATH};
use guides_core::scaffold::ensure_tree;
use guides_git::client::GitClient;
use guides_ui::styles::{render_muted, status_fail, status_info, status_pass, status_warn};

use crate::cli::SetupArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `apg setup` command.
pub fn run(ctx: &RuntimeContext, git: &dyn GitClient, args: &SetupArgs) -> Result<()> {
    if args.update {
        run_update(ctx, git)
    } else {
        run_setup(ctx, git)
    }
}

/// Create the work area and register the submodule.
fn run_setup(ctx: &RuntimeContext, git: &dyn GitClient) -> Result<()> {
    let layout = ctx.resolve_layout(git)?;

    if !ctx.json && !ctx.quiet {
        println!("{}", status_info("Setting up AI Project Guide..."));
        println!();
    }

    // Unlike bootstrap, an existing installation is an error here.
    if layout.is_installed() {
        if !ctx.json {
            println!(
                "{}",
                status_warn(&format!("Submodule already exists at {SUBMODULE_PATH}"))
            );
            println!(
                "{}",
                status_info("Use --update flag to update the submodule")
            );
        }
        bail!("already installed at {SUBMODULE_PATH}");
    }

    if !ctx.json && !ctx.quiet {
        println!("{}", status_info("Creating directory structure..."));
    }

    let report = ensure_tree(&layout).context("failed to create directory structure")?;

    if !ctx.json && !ctx.quiet {
        for rel in &report.created {
            println!("{}", status_pass(&format!("Created {rel}")));
        }
        for rel in &report.existing {
            println!("{}", render_muted(&format!("  Exists {rel}")));
        }
        if report.marker_refreshed {
            println!(
                "{}",
                status_pass("Refreshed project-documents/private/.gitkeep")
            );
        } else {
            println!(
                "{}",
                status_pass("Created project-documents/private/.gitkeep")
            );
        }
        println!();
        println!(
            "{}",
            status_info("Adding ai-project-guide as git submodule...")
        );
    }

    if let Err(e) = git.submodule_add(layout.root(), GUIDE_REPO_URL, SUBMODULE_PATH) {
        if !ctx.json {
            println!("{}", status_fail("Failed to add submodule"));
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
        println!("   \u{2022} Run: git commit -m 'Add ai-project-guide'");
        println!("   \u{2022} Update guides: apg setup --update");
        println!("   \u{2022} Or use: git submodule update --remote {SUBMODULE_PATH}");
        println!();
    }

    Ok(())
}

/// Update the already-registered submodule from its remote.
fn run_update(ctx: &RuntimeContext, git: &dyn GitClient) -> Result<()> {
    let layout = ctx.resolve_layout(git)?;

    if !ctx.json && !ctx.quiet {
        println!("{}", status_info("Updating AI Project Guide..."));
        println!();
    }

    if !layout.is_installed() {
        if !ctx.json {
            println!(
                "{}",
                status_fail(&format!("Submodule not found at {SUBMODULE_PATH}"))
            );
            println!(
                "{}",
                status_info("Run without --update flag to set up for the first time")
            );
        }
        bail!("no installation found at {SUBMODULE_PATH}");
    }

    if let Err(e) = git.submodule_update(layout.root(), SUBMODULE_PATH) {
        if !ctx.json {
            println!("{}", status_fail("Failed to update submodule"));
        }
        return Err(e).context("failed to update submodule");
    }

    let changes = git
        .status_of(layout.root(), SUBMODULE_PATH)
        .context("failed to read submodule status")?;

    if ctx.json {
        if changes.is_empty() {
            output_json(&serde_json::json!({ "status": "up-to-date" }));
        } else {
            output_json(&serde_json::json!({
                "status": "updated",
                "changes": changes,
            }));
        }
    } else if !ctx.quiet {
        println!("{}", status_pass("Submodule updated successfully!"));
        println!();
        if changes.is_empty() {
            println!("{}", status_pass("Already up to date!"));
        } else {
            println!("{}", status_info("Changes detected:"));
            println!("{changes}");
            println!(
                "{}",
                status_info("Commit the update with: git commit -am 'Update ai-project-guide'")
            );
        }
        println!();
    }

    Ok(())
}
