//! Clap CLI definitions for the `apg` command.
//!
//! This module defines the complete CLI structure using clap 4 derive macros.

use clap::{Args, Parser, Subcommand};

/// apg -- set up the ai-project-guide framework in a git repository.
#[derive(Parser, Debug)]
#[command(
    name = "apg",
    about = "Set up ai-project-guide in a git repository",
    long_about = "Scaffolds the project-documents/ work area and registers the \
        ai-project-guide documentation repository as a git submodule.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// One-shot setup: scaffold the work area and add the guide submodule.
    ///
    /// Succeeds quietly when the guide is already installed, printing update
    /// instructions instead of failing.
    Bootstrap,

    /// Set up or update the guide installation.
    Setup(SetupArgs),

    /// Check the environment and installation health.
    Doctor,

    /// Print version, build info, and platform.
    Version,

    /// Generate shell completions.
    Completion(CompletionArgs),
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Arguments for `apg setup`.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Update the existing submodule instead of creating a new installation.
    #[arg(long)]
    pub update: bool,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `apg completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
