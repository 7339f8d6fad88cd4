//! `apg` -- ai-project-guide setup CLI.
//!
//! This is the entry point. It parses CLI arguments with clap, resolves the
//! runtime context, and dispatches to command handlers. All git work goes
//! through [`SystemGit`] so the handlers stay testable against a scripted
//! client.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use guides_git::client::SystemGit;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Build runtime context from global args
    let ctx = RuntimeContext::from_global_args(&cli.global);

    // Set up logging based on verbosity
    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("apg=debug,guides_git=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let git = SystemGit::new();

    // Dispatch to command handler
    let result = match cli.command {
        Some(Commands::Bootstrap) => commands::bootstrap::run(&ctx, &git),
        Some(Commands::Setup(args)) => commands::setup::run(&ctx, &git, &args),
        Some(Commands::Doctor) => commands::doctor::run(&ctx, &git),
        Some(Commands::Version) => commands::version::run(&ctx),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        // For JSON mode, output error as JSON
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
