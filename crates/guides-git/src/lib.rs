//! Git integration for the ai-project-guide setup tool.
//!
//! This crate wraps `git` subprocess execution and exposes the narrow set of
//! operations the tool performs behind the [`client::GitClient`] trait, with
//! a real implementation ([`client::SystemGit`]) and a scripted one for tests
//! ([`script::ScriptedGit`]).

pub mod client;
pub mod commands;
pub mod script;
