//! Command handlers for the `apg` CLI.
//!
//! Each submodule implements one subcommand with a `run` function taking the
//! [`RuntimeContext`](crate::context::RuntimeContext) and its parsed args.

pub mod bootstrap;
pub mod completion;
pub mod doctor;
pub mod setup;
pub mod version;
