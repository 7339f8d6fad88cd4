//! Core types for the ai-project-guide scaffold.
//!
//! This crate knows the canonical layout of `project-documents/` and how to
//! materialize the private work area on disk. It performs no git operations.

pub mod layout;
pub mod scaffold;
