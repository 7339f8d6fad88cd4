//! Terminal UI components for the ai-project-guide setup tool.
//!
//! Provides Ayu-themed color styling and terminal detection for CLI output.

pub mod styles;
pub mod terminal;
