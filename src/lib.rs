//! ide-bridge: use a VS Code derivative as the external script editor of a
//! Unity project.
//!
//! The library finds installed editors, builds the command line that opens
//! one at a file position, and keeps a project's `.vscode` files converged
//! with what the editor needs.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launch;
pub mod reconcile;
pub mod vscode;

#[cfg(test)]
mod test_support;
