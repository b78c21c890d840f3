//! Filesystem helpers for ide-bridge.
//!
//! Config files are only ever replaced whole, through [`atomic_write_file`],
//! so an interrupted write never leaves a half-written `.vscode` file behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
