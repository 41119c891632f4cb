//! High-level operations behind the command line.
//!
//! This module orchestrates the store, the catalog and the analytics: saving a
//! composed entry, the confirmed reset, rendering results for the terminal and
//! dispatching parsed commands.

mod commands;
mod entry;
pub mod render;

pub use commands::{run_command, CommandContext};
pub use entry::{reset_with_confirmation, save_entry, SavedEntry};
