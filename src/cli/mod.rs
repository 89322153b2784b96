//! CLI interface for approxmatch
//!
//! Provides the `match`, `distance` and `check` commands.

pub mod args;
pub mod commands;
pub mod logging;

pub use args::{Cli, Commands, RunArgs};
pub use logging::init_tracing;
