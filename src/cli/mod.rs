//! Command-Line Interface
//!
//! Subcommand implementations plus shared console output helpers.

pub mod commands;
pub mod output;
pub mod util;
