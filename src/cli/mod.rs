//! CLI command handling module
//!
//! Handles the subcommand implementations; argument parsing lives in the
//! binary.

mod commands;
mod logging;

pub use commands::{describe_binding, get_binding};
pub use logging::init_logging;
