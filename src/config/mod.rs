//! Configuration module
//!
//! YAML configuration for the CLI, all fields optional with sensible
//! defaults. CLI flags override config values; config overrides the
//! built-in defaults.

mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::Config;
