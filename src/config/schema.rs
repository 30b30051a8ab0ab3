//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for
//! serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace used when no `-n` flag is given
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Suppress header rows in list tables
    #[serde(default)]
    pub no_headers: bool,
}

fn default_namespace() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            output: OutputConfig::default(),
        }
    }
}
