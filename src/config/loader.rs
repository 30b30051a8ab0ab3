//! Configuration loading

use anyhow::{Context, Result};

use super::paths;
use super::schema::Config;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the root config file. A missing file is not
    /// an error; it yields the defaults.
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Built-in defaults, used when the config file is unreadable.
    pub fn load_defaults() -> Config {
        Config::default()
    }
}
