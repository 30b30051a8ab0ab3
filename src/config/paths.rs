//! Configuration file locations

use std::path::PathBuf;

use directories::ProjectDirs;

/// Platform configuration directory for this tool.
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("", "", "svcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path of the root configuration file.
pub fn root_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}
