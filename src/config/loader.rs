//! Configuration structures and loading logic.

use crate::config::modes::TransferMode;
use crate::error::{Error, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Extraction server connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the extraction API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Transfer mode (single, collection).
    #[serde(default)]
    pub mode: TransferMode,

    /// Directory where downloaded files are written.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Whether to show a progress spinner during transfers.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            mode: TransferMode::default(),
            output_directory: None,
            show_progress: true,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective output directory.
    ///
    /// Falls back to the user's download folder, then the working directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            })
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://localhost:5000/api");
        assert_eq!(config.options.mode, TransferMode::Single);
        assert!(config.options.show_progress);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            base_url = "https://dl.example.com/api"

            [options]
            mode = "collection"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "https://dl.example.com/api");
        assert_eq!(config.options.mode, TransferMode::Collection);
        assert!(config.options.output_directory.is_none());
    }

    #[test]
    fn test_explicit_output_directory_wins() {
        let mut config = Config::default();
        config.options.output_directory = Some(PathBuf::from("/tmp/media"));
        assert_eq!(config.output_directory(), PathBuf::from("/tmp/media"));
    }
}
