//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, TransferMode};

/// vidfetch CLI.
#[derive(Parser, Debug)]
#[command(
    name = "vidfetch",
    version,
    about = "Download videos and playlists through a media extraction server",
    long_about = "A CLI client for a media extraction server.\n\n\
                  Probes a URL for metadata, then downloads a single video or a whole\n\
                  playlist delivered as one ZIP archive."
)]
pub struct Args {
    /// Video or playlist URL to fetch.
    pub url: Option<String>,

    /// Transfer mode.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Only probe the resource and print its metadata.
    #[arg(long)]
    pub info: bool,

    /// Directory where downloaded files are written.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Base URL of the extraction API.
    #[arg(long = "api-url", env = "VIDFETCH_API_URL")]
    pub api_url: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide the progress spinner.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI transfer mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Download one media item.
    Single,
    /// Download a whole playlist as one archive.
    Collection,
}

impl From<ModeArg> for TransferMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => TransferMode::Single,
            ModeArg::Collection => TransferMode::Collection,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(api_url) = &self.api_url {
            config.server.base_url = api_url.clone();
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        if let Some(dir) = &self.output_directory {
            config.options.output_directory = Some(dir.clone());
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_config() {
        let args = Args::parse_from([
            "vidfetch",
            "https://example.com/v",
            "--mode",
            "collection",
            "--api-url",
            "https://dl.example.com/api",
            "--quiet",
        ]);
        let mut config = Config::default();

        args.merge_into_config(&mut config);

        assert_eq!(config.options.mode, TransferMode::Collection);
        assert_eq!(config.server.base_url, "https://dl.example.com/api");
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_merge_keeps_config_defaults() {
        let args = Args::parse_from(["vidfetch", "https://example.com/v"]);
        let mut config = Config::default();

        args.merge_into_config(&mut config);

        assert_eq!(config.options.mode, TransferMode::Single);
        assert_eq!(config.server.base_url, "http://localhost:5000/api");
        assert!(config.options.show_progress);
    }
}
