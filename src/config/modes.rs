//! Transfer mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of resource a request targets.
///
/// The mode decides the timeout budget, the fallback filename, and whether the
/// server delivers a raw media file or an archive. It is fixed for the lifetime
/// of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Download one media item (default).
    #[default]
    Single,
    /// Download a whole playlist, delivered as one archive.
    Collection,
}

impl TransferMode {
    /// Filename used when the server does not suggest one.
    pub fn default_filename(&self) -> &'static str {
        match self {
            TransferMode::Single => "video.mp4",
            TransferMode::Collection => "playlist.zip",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::Single => write!(f, "single"),
            TransferMode::Collection => write!(f, "collection"),
        }
    }
}

impl FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(TransferMode::Single),
            "collection" | "playlist" => Ok(TransferMode::Collection),
            _ => Err(format!("Unknown transfer mode: {}", s)),
        }
    }
}
