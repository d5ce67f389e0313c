//! Transfer executor contract.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::TransferMode;
use crate::transfer::outcome::TransferOutcome;

/// The server endpoints a transfer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Metadata probe; returns a small JSON document.
    Probe,
    /// Single item download; returns a binary media body.
    DownloadSingle,
    /// Collection download; returns a binary archive body.
    DownloadCollection,
}

impl Endpoint {
    /// Path below the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Probe => "/info",
            Endpoint::DownloadSingle => "/download",
            Endpoint::DownloadCollection => "/download-playlist",
        }
    }

    /// Message substituted when an error body carries no usable message.
    pub fn generic_error(&self) -> &'static str {
        match self {
            Endpoint::Probe => "Failed to fetch video info",
            Endpoint::DownloadSingle => "Failed to download video",
            Endpoint::DownloadCollection => "Failed to download playlist",
        }
    }

    /// Mode used for the fallback filename of this endpoint's body.
    pub fn filename_mode(&self) -> TransferMode {
        match self {
            Endpoint::Probe | Endpoint::DownloadSingle => TransferMode::Single,
            Endpoint::DownloadCollection => TransferMode::Collection,
        }
    }
}

/// Performs one cancellable request/response exchange against the server.
///
/// Implementations must honor the budget and the cancellation token on every
/// path, and must classify the result into exactly one [`TransferOutcome`].
#[async_trait]
pub trait TransferExecutor: Send + Sync {
    async fn execute(
        &self,
        endpoint: Endpoint,
        payload: serde_json::Value,
        budget: Duration,
        cancel: CancellationToken,
    ) -> TransferOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Probe.path(), "/info");
        assert_eq!(Endpoint::DownloadSingle.path(), "/download");
        assert_eq!(Endpoint::DownloadCollection.path(), "/download-playlist");
    }

    #[test]
    fn test_filename_mode_follows_endpoint() {
        assert_eq!(
            Endpoint::DownloadCollection.filename_mode(),
            TransferMode::Collection
        );
        assert_eq!(
            Endpoint::DownloadSingle.filename_mode(),
            TransferMode::Single
        );
    }
}
