//! Persisting transfer bodies to local storage.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Writes a completed transfer body to local storage.
///
/// Single items and collections are treated identically at this layer; a
/// collection body is already an archive when it arrives.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    /// Write the complete body under the given filename, returning the
    /// resulting path.
    async fn persist(&self, filename: &str, body: &[u8]) -> Result<PathBuf>;
}

/// Sink that writes files into a fixed output directory.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Reject names that would escape the output directory.
///
/// The server-suggested name is used as-is otherwise.
fn check_filename(name: &str) -> Result<()> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(name.to_string()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(name.to_string()));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(name.to_string()));
    }

    if name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "empty or whitespace-only".to_string(),
        ));
    }

    Ok(())
}

#[async_trait]
impl PersistenceSink for DirectorySink {
    async fn persist(&self, filename: &str, body: &[u8]) -> Result<PathBuf> {
        check_filename(filename)?;

        fs::create_dir_all(&self.root).await?;

        let path = self.root.join(filename);
        let mut file = File::create(&path).await?;
        file.write_all(body).await?;
        file.flush().await?;

        tracing::debug!("Wrote {} bytes to {}", body.len(), path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_persist_writes_full_body() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        let path = sink.persist("clip.mp4", b"binary body").await.unwrap();

        assert_eq!(path, dir.path().join("clip.mp4"));
        assert_eq!(std::fs::read(&path).unwrap(), b"binary body");
    }

    #[tokio::test]
    async fn test_persist_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out");
        let sink = DirectorySink::new(&nested);

        sink.persist("playlist.zip", b"zip").await.unwrap();

        assert!(nested.join("playlist.zip").exists());
    }

    #[tokio::test]
    async fn test_persist_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        for name in ["../evil.mp4", "a/b.mp4", "a\\b.mp4", "nul\0.mp4", "  "] {
            let err = sink.persist(name, b"x").await.unwrap_err();
            assert!(matches!(err, Error::InvalidFilename(_)), "name: {:?}", name);
        }
    }
}
