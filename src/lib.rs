//! vidfetch - a CLI client for a media extraction server.
//!
//! This library drives the client side of a download service: it probes a
//! resource for metadata, runs the transfer with a mode-dependent timeout
//! budget, classifies every failure, and persists the response body under the
//! server-suggested filename.
//!
//! # Features
//!
//! - Metadata probe with resource preview
//! - Single item and collection (playlist archive) downloads
//! - Mode-dependent timeout budgets enforced client-side
//! - Explicit cancellation; a newer request supersedes an in-flight one
//! - Observable status transitions over a watch channel
//!
//! # Example
//!
//! ```no_run
//! use vidfetch::{
//!     Config, DirectorySink, HttpExecutor, Orchestrator, ResourceRequest, TransferMode,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let executor = HttpExecutor::new(&config.server.base_url)?;
//!     let sink = DirectorySink::new(config.output_directory());
//!     let orchestrator = Orchestrator::new(executor, sink);
//!
//!     let request = ResourceRequest::new("https://example.com/watch?v=abc", TransferMode::Single);
//!     let saved = orchestrator.download(&request).await?;
//!     println!("saved {}", saved.path.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod transfer;

// Re-exports for convenience
pub use api::{HttpExecutor, ProbeInfo};
pub use config::{Config, TransferMode};
pub use download::{Orchestrator, OrchestratorStatus, Phase, ResourceRequest, SavedFile};
pub use error::{Error, Result};
pub use fs::{DirectorySink, PersistenceSink};
pub use transfer::{budget_for, Endpoint, TransferExecutor, TransferOutcome};
