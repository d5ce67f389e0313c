//! The probe/download state machine.

use std::path::PathBuf;
use std::sync::Mutex;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::api::types::{
    CollectionDownloadPayload, ProbeInfo, ProbePayload, SingleDownloadPayload,
};
use crate::config::validation::validate_identifier;
use crate::config::TransferMode;
use crate::download::status::{OrchestratorStatus, Phase};
use crate::error::{Error, Result};
use crate::fs::sink::PersistenceSink;
use crate::transfer::{budget_for, Endpoint, TransferExecutor, TransferOutcome, PROBE_BUDGET};

/// One user action: which resource to fetch and how.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub identifier: String,
    pub mode: TransferMode,
}

impl ResourceRequest {
    pub fn new(identifier: impl Into<String>, mode: TransferMode) -> Self {
        Self {
            identifier: identifier.into(),
            mode,
        }
    }
}

/// A file written by a completed download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// The operation currently owning status and the wire.
struct ActiveOp {
    token: CancellationToken,
    generation: u64,
}

/// Sequences probe, transfer, and persistence for one resource at a time.
///
/// At most one operation is in flight per instance. A new `probe` or
/// `download` call cancels the in-flight exchange and takes ownership of the
/// observable status; the superseded operation never publishes a terminal
/// state. Status transitions are strictly ordered and published over a watch
/// channel.
pub struct Orchestrator<E, S> {
    executor: E,
    sink: S,
    status_tx: watch::Sender<OrchestratorStatus>,
    active: Mutex<ActiveOp>,
}

impl<E: TransferExecutor, S: PersistenceSink> Orchestrator<E, S> {
    pub fn new(executor: E, sink: S) -> Self {
        let (status_tx, _) = watch::channel(OrchestratorStatus::idle());
        Self {
            executor,
            sink,
            status_tx,
            active: Mutex::new(ActiveOp {
                token: CancellationToken::new(),
                generation: 0,
            }),
        }
    }

    /// Subscribe to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<OrchestratorStatus> {
        self.status_tx.subscribe()
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> OrchestratorStatus {
        self.status_tx.borrow().clone()
    }

    /// Cancel the in-flight operation, if any.
    pub fn cancel(&self) {
        self.active.lock().unwrap().token.cancel();
    }

    /// Start a new operation, cancelling whatever was in flight.
    fn begin(&self) -> (CancellationToken, u64) {
        let mut active = self.active.lock().unwrap();
        active.token.cancel();
        active.token = CancellationToken::new();
        active.generation += 1;
        (active.token.clone(), active.generation)
    }

    /// Publish a transition unless a newer operation took over.
    fn publish(&self, generation: u64, status: OrchestratorStatus) {
        let active = self.active.lock().unwrap();
        if active.generation == generation {
            self.status_tx.send_replace(status);
        }
    }

    /// Fetch descriptive metadata for a resource without transferring it.
    pub async fn probe(&self, request: &ResourceRequest) -> Result<ProbeInfo> {
        if let Err(e) = validate_identifier(&request.identifier) {
            // Local validation never touches the wire or the in-flight op.
            self.status_tx
                .send_replace(OrchestratorStatus::new(Phase::Failed, e.to_string()));
            return Err(e);
        }

        let (token, generation) = self.begin();
        self.publish(
            generation,
            OrchestratorStatus::new(Phase::Probing, "Fetching media info..."),
        );

        let payload = serde_json::to_value(ProbePayload {
            identifier: &request.identifier,
            mode: request.mode,
        })?;

        let outcome = self
            .executor
            .execute(Endpoint::Probe, payload, PROBE_BUDGET, token)
            .await;

        match outcome {
            TransferOutcome::Success { body, .. } => {
                match serde_json::from_slice::<ProbeInfo>(&body) {
                    Ok(info) => {
                        self.publish(
                            generation,
                            OrchestratorStatus::new(Phase::Succeeded, preview_message(&info)),
                        );
                        Ok(info)
                    }
                    Err(e) => {
                        tracing::warn!("Unparseable probe response: {}", e);
                        let message = Endpoint::Probe.generic_error();
                        self.publish(generation, OrchestratorStatus::new(Phase::Failed, message));
                        Err(Error::Api(message.to_string()))
                    }
                }
            }
            TransferOutcome::TimedOut => {
                let message = "Timed out fetching media info. Please try again.";
                self.publish(generation, OrchestratorStatus::new(Phase::Failed, message));
                Err(Error::Timeout(message.to_string()))
            }
            TransferOutcome::Cancelled => {
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, "Cancelled"),
                );
                Err(Error::Cancelled)
            }
            TransferOutcome::ServerError { message } => {
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, message.clone()),
                );
                Err(Error::Server(message))
            }
            TransferOutcome::NetworkError { message } => {
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, message.clone()),
                );
                Err(Error::Network(message))
            }
        }
    }

    /// Transfer a resource and persist the response body.
    pub async fn download(&self, request: &ResourceRequest) -> Result<SavedFile> {
        if let Err(e) = validate_identifier(&request.identifier) {
            self.status_tx
                .send_replace(OrchestratorStatus::new(Phase::Failed, e.to_string()));
            return Err(e);
        }

        let (token, generation) = self.begin();
        self.publish(
            generation,
            OrchestratorStatus::new(Phase::Downloading, progress_message(request.mode)),
        );

        let (endpoint, payload) = match request.mode {
            TransferMode::Single => (
                Endpoint::DownloadSingle,
                serde_json::to_value(SingleDownloadPayload {
                    identifier: &request.identifier,
                    mode: request.mode,
                })?,
            ),
            TransferMode::Collection => (
                Endpoint::DownloadCollection,
                serde_json::to_value(CollectionDownloadPayload {
                    identifier: &request.identifier,
                })?,
            ),
        };

        let outcome = self
            .executor
            .execute(endpoint, payload, budget_for(request.mode), token)
            .await;

        match outcome {
            TransferOutcome::Success { filename, body } => {
                match self.sink.persist(&filename, &body).await {
                    Ok(path) => {
                        self.publish(
                            generation,
                            OrchestratorStatus::new(
                                Phase::Succeeded,
                                success_message(request.mode, &filename),
                            ),
                        );
                        Ok(SavedFile {
                            filename,
                            path,
                            bytes: body.len() as u64,
                        })
                    }
                    Err(e) => {
                        self.publish(
                            generation,
                            OrchestratorStatus::new(Phase::Failed, e.to_string()),
                        );
                        Err(e)
                    }
                }
            }
            TransferOutcome::TimedOut => {
                let message = timeout_message(request.mode);
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, message.clone()),
                );
                Err(Error::Timeout(message))
            }
            TransferOutcome::Cancelled => {
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, "Download cancelled"),
                );
                Err(Error::Cancelled)
            }
            TransferOutcome::ServerError { message } => {
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, message.clone()),
                );
                Err(Error::Server(message))
            }
            TransferOutcome::NetworkError { message } => {
                self.publish(
                    generation,
                    OrchestratorStatus::new(Phase::Failed, message.clone()),
                );
                Err(Error::Network(message))
            }
        }
    }
}

fn progress_message(mode: TransferMode) -> &'static str {
    match mode {
        TransferMode::Single => {
            "Downloading video... this may take a while for very long videos."
        }
        TransferMode::Collection => "Downloading entire playlist... this may take a while.",
    }
}

fn success_message(mode: TransferMode, filename: &str) -> String {
    match mode {
        TransferMode::Single => format!("Video saved as {}", filename),
        TransferMode::Collection => format!("Playlist archive saved as {}", filename),
    }
}

fn timeout_message(mode: TransferMode) -> String {
    match mode {
        TransferMode::Single => {
            "Download timed out. The video may be too long or your connection is slow. \
             Please try a shorter video."
        }
        TransferMode::Collection => {
            "Download timed out. The playlist may be too large or your connection is slow. \
             Please try a smaller playlist."
        }
    }
    .to_string()
}

fn preview_message(info: &ProbeInfo) -> String {
    let title = info.title.as_deref().unwrap_or("(untitled)");
    match info.kind {
        TransferMode::Single => format!("Found: {}", title),
        TransferMode::Collection => format!(
            "Found: {} ({} videos)",
            title,
            info.video_count.unwrap_or(0)
        ),
    }
}
