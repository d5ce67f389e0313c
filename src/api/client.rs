//! HTTP transfer executor for the extraction API.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client};
use tokio_util::sync::CancellationToken;

use crate::api::types::ErrorBody;
use crate::error::{Error, Result};
use crate::fs::naming::resolve_filename;
use crate::transfer::{Endpoint, TransferExecutor, TransferOutcome};

/// HTTP client for the extraction server.
pub struct HttpExecutor {
    client: Client,
    base_url: String,
}

impl HttpExecutor {
    /// Create an executor against the given API base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one request/response exchange and classify everything except
    /// timeout and cancellation, which the caller enforces around this future.
    async fn exchange(&self, endpoint: Endpoint, payload: &serde_json::Value) -> TransferOutcome {
        let url = format!("{}{}", self.base_url, endpoint.path());
        tracing::debug!("POST {}", url);

        let response = match self.client.post(&url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                return TransferOutcome::NetworkError {
                    message: e.to_string(),
                }
            }
        };

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return TransferOutcome::ServerError {
                message: error_message(&body, endpoint),
            };
        }

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let filename = resolve_filename(disposition.as_deref(), endpoint.filename_mode());

        // The body read stays inside the caller's timeout envelope.
        let mut stream = response.bytes_stream();
        let mut body = Vec::new();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => body.extend_from_slice(&chunk),
                Err(e) => {
                    return TransferOutcome::NetworkError {
                        message: e.to_string(),
                    }
                }
            }
        }

        tracing::debug!("Received {} bytes as '{}'", body.len(), filename);

        TransferOutcome::Success { filename, body }
    }
}

#[async_trait]
impl TransferExecutor for HttpExecutor {
    async fn execute(
        &self,
        endpoint: Endpoint,
        payload: serde_json::Value,
        budget: Duration,
        cancel: CancellationToken,
    ) -> TransferOutcome {
        // The timer is dropped together with the future on every exit path.
        tokio::select! {
            _ = cancel.cancelled() => TransferOutcome::Cancelled,
            result = tokio::time::timeout(budget, self.exchange(endpoint, &payload)) => {
                match result {
                    Ok(outcome) => outcome,
                    Err(_) => TransferOutcome::TimedOut,
                }
            }
        }
    }
}

/// Extract the structured `error` message from an error body, substituting
/// the endpoint's generic message when the body is not parseable.
fn error_message(body: &[u8], endpoint: Endpoint) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| endpoint.generic_error().to_string())
}
