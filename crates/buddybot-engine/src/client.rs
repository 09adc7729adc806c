//! Client for the remote `/chat` endpoint.
//!
//! The service is opaque: one JSON request carrying the user's text, one JSON
//! response carrying a Markdown reply. Every failure, whether transport, HTTP
//! status or decoding, collapses into [`ChatServiceUnavailable`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Request body sent to the chat endpoint.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Response body returned by the chat endpoint.
#[derive(Debug, Deserialize)]
struct ChatReply {
    reply: String,
}

/// The chat service could not produce a reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("chat service unavailable: {detail}")]
pub struct ChatServiceUnavailable {
    detail: String,
}

impl ChatServiceUnavailable {
    /// Create an error with a human-readable cause (for logs only).
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// The underlying cause.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Error building the HTTP client.
#[derive(Debug, thiserror::Error)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// A request/reply chat backend.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one message and wait for the reply.
    async fn send(&self, message: &str) -> Result<String, ChatServiceUnavailable>;
}

/// [`ChatService`] backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: Client,
    endpoint: String,
}

impl HttpChatClient {
    /// Create a client for the given endpoint URL.
    ///
    /// With `timeout` set to `None` the transport default applies.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientBuildError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ClientBuildError> {
        Self::new(
            config.endpoint.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// The endpoint URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatService for HttpChatClient {
    async fn send(&self, message: &str) -> Result<String, ChatServiceUnavailable> {
        debug!(endpoint = %self.endpoint, len = message.len(), "posting chat message");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| ChatServiceUnavailable::new(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatServiceUnavailable::new(format!(
                "server responded with status: {status}"
            )));
        }

        let body: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatServiceUnavailable::new(format!("invalid reply body: {e}")))?;

        Ok(body.reply)
    }
}
