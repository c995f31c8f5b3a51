//! Chat backend access and per-turn task management.
//!
//! A turn is one POST to the backend's `/chat` endpoint. Each turn runs in its
//! own Tokio task and reports back over a channel, so the UI thread never
//! blocks on the network.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::{ChatReply, ChatRequest};
use crate::utils::url::chat_endpoint;

/// Everything that can go wrong during a turn. Callers treat all variants the
/// same way; the distinction exists for diagnostics.
#[derive(Debug)]
pub enum ChatError {
    /// No base URL was configured.
    MissingBaseUrl,
    /// The request could not be sent or the body could not be read.
    Network(reqwest::Error),
    /// The backend answered with a non-success status.
    Status(u16),
    /// The body was not `{"response": "<string>"}`.
    Decode(serde_json::Error),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::MissingBaseUrl => write!(f, "no chat backend base URL is configured"),
            ChatError::Network(err) => write!(f, "network error: {err}"),
            ChatError::Status(code) => write!(f, "backend returned HTTP {code}"),
            ChatError::Decode(err) => write!(f, "malformed backend response: {err}"),
        }
    }
}

impl StdError for ChatError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ChatError::Network(err) => Some(err),
            ChatError::Decode(err) => Some(err),
            ChatError::MissingBaseUrl | ChatError::Status(_) => None,
        }
    }
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and return the raw reply text.
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}

/// Talks to the real backend over HTTP.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpChatBackend {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self) -> Option<String> {
        self.base_url.as_deref().map(chat_endpoint)
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let url = self.endpoint().ok_or(ChatError::MissingBaseUrl)?;
        debug!(%url, bytes = message.len(), "sending chat turn");

        let request = ChatRequest {
            message: message.to_string(),
        };
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(ChatError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(ChatError::Network)?;
        let reply: ChatReply = serde_json::from_slice(&body).map_err(ChatError::Decode)?;
        debug!(bytes = reply.response.len(), "chat turn answered");
        Ok(reply.response)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRequest {
    pub turn_id: u64,
    /// Raw input as typed, before tag filtering.
    pub message: String,
}

#[derive(Debug)]
pub struct TurnCompletion {
    pub turn_id: u64,
    pub result: Result<String, ChatError>,
}

/// Run a turn to completion on the current task.
pub async fn run_turn(backend: &dyn ChatBackend, request: TurnRequest) -> TurnCompletion {
    let result = backend.send(&request.message).await;
    TurnCompletion {
        turn_id: request.turn_id,
        result,
    }
}

/// Spawns turns and funnels their completions into one receiver.
///
/// Turns are independent: nothing serializes, de-duplicates, or times them
/// out, so completions arrive in whatever order the backend answers.
#[derive(Clone)]
pub struct ChatTurnService {
    backend: Arc<dyn ChatBackend>,
    tx: mpsc::UnboundedSender<TurnCompletion>,
    cancel_token: CancellationToken,
}

impl ChatTurnService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> (Self, mpsc::UnboundedReceiver<TurnCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                backend,
                tx,
                cancel_token: CancellationToken::new(),
            },
            rx,
        )
    }

    pub fn spawn_turn(&self, request: TurnRequest) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let cancel_token = self.cancel_token.clone();
        tokio::spawn(async move {
            let turn_id = request.turn_id;
            tokio::select! {
                completion = run_turn(backend.as_ref(), request) => {
                    let _ = tx.send(completion);
                }
                _ = cancel_token.cancelled() => {
                    debug!(turn_id, "turn abandoned at shutdown");
                }
            }
        });
    }

    /// Abandon every outstanding turn. Used when the interface exits.
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
