//! Telegram Bot API client
//!
//! One `sendMessage` POST per call, no retries. Every failure is logged and
//! returned as a [`SendError`]; nothing panics or propagates past the caller.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::settings::{load_settings, ConfigError};

/// Client-side timeout for the whole request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Rendering mode requested for message text
pub const PARSE_MODE: &str = "HTML";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Connection(String),
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to send to Telegram: {0}")]
    Transport(#[from] TransportError),
    #[error("Telegram API returned HTTP {status}: {description}")]
    Status { status: u16, description: String },
    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SendError {
    /// One-line report for the console
    pub fn user_message(&self) -> String {
        match self {
            SendError::Config(e) => format!("❌ Configuration error: {}", e),
            SendError::File { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                format!("❌ File not found: {}", path)
            }
            SendError::File { path, source } => {
                format!("❌ Failed to read file {}: {}", path, source)
            }
            other => format!("❌ {}", other),
        }
    }
}

/// Status and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP, kept behind a trait so delivery can be exercised offline
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn post_json(&self, url: &str, body: &Value, timeout: Duration)
        -> Result<HttpReply, TransportError>;
}

/// Blocking HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(body)
            .send()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}

/// The request URL carries the bot token, so it is stripped from errors
fn transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(error_chain(&error.without_url()))
    }
}

/// An error's message followed by each of its causes
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some layers repeat their cause in their own message
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Error payload returned by the Bot API on failure
#[derive(Debug, Deserialize)]
struct ApiError {
    description: Option<String>,
}

/// Sends text messages to the configured chat
pub struct Notifier<T: Transport = HttpTransport> {
    config_path: PathBuf,
    transport: T,
}

impl Notifier<HttpTransport> {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self::with_transport(config_path, HttpTransport::new())
    }
}

impl<T: Transport> Notifier<T> {
    pub fn with_transport(config_path: impl Into<PathBuf>, transport: T) -> Self {
        Self {
            config_path: config_path.into(),
            transport,
        }
    }

    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// Send `text` to the configured chat
    ///
    /// Settings are re-read on every call. Missing or placeholder
    /// credentials abort before any request is made.
    pub fn send_message(&self, text: &str) -> Result<(), SendError> {
        let result = self.try_send(text);
        match &result {
            Ok(()) => log::info!("Message delivered to Telegram"),
            Err(e) => log::error!("{}", e),
        }
        result
    }

    fn try_send(&self, text: &str) -> Result<(), SendError> {
        let settings = load_settings(&self.config_path)?;
        let credentials = settings.credentials()?;

        let url = format!(
            "{}/bot{}/sendMessage",
            settings.api_base(),
            credentials.bot_token
        );
        let payload = json!({
            "chat_id": credentials.chat_id,
            "text": text,
            "parse_mode": PARSE_MODE,
        });

        log::debug!(
            "POST {}/bot<redacted>/sendMessage ({} bytes of text)",
            settings.api_base(),
            text.len()
        );
        let reply = self.transport.post_json(&url, &payload, REQUEST_TIMEOUT)?;

        if reply.is_success() {
            Ok(())
        } else {
            Err(SendError::Status {
                status: reply.status,
                description: describe_failure(&reply.body),
            })
        }
    }
}

/// Pull the Bot API's `description` out of an error body, else the raw body
fn describe_failure(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .and_then(|e| e.description)
        .unwrap_or_else(|| body.trim().to_string())
}
