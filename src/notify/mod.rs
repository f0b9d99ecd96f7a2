//! Telegram Notifier
//!
//! Settings loading, the Bot API client and the file adapter.

pub mod client;
pub mod file;
pub mod settings;

pub use client::{HttpReply, HttpTransport, Notifier, SendError, Transport, TransportError};
pub use file::{file_message, send_file};
pub use settings::{load_settings, ConfigError, Credentials, TelegramSettings};
