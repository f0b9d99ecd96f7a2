//! Email Validator
//!
//! Checks email address syntax and the MX records of each address's domain,
//! and delivers text reports through a Telegram bot.
//!
//! This library provides:
//! - A permissive format filter and MX lookup per address
//! - A batch driver with console and file reporting
//! - A Telegram notifier driven by a TOML settings file
//! - Command-line configuration for both binaries

pub mod config;
pub mod notify;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::{SenderConfig, ValidatorConfig};
pub use notify::{load_settings, send_file, Notifier, SendError, TelegramSettings};
pub use validation::{check_address, run_batch, BatchReport, CheckResult, Outcome};
