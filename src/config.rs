//! Configuration management for the validator and the Telegram sender.
//!
//! Handles:
//! - Command-line argument parsing for both binaries
//! - Locating the Telegram settings file
//! - Logger initialisation from the `--log-level` flag

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Default address list when neither `--email` nor `--file` is given
pub const DEFAULT_ADDRESS_FILE: &str = "data/emails.txt";

/// Settings file name looked up in the working and user config directories
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Command-line arguments for the email validator
#[derive(Debug, Parser)]
#[command(name = "email-validator")]
#[command(about = "Check email addresses and the MX records of their domains")]
#[command(version)]
pub struct ValidatorArgs {
    /// File with one email address per line
    #[arg(short, long, default_value = DEFAULT_ADDRESS_FILE)]
    pub file: PathBuf,

    /// Check a single email address instead of a file
    #[arg(short, long)]
    pub email: Option<String>,

    /// Save results and summary to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Where the validator takes its addresses from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSource {
    Single(String),
    File(PathBuf),
}

/// Validator configuration
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub source: AddressSource,
    pub output: Option<PathBuf>,
    pub log_level: String,
}

impl ValidatorConfig {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(ValidatorArgs::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: ValidatorArgs) -> Result<Self> {
        // A single address takes precedence over the file
        let source = match args.email {
            Some(email) => AddressSource::Single(email),
            None => AddressSource::File(args.file),
        };

        Ok(ValidatorConfig {
            source,
            output: args.output,
            log_level: args.log_level,
        })
    }
}

/// Command-line arguments for the Telegram sender
#[derive(Debug, Parser)]
#[command(name = "telegram-sender")]
#[command(about = "Send a message or a file's contents to a Telegram chat")]
#[command(version)]
pub struct SenderArgs {
    /// Message text
    #[arg(short, long)]
    pub message: Option<String>,

    /// Send the contents of this file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Settings file with a [telegram] section
    #[arg(short, long, env = "TELEGRAM_SENDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// What the sender should deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    File(PathBuf),
    Message(String),
    /// Built-in status message
    Test,
}

/// Sender configuration
#[derive(Debug, Clone)]
pub struct SenderConfig {
    pub payload: Payload,
    pub config_path: PathBuf,
    pub log_level: String,
}

impl SenderConfig {
    /// Create configuration from command-line arguments and environment
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(SenderArgs::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: SenderArgs) -> Result<Self> {
        // File wins over message, as the file usually holds a full report
        let payload = match (args.file, args.message) {
            (Some(file), _) => Payload::File(file),
            (None, Some(message)) => Payload::Message(message),
            (None, None) => Payload::Test,
        };

        let config_path = match args.config {
            Some(path) => path,
            None => {
                let user_config = dirs::config_dir()
                    .map(|dir| dir.join("email-validator").join(CONFIG_FILE_NAME));
                resolve_config_path(Path::new("."), user_config)
            }
        };

        Ok(SenderConfig {
            payload,
            config_path,
            log_level: args.log_level,
        })
    }
}

/// Pick the settings file: the working directory first, then the user
/// config directory, else the working directory path (reported later as
/// missing)
pub fn resolve_config_path(work_dir: &Path, user_config: Option<PathBuf>) -> PathBuf {
    let local = work_dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    match user_config {
        Some(path) if path.exists() => {
            log::debug!("Using user config {}", path.display());
            path
        }
        _ => local,
    }
}

/// Initialise env_logger with `level` as the default filter; `RUST_LOG`
/// still takes precedence.
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
