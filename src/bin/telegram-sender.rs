use anyhow::Result;
use chrono::Local;

use email_validator::config::{init_logging, Payload, SenderConfig};
use email_validator::notify::{send_file, Notifier};

fn main() -> Result<()> {
    let config = SenderConfig::from_args_and_env()?;
    init_logging(&config.log_level);

    let notifier = Notifier::new(&config.config_path);
    log::debug!("Using settings from {}", notifier.config_path().display());

    let result = match &config.payload {
        Payload::File(path) => send_file(&notifier, path),
        Payload::Message(text) => notifier.send_message(text),
        Payload::Test => notifier.send_message(&test_message()),
    };

    // Delivery failures are reported, not turned into an exit status
    match result {
        Ok(()) => println!("✅ Message sent to Telegram"),
        Err(e) => println!("{}", e.user_message()),
    }

    Ok(())
}

/// Status message sent when neither a message nor a file is given
fn test_message() -> String {
    let now = Local::now();
    format!(
        "🚀 TEST MESSAGE FROM EMAIL VALIDATOR\n\
         \n\
         📅 Date: {}\n\
         ⏰ Time: {}\n\
         \n\
         ✅ System is working\n\
         \n\
         📊 SYSTEM STATUS:\n\
         • MX record check: working\n\
         • Telegram delivery: working\n\
         \n\
         🔧 FEATURES:\n\
         1. Email address checks\n\
         2. Messages through a Telegram bot",
        now.format("%d.%m.%Y"),
        now.format("%H:%M:%S")
    )
}
