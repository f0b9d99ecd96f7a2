//! Send a file's contents as a message.

use std::fs;
use std::path::Path;

use super::client::{Notifier, SendError, Transport};

/// Message body for a file: a header naming the file, a blank line, then
/// the content
pub fn file_message(path: &Path, content: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    format!("📄 File: {}\n\n{}", name, content)
}

/// Read `path` in full and send it through `notifier`
///
/// A file that cannot be read is reported and the notifier is not called.
pub fn send_file<T: Transport>(notifier: &Notifier<T>, path: &Path) -> Result<(), SendError> {
    let content = fs::read_to_string(path).map_err(|source| {
        log::error!("Failed to read {}: {}", path.display(), source);
        SendError::File {
            path: path.display().to_string(),
            source,
        }
    })?;

    notifier.send_message(&file_message(path, &content))
}
