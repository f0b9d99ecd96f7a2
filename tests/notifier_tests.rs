//! Notifier behaviour against a recording transport
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use email_validator::notify::{
    send_file, ConfigError, HttpReply, Notifier, SendError, Transport, TransportError,
};
use serde_json::Value;

#[derive(Debug, Clone)]
struct Request {
    url: String,
    body: Value,
    timeout: Duration,
}

/// Transport that records requests and replies with a canned result
struct RecordingTransport {
    reply: fn() -> Result<HttpReply, TransportError>,
    requests: RefCell<Vec<Request>>,
}

impl RecordingTransport {
    fn replying(reply: fn() -> Result<HttpReply, TransportError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for &RecordingTransport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(Request {
            url: url.to_string(),
            body: body.clone(),
            timeout,
        });
        (self.reply)()
    }
}

fn ok_reply() -> Result<HttpReply, TransportError> {
    Ok(HttpReply {
        status: 200,
        body: r#"{"ok":true,"result":{}}"#.to_string(),
    })
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, content).expect("write config");
    path
}

const CONFIG: &str = r#"
[telegram]
bot_token = "123456:TEST"
chat_id = "987654"
"#;

#[test]
fn test_message_is_posted_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), CONFIG);
    let transport = RecordingTransport::replying(ok_reply);

    let notifier = Notifier::with_transport(config, &transport);
    notifier.send_message("<b>report</b>").expect("send");

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.url,
        "https://api.telegram.org/bot123456:TEST/sendMessage"
    );
    assert_eq!(request.body["chat_id"], "987654");
    assert_eq!(request.body["text"], "<b>report</b>");
    assert_eq!(request.body["parse_mode"], "HTML");
    assert_eq!(request.timeout, Duration::from_secs(10));
}

#[test]
fn test_unset_token_makes_no_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(
        dir.path(),
        "[telegram]\nbot_token = \"your_bot_token_here\"\nchat_id = \"987654\"\n",
    );
    let transport = RecordingTransport::replying(ok_reply);

    let notifier = Notifier::with_transport(config, &transport);
    let err = notifier.send_message("hello").unwrap_err();
    assert!(matches!(err, SendError::Config(ConfigError::TokenNotSet)));
    assert!(transport.requests.borrow().is_empty());
}

#[test]
fn test_missing_config_file_makes_no_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let transport = RecordingTransport::replying(ok_reply);

    let notifier = Notifier::with_transport(dir.path().join("config.toml"), &transport);
    let err = notifier.send_message("hello").unwrap_err();
    assert!(matches!(
        err,
        SendError::Config(ConfigError::MissingSection { .. })
    ));
    assert!(transport.requests.borrow().is_empty());
}

#[test]
fn test_connection_error_is_a_failure_not_a_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), CONFIG);
    let transport = RecordingTransport::replying(|| {
        Err(TransportError::Connection(
            "error sending request: connection refused".to_string(),
        ))
    });

    let notifier = Notifier::with_transport(config, &transport);
    let err = notifier.send_message("hello").unwrap_err();
    assert!(matches!(err, SendError::Transport(_)));
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn test_timeout_is_a_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), CONFIG);
    let transport = RecordingTransport::replying(|| Err(TransportError::Timeout));

    let notifier = Notifier::with_transport(config, &transport);
    let err = notifier.send_message("hello").unwrap_err();
    assert!(matches!(
        err,
        SendError::Transport(TransportError::Timeout)
    ));
}

#[test]
fn test_error_status_is_a_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), CONFIG);
    let transport = RecordingTransport::replying(|| {
        Ok(HttpReply {
            status: 401,
            body: r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#.to_string(),
        })
    });

    let notifier = Notifier::with_transport(config, &transport);
    let err = notifier.send_message("hello").unwrap_err();
    assert!(matches!(err, SendError::Status { status: 401, .. }));
    assert!(err.to_string().contains("Unauthorized"));
    // The token must not leak into user-facing errors
    assert!(!err.to_string().contains("123456:TEST"));
}

#[test]
fn test_missing_file_skips_notifier() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), CONFIG);
    let transport = RecordingTransport::replying(ok_reply);

    let notifier = Notifier::with_transport(config, &transport);
    let err = send_file(&notifier, &dir.path().join("results.txt")).unwrap_err();
    assert!(matches!(err, SendError::File { .. }));
    assert!(transport.requests.borrow().is_empty());
}

#[test]
fn test_file_is_sent_with_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), CONFIG);
    let results = dir.path().join("results.txt");
    std::fs::write(&results, "test@gmail.com: ✅ domain is valid (MX records found)")
        .expect("write results");
    let transport = RecordingTransport::replying(ok_reply);

    let notifier = Notifier::with_transport(config, &transport);
    send_file(&notifier, &results).expect("send file");

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body["text"],
        "📄 File: results.txt\n\ntest@gmail.com: ✅ domain is valid (MX records found)"
    );
}

#[test]
fn test_numeric_chat_id_is_sent_as_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(
        dir.path(),
        "[telegram]\nbot_token = \"123456:TEST\"\nchat_id = -1001234567890\n",
    );
    let transport = RecordingTransport::replying(ok_reply);

    let notifier = Notifier::with_transport(config, &transport);
    notifier.send_message("hello").expect("send");

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].body["chat_id"], "-1001234567890");
}
