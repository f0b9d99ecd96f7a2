//! Format Filter
//!
//! A deliberately loose syntax check: anything carrying an `@domain.tld`
//! shaped token somewhere in it is considered worth a DNS lookup.
//!
//! The pattern is not anchored, so inputs such as `a@b..com`, `x@-host.org`
//! or `not an address user@host.io trailing` are accepted. Only the
//! extracted domain matters to the resolver.

use std::sync::LazyLock;

use regex::Regex;

/// `@` followed by dot/hyphen/alphanumeric labels and a final label of
/// at least two ASCII letters.
static DOMAIN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").expect("domain suffix pattern is valid")
});

/// Result of running the format filter over a raw input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCheck<'a> {
    /// Blank or whitespace-only input, nothing to check
    Empty,
    /// No recognizable `@domain.tld` suffix
    Malformed,
    /// Plausible address; `domain` is what gets resolved
    Plausible { domain: &'a str },
}

/// Extract the domain from the first `@domain.tld` match in `address`
pub fn extract_domain(address: &str) -> Option<&str> {
    DOMAIN_SUFFIX
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify a raw input line
///
/// Surrounding whitespace is ignored.
pub fn classify(raw: &str) -> FormatCheck<'_> {
    let address = raw.trim();
    if address.is_empty() {
        return FormatCheck::Empty;
    }

    match extract_domain(address) {
        Some(domain) => FormatCheck::Plausible { domain },
        None => FormatCheck::Malformed,
    }
}
