//! Validation Engine
//!
//! Runs each address through the format filter and the MX lookup and
//! renders one result line per address.

use std::fmt;
use std::io;
use std::path::Path;

use super::format::{classify, FormatCheck};
use super::resolver::{LookupError, LookupMx};

/// Outcome of checking a single address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MalformedAddress,
    DomainMissing,
    NoMailExchanger,
    ResolverFailure(String),
    Valid,
}

impl Outcome {
    /// Status glyph shown in front of the explanation
    pub fn glyph(&self) -> &'static str {
        match self {
            Outcome::Valid => "✅",
            Outcome::NoMailExchanger => "⚠️",
            Outcome::MalformedAddress | Outcome::DomainMissing | Outcome::ResolverFailure(_) => {
                "❌"
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

impl From<LookupError> for Outcome {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::NxDomain => Outcome::DomainMissing,
            LookupError::NoRecords => Outcome::NoMailExchanger,
            LookupError::Failed(reason) => Outcome::ResolverFailure(reason),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::MalformedAddress => write!(f, "{} invalid email", self.glyph()),
            Outcome::DomainMissing => write!(f, "{} domain does not exist", self.glyph()),
            Outcome::NoMailExchanger => write!(f, "{} no MX records", self.glyph()),
            Outcome::ResolverFailure(reason) => {
                write!(f, "{} lookup error: {}", self.glyph(), reason)
            }
            Outcome::Valid => write!(f, "{} domain is valid (MX records found)", self.glyph()),
        }
    }
}

/// Result of checking one address, rendered as `address: glyph explanation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub address: String,
    pub outcome: Outcome,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.address, self.outcome)
    }
}

/// Check a single address
///
/// Returns `None` for blank input. Malformed input is rejected without
/// touching the resolver.
pub fn check_address<R: LookupMx + ?Sized>(raw: &str, resolver: &R) -> Option<CheckResult> {
    let address = raw.trim();

    let outcome = match classify(address) {
        FormatCheck::Empty => return None,
        FormatCheck::Malformed => Outcome::MalformedAddress,
        FormatCheck::Plausible { domain } => match resolver.lookup_mx(domain) {
            Ok(_) => Outcome::Valid,
            Err(e) => {
                log::debug!("{}: {}", domain, e);
                Outcome::from(e)
            }
        },
    };

    Some(CheckResult {
        address: address.to_string(),
        outcome,
    })
}

/// Results of a batch run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub results: Vec<CheckResult>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn valid(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_valid()).count()
    }

    pub fn invalid(&self) -> usize {
        self.total() - self.valid()
    }

    /// Rendered result lines
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.results.iter().map(|r| r.to_string())
    }
}

/// Check every address in order, skipping blank entries
pub fn run_batch<I, S, R>(addresses: I, resolver: &R) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: LookupMx + ?Sized,
{
    let mut report = BatchReport::new();
    for address in addresses {
        if let Some(result) = check_address(address.as_ref(), resolver) {
            report.push(result);
        }
    }
    report
}

/// Read candidate addresses from a newline-delimited file
///
/// Lines are trimmed and blank lines dropped. A file that cannot be read
/// yields no addresses.
pub fn read_addresses(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            println!("{}", read_error_message(path, &e));
            Vec::new()
        }
    }
}

/// Console line for an address file that could not be read
pub fn read_error_message(path: &Path, error: &io::Error) -> String {
    if error.kind() == io::ErrorKind::NotFound {
        format!("Error: file {} not found", path.display())
    } else {
        format!("Error: cannot read file {}: {}", path.display(), error)
    }
}
