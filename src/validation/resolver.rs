//! DNS Resolver
//!
//! MX lookups behind the [`LookupMx`] trait so the batch driver can run
//! against the system resolver or a stand-in.

use thiserror::Error;
use trust_dns_resolver::Resolver;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;

/// Ways an MX lookup can fail to produce records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The domain does not exist (NXDOMAIN)
    #[error("domain does not exist")]
    NxDomain,
    /// The domain exists but publishes no MX records
    #[error("no MX records")]
    NoRecords,
    /// Anything else: timeouts, malformed queries, resolver setup
    #[error("{0}")]
    Failed(String),
}

/// MX record lookup for a single domain
#[cfg_attr(test, mockall::automock)]
pub trait LookupMx {
    /// Number of MX records published for `domain`
    fn lookup_mx(&self, domain: &str) -> Result<usize, LookupError>;
}

/// Blocking resolver built from the host's DNS configuration
pub struct SystemResolver {
    inner: Result<Resolver, String>,
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemResolver {
    /// Build from the system configuration, falling back to the library
    /// defaults when it cannot be read.
    ///
    /// Never fails: if no resolver can be built at all, the error is kept
    /// and reported for every lookup instead.
    pub fn new() -> Self {
        let inner = Resolver::from_system_conf()
            .or_else(|e| {
                log::warn!("System DNS configuration unavailable ({}), using defaults", e);
                Resolver::new(ResolverConfig::default(), ResolverOpts::default())
            })
            .map_err(|e| {
                log::error!("Failed to create DNS resolver: {}", e);
                format!("resolver unavailable: {}", e)
            });

        Self { inner }
    }
}

impl LookupMx for SystemResolver {
    fn lookup_mx(&self, domain: &str) -> Result<usize, LookupError> {
        let resolver = self
            .inner
            .as_ref()
            .map_err(|reason| LookupError::Failed(reason.clone()))?;

        log::debug!("MX lookup for {}", domain);
        let count = resolver
            .mx_lookup(domain)
            .map_err(|e| classify_error(&e))?
            .iter()
            .count();

        if count == 0 {
            Err(LookupError::NoRecords)
        } else {
            Ok(count)
        }
    }
}

/// Map a resolver error onto the three outcomes the validator reports
fn classify_error(error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                LookupError::NxDomain
            } else {
                LookupError::NoRecords
            }
        }
        _ => LookupError::Failed(error.to_string()),
    }
}
