//! Validation Pipeline
//!
//! Format filter, MX lookup and the batch driver tying them together.

pub mod engine;
pub mod format;
pub mod resolver;

pub use engine::{check_address, read_addresses, run_batch, BatchReport, CheckResult, Outcome};
pub use format::{classify, extract_domain, FormatCheck};
pub use resolver::{LookupError, LookupMx, SystemResolver};
