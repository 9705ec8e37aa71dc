use thiserror::Error;

use crate::headers::Header;
use crate::storage::StorageError;

/// What the host should do with the intercepted phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No opinion; the exchange proceeds untouched.
    Pass,
    /// Abort the exchange. Only ever produced during a request phase.
    Cancel,
    /// Resubmit this header set in place of the original one.
    Rewrite(Vec<Header>),
}

/// Failures surfaced by configuration commands. Nothing here is fatal:
/// the active rule table is only ever replaced after a successful parse.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid rule JSON: {0}")]
    InvalidRules(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
