//! Error types for the banking workspace
//!
//! Both domain errors are local and recoverable: callers are expected to match
//! on them and decide whether to retry with a different amount.

use thiserror::Error;

use crate::amount::Amount;

/// Banking error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A non-positive amount, or a deposit that would overflow the balance
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A withdrawal larger than the balance at the time of the check
    #[error("Insufficient funds. Current balance: {balance}, Requested withdrawal: {requested}")]
    InsufficientFunds {
        /// Balance observed under the write lock
        balance: Amount,
        /// Amount the caller tried to withdraw
        requested: Amount,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error was raised by the funds check
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Error::InsufficientFunds { .. })
    }

    /// Whether this error was raised by argument validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
