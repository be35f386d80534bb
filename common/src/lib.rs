//! Common types and utilities for the banking workspace
//!
//! This library contains the shared types used by the account service: the
//! unified error type, the integer amount alias, the transaction model and the
//! clock abstraction used to timestamp committed mutations.

pub mod error;
pub mod model;
pub mod amount;
pub mod clock;

/// Re-export important types
pub use error::{Error, Result};
pub use amount::Amount;
pub use clock::{Clock, ManualClock, SystemClock};
pub use model::transaction::Transaction;
