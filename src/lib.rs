//! Facade over the banking workspace crates

pub use account_service;
pub use common;

pub use account_service::{Account, AccountServiceConfig, BankAccount};
pub use common::{Amount, Error, Result, Transaction};
