//! Account service: a single thread-safe bank account with a transaction ledger

pub mod account;
pub mod statement;
pub mod config;
pub mod telemetry;

pub use account::{Account, BankAccount};
pub use config::AccountServiceConfig;
pub use statement::NO_TRANSACTIONS;
