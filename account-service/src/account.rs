//! Account aggregate guarded by a single reader-writer lock

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use common::amount::{ensure_positive, Amount};
use common::clock::{Clock, SystemClock};
use common::error::{Error, Result};
use common::model::transaction::Transaction;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AccountServiceConfig;
use crate::statement;

/// Operations exposed by a bank account
pub trait BankAccount: Send + Sync {
    /// Add a strictly positive amount to the balance
    fn deposit(&self, amount: Amount) -> Result<Transaction>;

    /// Remove a strictly positive amount, failing if funds are insufficient
    fn withdraw(&self, amount: Amount) -> Result<Transaction>;

    /// Current balance
    fn balance(&self) -> Amount;

    /// Statement rows, most recent first
    fn print_statement(&self) -> String;
}

/// Balance plus the append-only ledger it is derived from
#[derive(Debug, Default)]
struct Ledger {
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Ledger {
    fn append(&mut self, transaction: Transaction) {
        self.balance = transaction.resulting_balance();
        self.transactions.push(transaction);
    }
}

/// A single in-memory bank account, safe to share between threads.
///
/// Deposits and withdrawals hold the write lock across validation, mutation and
/// ledger append. Balance and statement reads share the read lock.
pub struct Account {
    id: Uuid,
    ledger: RwLock<Ledger>,
    clock: Arc<dyn Clock>,
    config: AccountServiceConfig,
}

impl Account {
    /// Create an empty account using the system clock
    pub fn new() -> Self {
        Self::with_config(AccountServiceConfig::default())
    }

    /// Create an empty account with a specific configuration
    pub fn with_config(config: AccountServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an empty account stamping transactions from `clock`
    pub fn with_clock(config: AccountServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let id = Uuid::new_v4();
        debug!(account_id = %id, "Creating new account");

        Self {
            id,
            ledger: RwLock::new(Ledger::default()),
            clock,
            config,
        }
    }

    /// Account ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Point-in-time copy of the ledger in commit order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.read_ledger().transactions.clone()
    }

    fn read_ledger(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(|poisoned| {
            warn!(account_id = %self.id, "Recovering poisoned ledger lock for read");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write_ledger(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(|poisoned| {
            warn!(account_id = %self.id, "Recovering poisoned ledger lock for write");
            PoisonError::into_inner(poisoned)
        })
    }

    fn log_commit(&self, kind: &str, transaction: &Transaction) {
        if self.config.transaction_logging {
            info!(
                account_id = %self.id,
                amount = transaction.amount(),
                balance = transaction.resulting_balance(),
                "{} committed", kind
            );
        } else {
            debug!(
                account_id = %self.id,
                amount = transaction.amount(),
                balance = transaction.resulting_balance(),
                "{} committed", kind
            );
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("balance", &self.balance())
            .finish_non_exhaustive()
    }
}

impl BankAccount for Account {
    fn deposit(&self, amount: Amount) -> Result<Transaction> {
        ensure_positive(amount, "Deposit amount must be positive").map_err(|e| {
            debug!(account_id = %self.id, amount, "Rejected deposit: {}", e);
            e
        })?;

        let mut ledger = self.write_ledger();

        let new_balance = ledger.balance.checked_add(amount).ok_or_else(|| {
            debug!(account_id = %self.id, amount, "Rejected deposit: balance overflow");
            Error::InvalidArgument(format!(
                "Deposit of {} would overflow balance {}",
                amount, ledger.balance
            ))
        })?;

        let transaction = Transaction::new(self.clock.now(), amount, new_balance);
        ledger.append(transaction.clone());
        drop(ledger);

        self.log_commit("Deposit", &transaction);
        Ok(transaction)
    }

    fn withdraw(&self, amount: Amount) -> Result<Transaction> {
        ensure_positive(amount, "Withdrawal amount must be positive").map_err(|e| {
            debug!(account_id = %self.id, amount, "Rejected withdrawal: {}", e);
            e
        })?;

        let mut ledger = self.write_ledger();

        // Funds check and mutation share this guard.
        if ledger.balance < amount {
            debug!(
                account_id = %self.id,
                amount,
                balance = ledger.balance,
                "Rejected withdrawal: insufficient funds"
            );
            return Err(Error::InsufficientFunds {
                balance: ledger.balance,
                requested: amount,
            });
        }

        let transaction = Transaction::new(self.clock.now(), -amount, ledger.balance - amount);
        ledger.append(transaction.clone());
        drop(ledger);

        self.log_commit("Withdrawal", &transaction);
        Ok(transaction)
    }

    fn balance(&self) -> Amount {
        self.read_ledger().balance
    }

    fn print_statement(&self) -> String {
        let mut snapshot = self.transactions();
        statement::sort_most_recent_first(&mut snapshot);
        statement::render(&snapshot)
    }
}
