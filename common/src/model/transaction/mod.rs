//! Transaction model recorded in an account ledger

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Date format used on statement rows
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A committed ledger entry. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    timestamp: DateTime<Utc>,
    amount: Amount,
    resulting_balance: Amount,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(timestamp: DateTime<Utc>, amount: Amount, resulting_balance: Amount) -> Self {
        Self {
            timestamp,
            amount,
            resulting_balance,
        }
    }

    /// Commit time of the mutation
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Signed amount (negative for withdrawals)
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Balance immediately after this transaction was applied
    pub fn resulting_balance(&self) -> Amount {
        self.resulting_balance
    }

    pub fn is_deposit(&self) -> bool {
        self.amount > 0
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0
    }
}

/// Renders the statement row: `DD/MM/YYYY || amount || balance`
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} || {:>6} || {:>7}",
            self.timestamp.format(STATEMENT_DATE_FORMAT),
            self.amount,
            self.resulting_balance
        )
    }
}
