//! Statement rendering

use common::model::transaction::Transaction;

/// Returned when the ledger has no entries
pub const NO_TRANSACTIONS: &str = "No transactions to display";

/// Header line, including its trailing space
pub const HEADER: &str = "Date       || Amount || Balance ";

/// Order a ledger snapshot most recent first.
///
/// The sort is stable, so entries sharing a timestamp keep their commit order.
pub fn sort_most_recent_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}

/// Render rows in the order given, with no trailing newline
pub fn render(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let mut statement = String::from(HEADER);
    for transaction in transactions {
        statement.push('\n');
        statement.push_str(&transaction.to_string());
    }
    statement
}
