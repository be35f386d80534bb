//! Amount type used for balances and transaction values

/// Whole currency units. Positive for deposits, negative for withdrawals.
pub type Amount = i64;

/// Validate that an amount is strictly positive
pub fn ensure_positive(amount: Amount, message: &str) -> crate::Result<Amount> {
    if amount <= 0 {
        return Err(crate::Error::InvalidArgument(message.to_string()));
    }
    Ok(amount)
}
