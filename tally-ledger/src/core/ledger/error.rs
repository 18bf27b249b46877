use thiserror::Error;

/// The only two ways a ledger operation can fail.
///
/// Both are returned before any mutation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The requested amount is not strictly positive (or would overflow the
    /// entry's quantity type).
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: String },

    /// A removal would drive the quantity below zero, or the key is absent.
    #[error("Insufficient quantity for '{key}': requested {requested}, available {available}")]
    InsufficientQuantity {
        key: String,
        requested: String,
        available: String,
    },
}
