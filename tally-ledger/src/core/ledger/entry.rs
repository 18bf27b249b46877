use serde::{Deserialize, Serialize};

/// One key's current quantity plus the metadata it was created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry<K, Q, M = ()> {
    pub key: K,
    pub quantity: Q,
    /// Attached on first insert and never touched again.
    pub metadata: Option<M>,
}

impl<K, Q, M> LedgerEntry<K, Q, M> {
    pub fn new(key: K, quantity: Q, metadata: Option<M>) -> Self {
        Self {
            key,
            quantity,
            metadata,
        }
    }
}
