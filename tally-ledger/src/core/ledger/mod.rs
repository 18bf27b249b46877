pub mod entry;
pub mod error;
pub mod quantity;

use std::fmt;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::{Equivalent, IndexMap};
use rust_decimal::Decimal;

pub use entry::LedgerEntry;
pub use error::LedgerError;
pub use quantity::Quantity;

/// In-memory mapping from identifier to a non-negative quantity.
///
/// Entries keep insertion order. An entry is created on its first successful
/// [`add`](Ledger::add) and dropped as soon as a [`remove`](Ledger::remove)
/// brings it to exactly zero, so the ledger never holds zero balances.
/// Every operation is all-or-nothing: a failed call leaves the ledger as it
/// was.
#[derive(Debug, Clone)]
pub struct Ledger<K, Q, M = ()> {
    entries: IndexMap<K, LedgerEntry<K, Q, M>>,
}

impl<K, Q, M> Default for Ledger<K, Q, M> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K, Q, M> Ledger<K, Q, M>
where
    K: Hash + Eq + Clone + fmt::Display,
    Q: Quantity,
    M: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` with `amount`, or increments it if already present.
    ///
    /// `metadata` is only recorded when the entry is created; on later adds
    /// it is ignored.
    pub fn add(&mut self, key: K, amount: Q, metadata: Option<M>) -> Result<(), LedgerError> {
        if !amount.is_strictly_positive() {
            return Err(LedgerError::InvalidAmount {
                amount: amount.to_string(),
            });
        }

        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.quantity = entry.quantity.checked_add(amount).ok_or_else(|| {
                    LedgerError::InvalidAmount {
                        amount: amount.to_string(),
                    }
                })?;
                tracing::debug!(key = %entry.key, %amount, quantity = %entry.quantity, "ledger add");
            }
            Entry::Vacant(slot) => {
                let key = slot.key().clone();
                tracing::debug!(%key, %amount, "ledger insert");
                slot.insert(LedgerEntry::new(key, amount, metadata));
            }
        }

        Ok(())
    }

    /// Takes `amount` away from `key`, deleting the entry when it hits zero.
    ///
    /// # Errors
    /// - [`LedgerError::InvalidAmount`] if `amount` is not strictly positive.
    /// - [`LedgerError::InsufficientQuantity`] if `key` is absent or holds
    ///   less than `amount`.
    pub fn remove<B>(&mut self, key: &B, amount: Q) -> Result<(), LedgerError>
    where
        B: Hash + Equivalent<K> + fmt::Display + ?Sized,
    {
        if !amount.is_strictly_positive() {
            return Err(LedgerError::InvalidAmount {
                amount: amount.to_string(),
            });
        }

        let available = self.quantity_of(key);
        let remaining = match available.checked_sub(amount) {
            Some(rest) if available >= amount => rest,
            _ => {
                return Err(LedgerError::InsufficientQuantity {
                    key: key.to_string(),
                    requested: amount.to_string(),
                    available: available.to_string(),
                });
            }
        };

        if remaining.is_strictly_positive() {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.quantity = remaining;
            }
            tracing::debug!(%key, %amount, quantity = %remaining, "ledger remove");
        } else {
            self.entries.shift_remove(key);
            tracing::debug!(%key, %amount, "ledger remove, entry closed");
        }

        Ok(())
    }

    pub fn get<B>(&self, key: &B) -> Option<&LedgerEntry<K, Q, M>>
    where
        B: Hash + Equivalent<K> + ?Sized,
    {
        self.entries.get(key)
    }

    /// Current quantity for `key`, zero when absent.
    pub fn quantity_of<B>(&self, key: &B) -> Q
    where
        B: Hash + Equivalent<K> + ?Sized,
    {
        self.entries
            .get(key)
            .map(|entry| entry.quantity)
            .unwrap_or_else(Q::zero)
    }

    pub fn contains<B>(&self, key: &B) -> bool
    where
        B: Hash + Equivalent<K> + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Snapshot of every entry, in insertion order.
    pub fn list(&self) -> Vec<LedgerEntry<K, Q, M>> {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry<K, Q, M>> {
        self.entries.values()
    }

    /// Sums `quantity * price_fn(key)` over all entries.
    ///
    /// `price_fn` is expected to return zero for keys it does not know.
    /// Returns `None` if any product or the running sum leaves the `Decimal`
    /// range.
    pub fn total_value<F>(&self, price_fn: F) -> Option<Decimal>
    where
        F: Fn(&K) -> Decimal,
    {
        self.entries.values().try_fold(Decimal::ZERO, |total, entry| {
            let value = entry.quantity.to_decimal()?.checked_mul(price_fn(&entry.key))?;
            total.checked_add(value)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
