use serde::{Deserialize, Serialize};

/// Monotonic id generator owned by whoever creates records.
///
/// Each collaborator that hands out ids (trades, reservations, payments)
/// carries its own `Sequence`, so two desks never share a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    next: u64,
}

impl Default for Sequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Returns the current id and advances the sequence.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`Sequence::next_id`] will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// Renders an id with a short prefix, e.g. `RES-0007`.
pub fn format_id(prefix: &str, id: u64) -> String {
    format!("{}-{:04}", prefix, id)
}
