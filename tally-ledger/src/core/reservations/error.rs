use thiserror::Error;

use crate::core::ledger::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Guest name cannot be empty")]
    EmptyGuest,

    #[error("Stay must be at least one night, got {0}")]
    InvalidNights(u32),

    /// No room of the requested category is available.
    #[error("No vacancy for '{category}'")]
    NoVacancy {
        category: String,
        #[source]
        source: LedgerError,
    },

    /// Nightly rate times nights does not fit a `Decimal`.
    #[error("Payment for {nights} nights at {nightly_rate} overflows")]
    PaymentOverflow { nightly_rate: rust_decimal::Decimal, nights: u32 },

    #[error("Reservation {0} not found")]
    UnknownReservation(u64),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
