pub mod error;
pub mod model;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use tally_common::{utils::current_time, Sequence};

use crate::core::ledger::{Ledger, LedgerError};

pub use error::ReservationError;
pub use model::{Payment, Reservation, RoomRate};

/// Room inventory per category plus the registry of active reservations.
///
/// Reservation and payment ids come from two sequences owned by the desk.
#[derive(Debug, Clone, Default)]
pub struct ReservationDesk {
    availability: Ledger<String, u32, RoomRate>,
    reservations: IndexMap<u64, Reservation>,
    reservation_ids: Sequence,
    payment_ids: Sequence,
}

impl ReservationDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `count` rooms of `category` on offer.
    ///
    /// The nightly rate sticks to the category until its inventory runs out;
    /// rooms added to a category that is already on offer keep the old rate.
    pub fn add_rooms(&mut self, category: &str, count: u32, nightly: Decimal) -> Result<(), ReservationError> {
        let category = category.trim().to_string();
        self.availability
            .add(category.clone(), count, Some(RoomRate { nightly }))
            .map_err(|e| {
                tracing::warn!(%category, count, error = %e, "rooms rejected");
                e
            })?;
        Ok(())
    }

    /// Books one room of `category` for `nights` nights.
    pub fn book(&mut self, guest: &str, category: &str, nights: u32) -> Result<Reservation, ReservationError> {
        let guest = guest.trim();
        if guest.is_empty() {
            return Err(ReservationError::EmptyGuest);
        }
        if nights == 0 {
            return Err(ReservationError::InvalidNights(nights));
        }

        let category = category.trim();
        let nightly_rate = self
            .availability
            .get(category)
            .and_then(|entry| entry.metadata.as_ref())
            .map(|rate| rate.nightly)
            .unwrap_or(Decimal::ZERO);
        let amount = nightly_rate.checked_mul(Decimal::from(nights)).ok_or_else(|| {
            tracing::warn!(%guest, %category, nights, "booking rejected: payment overflows");
            ReservationError::PaymentOverflow { nightly_rate, nights }
        })?;

        self.availability.remove(category, 1).map_err(|source| match source {
            LedgerError::InsufficientQuantity { .. } => {
                tracing::warn!(%guest, %category, "booking rejected: no vacancy");
                ReservationError::NoVacancy {
                    category: category.to_string(),
                    source,
                }
            }
            other => other.into(),
        })?;

        let reservation = Reservation {
            id: self.reservation_ids.next_id(),
            guest: guest.to_string(),
            category: category.to_string(),
            nights,
            nightly_rate,
            payment: Payment {
                id: self.payment_ids.next_id(),
                amount,
            },
            created_at: current_time(),
        };

        tracing::info!("🛏️ Booked {}", reservation);
        self.reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    /// Cancels a reservation and returns its room to the inventory.
    pub fn cancel(&mut self, reservation_id: u64) -> Result<Reservation, ReservationError> {
        let (category, nightly) = match self.reservations.get(&reservation_id) {
            Some(r) => (r.category.clone(), r.nightly_rate),
            None => {
                tracing::warn!(reservation_id, "cancel rejected: unknown reservation");
                return Err(ReservationError::UnknownReservation(reservation_id));
            }
        };

        self.availability
            .add(category, 1, Some(RoomRate { nightly }))?;

        let reservation = self
            .reservations
            .shift_remove(&reservation_id)
            .ok_or(ReservationError::UnknownReservation(reservation_id))?;

        tracing::info!("❌ Cancelled {}", reservation);
        Ok(reservation)
    }

    pub fn vacancies(&self, category: &str) -> u32 {
        self.availability.quantity_of(category.trim())
    }

    pub fn availability(&self) -> &Ledger<String, u32, RoomRate> {
        &self.availability
    }

    pub fn reservation(&self, id: u64) -> Option<&Reservation> {
        self.reservations.get(&id)
    }

    /// Active reservations in booking order.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }
}
