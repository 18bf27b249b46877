use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use tally_common::sequence::format_id;

/// Nightly rate attached to a room category when its inventory is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRate {
    pub nightly: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub guest: String,
    pub category: String,
    pub nights: u32,
    pub nightly_rate: Decimal,
    pub payment: Payment,
    pub created_at: i64,
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} x{} nights, paid ${} ({})",
            format_id("RES", self.id),
            self.guest,
            self.category,
            self.nights,
            self.payment.amount,
            format_id("PAY", self.payment.id)
        )
    }
}
