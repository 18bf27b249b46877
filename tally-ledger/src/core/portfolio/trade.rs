use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// An executed order as recorded in the portfolio's journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    pub side: Side,
    pub symbol: String,
    pub quantity: u64,
    /// Market price at execution, zero if the symbol was no longer quoted.
    pub unit_price: Decimal,
    pub timestamp: i64,
}

impl Trade {
    /// `quantity * unit_price`, `None` past the `Decimal` range.
    pub fn notional(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}
