use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_common::{Result, TallyError};
use tally_ledger::Side;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub symbol: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub category: String,
    pub count: u32,
    pub nightly_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    pub side: Side,
    pub symbol: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    pub guest: String,
    pub category: String,
    pub nights: u32,
}

/// Everything a simulation run needs: the market to trade against, room
/// inventory, and the scripted activity to replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub market: Vec<QuoteConfig>,
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
    #[serde(default)]
    pub orders: Vec<OrderConfig>,
    #[serde(default)]
    pub bookings: Vec<BookingConfig>,
    /// Reservation ids to cancel once all bookings are placed.
    #[serde(default)]
    pub cancellations: Vec<u64>,
    #[serde(default)]
    pub grades: Vec<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        let quote = |symbol: &str, price: i64| QuoteConfig {
            symbol: symbol.to_string(),
            price: Decimal::from(price),
        };
        let room = |category: &str, count: u32, rate: i64| RoomConfig {
            category: category.to_string(),
            count,
            nightly_rate: Decimal::from(rate),
        };
        let order = |side: Side, symbol: &str, quantity: u64| OrderConfig {
            side,
            symbol: symbol.to_string(),
            quantity,
        };
        let booking = |guest: &str, category: &str, nights: u32| BookingConfig {
            guest: guest.to_string(),
            category: category.to_string(),
            nights,
        };

        Self {
            market: vec![
                quote("AAPL", 150),
                quote("GOOGL", 2800),
                quote("AMZN", 3400),
                quote("MSFT", 300),
            ],
            rooms: vec![
                room("Standard", 5, 120),
                room("Deluxe", 3, 200),
                room("Suite", 1, 450),
            ],
            orders: vec![
                order(Side::Buy, "AAPL", 10),
                order(Side::Buy, "msft", 5),
                order(Side::Sell, "MSFT", 2),
                order(Side::Sell, "GOOGL", 1),
                order(Side::Buy, "TSLA", 1),
            ],
            bookings: vec![
                booking("Ana", "Standard", 2),
                booking("Bo", "Suite", 3),
                booking("Cy", "Suite", 1),
            ],
            cancellations: vec![1],
            grades: vec![88.0, 92.5, 79.0, 65.0],
        }
    }
}

impl SimConfig {
    /// Rejects configs that could never seed a market or an inventory.
    pub fn validate(&self) -> Result<()> {
        for quote in &self.market {
            if quote.symbol.trim().is_empty() {
                return Err(TallyError::Config("market symbol cannot be empty".to_string()));
            }
            if quote.price <= Decimal::ZERO {
                return Err(TallyError::Config(format!(
                    "price for {} must be positive, got {}",
                    quote.symbol, quote.price
                )));
            }
        }

        for room in &self.rooms {
            if room.count == 0 {
                return Err(TallyError::Config(format!(
                    "room category '{}' must offer at least one room",
                    room.category
                )));
            }
            if room.nightly_rate <= Decimal::ZERO {
                return Err(TallyError::Config(format!(
                    "nightly rate for '{}' must be positive, got {}",
                    room.category, room.nightly_rate
                )));
            }
        }

        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let parsed = serde_json::from_str::<SimConfig>(&data)?;
        parsed.validate()?;
        Ok(parsed)
    }
}
