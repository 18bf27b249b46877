pub mod error;
pub mod trade;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_common::{utils::current_time, Sequence};

use crate::core::ledger::{Ledger, LedgerError};
use crate::core::market::{normalize_symbol, PriceBook};

pub use error::PortfolioError;
pub use trade::{Side, Trade};

/// Metadata fixed when a position is first opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Market price at the time of the first purchase.
    pub unit_price: Decimal,
}

/// Share holdings for one trader plus the journal of executed trades.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    holdings: Ledger<String, u64, Holding>,
    trades: Vec<Trade>,
    trade_ids: Sequence,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buys `quantity` shares of `symbol` at the current market price.
    ///
    /// # Errors
    /// - [`LedgerError::InvalidAmount`] (wrapped) for a zero quantity.
    /// - [`PortfolioError::UnknownSymbol`] if `market` does not quote `symbol`.
    pub fn buy(&mut self, market: &PriceBook, symbol: &str, quantity: u64) -> Result<Trade, PortfolioError> {
        if quantity == 0 {
            tracing::warn!(%symbol, "buy rejected: quantity must be positive");
            return Err(LedgerError::InvalidAmount {
                amount: quantity.to_string(),
            }
            .into());
        }

        let symbol = normalize_symbol(symbol);
        let unit_price = market.price(&symbol).ok_or_else(|| {
            tracing::warn!(%symbol, "buy rejected: symbol not quoted");
            PortfolioError::UnknownSymbol(symbol.clone())
        })?;

        self.holdings
            .add(symbol.clone(), quantity, Some(Holding { unit_price }))?;

        Ok(self.record(Side::Buy, symbol, quantity, unit_price))
    }

    /// Sells `quantity` shares of `symbol`, closing the position at zero.
    pub fn sell(&mut self, market: &PriceBook, symbol: &str, quantity: u64) -> Result<Trade, PortfolioError> {
        let symbol = normalize_symbol(symbol);
        self.holdings.remove(symbol.as_str(), quantity).map_err(|e| {
            tracing::warn!(%symbol, quantity, error = %e, "sell rejected");
            e
        })?;

        let unit_price = market.price_or_zero(&symbol);
        Ok(self.record(Side::Sell, symbol, quantity, unit_price))
    }

    fn record(&mut self, side: Side, symbol: String, quantity: u64, unit_price: Decimal) -> Trade {
        let trade = Trade {
            id: self.trade_ids.next_id(),
            side,
            symbol,
            quantity,
            unit_price,
            timestamp: current_time(),
        };
        tracing::info!(
            "📈 Trade #{}: {} {} {} @ {}",
            trade.id, trade.side, trade.quantity, trade.symbol, trade.unit_price
        );
        self.trades.push(trade.clone());
        trade
    }

    pub fn quantity(&self, symbol: &str) -> u64 {
        self.holdings.quantity_of(normalize_symbol(symbol).as_str())
    }

    pub fn holdings(&self) -> &Ledger<String, u64, Holding> {
        &self.holdings
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Values every position at current market prices.
    ///
    /// # Errors
    /// [`PortfolioError::ValuationOverflow`] if a position or the total does
    /// not fit a `Decimal`.
    pub fn report(&self, market: &PriceBook) -> Result<PortfolioReport, PortfolioError> {
        let positions = self
            .holdings
            .iter()
            .map(|entry| {
                let unit_price = market.price_or_zero(&entry.key);
                let value = Decimal::from(entry.quantity)
                    .checked_mul(unit_price)
                    .ok_or_else(|| PortfolioError::ValuationOverflow(entry.key.clone()))?;
                Ok(PositionLine {
                    symbol: entry.key.clone(),
                    quantity: entry.quantity,
                    purchase_price: entry
                        .metadata
                        .as_ref()
                        .map(|h| h.unit_price)
                        .unwrap_or(Decimal::ZERO),
                    unit_price,
                    value,
                })
            })
            .collect::<Result<Vec<_>, PortfolioError>>()?;

        let total_value = self
            .holdings
            .total_value(|symbol| market.price_or_zero(symbol))
            .ok_or_else(|| PortfolioError::ValuationOverflow("portfolio total".to_string()))?;

        Ok(PortfolioReport {
            positions,
            total_value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionLine {
    pub symbol: String,
    pub quantity: u64,
    pub purchase_price: Decimal,
    pub unit_price: Decimal,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub positions: Vec<PositionLine>,
    pub total_value: Decimal,
}

impl fmt::Display for PortfolioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.positions {
            writeln!(
                f,
                "{}: {} shares, Value: ${} (bought at ${})",
                line.symbol, line.quantity, line.value, line.purchase_price
            )?;
        }
        write!(f, "Total Portfolio Value: ${}", self.total_value)
    }
}
