use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("Symbol cannot be empty")]
    EmptySymbol,

    #[error("Invalid price for {symbol}: {price}")]
    InvalidPrice { symbol: String, price: Decimal },
}

/// Upper-cases and trims a ticker so `" aapl"` and `"AAPL"` name the same stock.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Current unit price per symbol, in the order symbols were listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceBook {
    prices: IndexMap<String, Decimal>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists `symbol` at `price`, replacing any earlier quote.
    pub fn set_price(&mut self, symbol: &str, price: Decimal) -> Result<(), MarketError> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(MarketError::EmptySymbol);
        }
        if price <= Decimal::ZERO {
            return Err(MarketError::InvalidPrice { symbol, price });
        }

        tracing::debug!(%symbol, %price, "quote updated");
        self.prices.insert(symbol, price);
        Ok(())
    }

    pub fn price(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(normalize_symbol(symbol).as_str()).copied()
    }

    /// Price used for valuation: unknown symbols are worth nothing.
    pub fn price_or_zero(&self, symbol: &str) -> Decimal {
        self.price(symbol).unwrap_or(Decimal::ZERO)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.price(symbol).is_some()
    }

    pub fn quotes(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.prices.iter().map(|(symbol, price)| (symbol.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbols_are_normalized() {
        let mut book = PriceBook::new();
        book.set_price(" aapl ", dec!(150)).unwrap();

        assert_eq!(book.price("AAPL"), Some(dec!(150)));
        assert_eq!(book.price("aapl"), Some(dec!(150)));
        assert!(book.contains("Aapl"));
    }

    #[test]
    fn test_unknown_symbol_prices_at_zero() {
        let book = PriceBook::new();
        assert_eq!(book.price("TSLA"), None);
        assert_eq!(book.price_or_zero("TSLA"), Decimal::ZERO);
    }

    #[test]
    fn test_rejects_bad_quotes() {
        let mut book = PriceBook::new();
        assert_eq!(book.set_price("   ", dec!(1)), Err(MarketError::EmptySymbol));
        assert!(matches!(
            book.set_price("MSFT", dec!(0)),
            Err(MarketError::InvalidPrice { .. })
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_quotes_in_listing_order() {
        let mut book = PriceBook::new();
        book.set_price("AAPL", dec!(150)).unwrap();
        book.set_price("GOOGL", dec!(2800)).unwrap();
        book.set_price("AAPL", dec!(155)).unwrap();

        let quotes: Vec<(&str, Decimal)> = book.quotes().collect();
        assert_eq!(quotes, vec![("AAPL", dec!(155)), ("GOOGL", dec!(2800))]);
    }
}
