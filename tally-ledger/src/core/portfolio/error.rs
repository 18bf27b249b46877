use thiserror::Error;

use crate::core::ledger::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// The symbol is not quoted in the market the order was placed against.
    #[error("Stock symbol does not exist: {0}")]
    UnknownSymbol(String),

    /// A position (or the portfolio total) is worth more than a `Decimal` can hold.
    #[error("Valuation overflow for {0}")]
    ValuationOverflow(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
