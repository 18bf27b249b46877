pub mod core;

pub use crate::core::ledger::{Ledger, LedgerEntry, LedgerError, Quantity};
pub use crate::core::market::{MarketError, PriceBook};
pub use crate::core::portfolio::{Holding, Portfolio, PortfolioError, PortfolioReport, Side, Trade};
pub use crate::core::reservations::{Reservation, ReservationDesk, ReservationError, RoomRate};
