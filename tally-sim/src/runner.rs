use tally_common::{Result, TallyError};
use tally_grades::GradeBook;
use tally_ledger::{Portfolio, PriceBook, ReservationDesk, Side};
use tracing::{info, warn};

use crate::config::SimConfig;

/// State left behind by a simulation run.
#[derive(Debug, Clone)]
pub struct SimOutcome {
    pub market: PriceBook,
    pub portfolio: Portfolio,
    pub desk: ReservationDesk,
    pub grades: GradeBook,
    /// Operations refused by a collaborator (bad quantity, no vacancy, ...).
    pub rejected: usize,
}

/// Seeds the market and inventory from `config`, then replays its orders,
/// bookings, cancellations and grades in that order.
///
/// Seeding errors abort the run. Rejected activity is logged and counted.
pub fn run(config: &SimConfig) -> Result<SimOutcome> {
    let mut market = PriceBook::new();
    for quote in &config.market {
        market
            .set_price(&quote.symbol, quote.price)
            .map_err(|e| TallyError::Config(e.to_string()))?;
    }

    let mut desk = ReservationDesk::new();
    for room in &config.rooms {
        desk.add_rooms(&room.category, room.count, room.nightly_rate)
            .map_err(|e| TallyError::Config(e.to_string()))?;
    }

    let mut rejected = 0;

    let mut portfolio = Portfolio::new();
    for order in &config.orders {
        let result = match order.side {
            Side::Buy => portfolio.buy(&market, &order.symbol, order.quantity),
            Side::Sell => portfolio.sell(&market, &order.symbol, order.quantity),
        };
        if let Err(e) = result {
            warn!("Order {} {} {} refused: {}", order.side, order.quantity, order.symbol, e);
            rejected += 1;
        }
    }

    for booking in &config.bookings {
        if let Err(e) = desk.book(&booking.guest, &booking.category, booking.nights) {
            warn!("Booking for {} refused: {}", booking.guest, e);
            rejected += 1;
        }
    }

    for id in &config.cancellations {
        if let Err(e) = desk.cancel(*id) {
            warn!("Cancellation refused: {}", e);
            rejected += 1;
        }
    }

    let mut grades = GradeBook::new();
    for grade in &config.grades {
        if let Err(e) = grades.add(*grade) {
            warn!("Grade refused: {}", e);
            rejected += 1;
        }
    }

    info!(
        trades = portfolio.trades().len(),
        reservations = desk.reservations().count(),
        grades = grades.len(),
        rejected,
        "simulation finished"
    );

    Ok(SimOutcome {
        market,
        portfolio,
        desk,
        grades,
        rejected,
    })
}

/// Logs the end-of-run reports.
pub fn report(outcome: &SimOutcome) {
    for (symbol, price) in outcome.market.quotes() {
        info!("Market {}: ${}", symbol, price);
    }

    match outcome.portfolio.report(&outcome.market) {
        Ok(report) => {
            for line in report.to_string().lines() {
                info!("{}", line);
            }
        }
        Err(e) => warn!("Portfolio report unavailable: {}", e),
    }

    for entry in outcome.desk.availability().iter() {
        info!("Rooms {}: {} available", entry.key, entry.quantity);
    }
    for reservation in outcome.desk.reservations() {
        info!("{}", reservation);
    }

    match outcome.grades.summary() {
        Some(summary) => info!("Grades: {}", summary),
        None => info!("No grades entered."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tally_ledger::PortfolioError;

    #[test]
    fn test_default_run() {
        let outcome = run(&SimConfig::default()).unwrap();

        // GOOGL sell (nothing held), TSLA buy (unknown), Suite for Cy (taken).
        assert_eq!(outcome.rejected, 3);
        assert_eq!(outcome.portfolio.quantity("AAPL"), 10);
        assert_eq!(outcome.portfolio.quantity("MSFT"), 3);
        assert_eq!(outcome.portfolio.report(&outcome.market).unwrap().total_value, dec!(2400));

        assert_eq!(outcome.desk.vacancies("Standard"), 5);
        assert_eq!(outcome.desk.vacancies("Suite"), 0);
        assert_eq!(outcome.desk.reservations().count(), 1);

        let summary = outcome.grades.summary().unwrap();
        assert_eq!(summary.highest, 92.5);
    }

    #[test]
    fn test_bad_grade_is_counted_not_fatal() {
        let mut config = SimConfig::default();
        config.orders.clear();
        config.bookings.clear();
        config.cancellations.clear();
        config.grades = vec![50.0, 150.0];

        let outcome = run(&config).unwrap();
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.grades.len(), 1);
    }

    #[test]
    fn test_unrepresentable_valuation_does_not_abort() {
        let config: SimConfig = serde_json::from_value(serde_json::json!({
            "market": [ { "symbol": "BIG", "price": Decimal::MAX } ],
            "rooms": [ { "category": "Palace", "count": 1, "nightly_rate": Decimal::MAX } ],
            "orders": [ { "side": "buy", "symbol": "BIG", "quantity": 2 } ],
            "bookings": [ { "guest": "Ana", "category": "Palace", "nights": 2 } ]
        }))
        .unwrap();
        config.validate().unwrap();

        let outcome = run(&config).unwrap();
        // The stay cannot be charged; the position is held but cannot be valued.
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.desk.vacancies("Palace"), 1);
        assert_eq!(outcome.portfolio.quantity("BIG"), 2);
        assert!(matches!(
            outcome.portfolio.report(&outcome.market),
            Err(PortfolioError::ValuationOverflow(_))
        ));

        report(&outcome);
    }
}
