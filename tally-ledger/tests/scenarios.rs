use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_ledger::{Ledger, LedgerError, PortfolioError, PriceBook, Portfolio, ReservationDesk, ReservationError};

fn seeded_market() -> PriceBook {
    let mut market = PriceBook::new();
    for (symbol, price) in [("AAPL", dec!(150.0)), ("GOOGL", dec!(2800.0)), ("AMZN", dec!(3400.0)), ("MSFT", dec!(300.0))] {
        market.set_price(symbol, price).unwrap();
    }
    market
}

#[test]
fn test_ledger_spec_scenarios() {
    let mut ledger: Ledger<String, u64, Decimal> = Ledger::new();

    ledger.add("AAPL".to_string(), 10, Some(dec!(150))).unwrap();
    ledger.add("AAPL".to_string(), 5, None).unwrap();
    assert_eq!(ledger.get("AAPL").map(|e| e.quantity), Some(15));

    ledger.remove("AAPL", 15).unwrap();
    assert!(ledger.get("AAPL").is_none());
    assert!(ledger.list().iter().all(|e| e.key != "AAPL"));

    assert!(matches!(
        ledger.remove("AAPL", 1),
        Err(LedgerError::InsufficientQuantity { .. })
    ));
    assert!(ledger.is_empty());

    ledger.add("AAPL".to_string(), 10, Some(dec!(150))).unwrap();
    let market = seeded_market();
    assert_eq!(ledger.total_value(|key| market.price_or_zero(key)), Some(dec!(1500)));
}

#[test]
fn test_trading_session() {
    let market = seeded_market();
    let mut portfolio = Portfolio::new();

    portfolio.buy(&market, "aapl", 10).unwrap();
    portfolio.buy(&market, "MSFT", 2).unwrap();
    portfolio.buy(&market, "AAPL", 5).unwrap();
    portfolio.sell(&market, "MSFT", 2).unwrap();

    assert!(matches!(
        portfolio.sell(&market, "MSFT", 1),
        Err(PortfolioError::Ledger(LedgerError::InsufficientQuantity { .. }))
    ));
    assert!(matches!(
        portfolio.buy(&market, "NFLX", 1),
        Err(PortfolioError::UnknownSymbol(_))
    ));

    let report = portfolio.report(&market).unwrap();
    assert_eq!(report.positions.len(), 1);
    assert_eq!(report.positions[0].quantity, 15);
    assert_eq!(report.total_value, dec!(2250));

    let ids: Vec<u64> = portfolio.trades().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_hotel_session() {
    let mut desk = ReservationDesk::new();
    desk.add_rooms("Standard", 1, dec!(120)).unwrap();
    desk.add_rooms("Deluxe", 2, dec!(200)).unwrap();

    let first = desk.book("Ana", "Standard", 2).unwrap();
    let second = desk.book("Bo", "Deluxe", 1).unwrap();
    assert!(matches!(
        desk.book("Cy", "Standard", 1),
        Err(ReservationError::NoVacancy { .. })
    ));

    desk.cancel(first.id).unwrap();
    let third = desk.book("Cy", "Standard", 1).unwrap();

    let active: Vec<u64> = desk.reservations().map(|r| r.id).collect();
    assert_eq!(active, vec![second.id, third.id]);
    assert_eq!(third.payment.amount, dec!(120));
    assert_eq!(desk.vacancies("Deluxe"), 1);
    assert_eq!(desk.vacancies("Standard"), 0);
}
