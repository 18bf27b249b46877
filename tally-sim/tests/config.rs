use rust_decimal_macros::dec;
use tally_common::TallyError;
use tally_sim::{
    config::SimConfig,
    runner,
    setup::{ensure_config, write_default_config},
};

#[test]
fn test_ensure_config_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tally.json");

    assert!(ensure_config(&path).unwrap());
    assert!(path.exists());
    assert!(!ensure_config(&path).unwrap());

    let loaded = SimConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, SimConfig::default());
}

#[test]
fn test_save_and_load_custom_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");

    let mut config = SimConfig::default();
    config.market.truncate(1);
    config.market[0].price = dec!(151.75);
    config.orders.clear();
    config.save_to_file(&path).unwrap();

    let loaded = SimConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.market.len(), 1);
    assert_eq!(loaded.market[0].price, dec!(151.75));

    let outcome = runner::run(&loaded).unwrap();
    assert!(outcome.portfolio.trades().is_empty());
}

#[test]
fn test_load_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "market": [ { "symbol": "AAPL", "price": -5 } ] }"#).unwrap();

    assert!(matches!(SimConfig::load_from_file(&path), Err(TallyError::Config(_))));
}

#[test]
fn test_load_reports_missing_file_and_bad_json() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        SimConfig::load_from_file(dir.path().join("missing.json")),
        Err(TallyError::Io(_))
    ));

    let path = dir.path().join("broken.json");
    write_default_config(&path).unwrap();
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(SimConfig::load_from_file(&path), Err(TallyError::Json(_))));
}
