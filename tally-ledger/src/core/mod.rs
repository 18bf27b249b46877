pub mod ledger;
pub mod market;
pub mod portfolio;
pub mod reservations;
