pub mod cli;
pub mod config;
pub mod runner;
pub mod setup;
