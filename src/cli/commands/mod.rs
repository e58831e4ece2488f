//! Subcommand implementations; each follows the Args + Command pair pattern

pub mod brokers;
pub mod cashflow;
pub mod dashboard;
pub mod health;
pub mod strategies;
pub mod trades;
pub mod version;
