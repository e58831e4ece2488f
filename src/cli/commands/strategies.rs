//! Strategies command: list trading strategies

use anyhow::{Context, Result};
use clap::Args;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::display;

#[derive(Args, Clone)]
pub struct StrategiesArgs {}

pub struct StrategiesCommand {
    _args: StrategiesArgs,
}

impl StrategiesCommand {
    pub fn new(args: StrategiesArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, config: &ApiConfig) -> Result<()> {
        let client = ApiClient::new(config).context("Failed to build API client")?;
        let strategies = client
            .fetch_strategies()
            .await
            .context("Failed to fetch strategies")?;
        display::print_strategies(&strategies);
        Ok(())
    }
}
