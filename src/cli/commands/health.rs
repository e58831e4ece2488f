//! Health command: one probe, exit status reflects the outcome

use anyhow::{Context, Result};
use clap::Args;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::display;

#[derive(Args, Clone)]
pub struct HealthArgs {}

pub struct HealthCommand {
    _args: HealthArgs,
}

impl HealthCommand {
    pub fn new(args: HealthArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, config: &ApiConfig) -> Result<()> {
        let client = ApiClient::new(config).context("Failed to build API client")?;
        let result = client.health().await;
        display::print_health(client.base_url(), &result);
        match result {
            Ok(health) if health.is_up() => Ok(()),
            Ok(health) => Err(anyhow::anyhow!(
                "Backend reported status {}",
                health.status
            )),
            Err(e) => Err(e).context("Health check failed"),
        }
    }
}
