//! Brokers command: list the broker directory

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::display;
use crate::models::Country;

#[derive(Args, Clone)]
pub struct BrokersArgs {
    /// Only brokers with active accounts
    #[arg(long)]
    pub active: bool,

    /// Filter by country code (e.g. HK, US)
    #[arg(long)]
    pub country: Option<String>,

    /// Search by name keyword
    #[arg(long)]
    pub keyword: Option<String>,
}

pub struct BrokersCommand {
    args: BrokersArgs,
}

impl BrokersCommand {
    pub fn new(args: BrokersArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, config: &ApiConfig) -> Result<()> {
        let client = ApiClient::new(config).context("Failed to build API client")?;

        let brokers = if let Some(keyword) = &self.args.keyword {
            debug!("Searching brokers by keyword '{}'", keyword);
            client.search_brokers(keyword).await
        } else if let Some(country) = &self.args.country {
            let country = Country::from(country.to_uppercase());
            client.fetch_brokers_by_country(&country).await
        } else if self.args.active {
            client.fetch_active_brokers().await
        } else {
            client.fetch_brokers().await
        }
        .context("Failed to fetch brokers")?;

        display::print_brokers(&brokers);
        Ok(())
    }
}
