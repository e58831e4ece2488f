//! Dashboard command: launch the full-screen TUI

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::ui;

#[derive(Args, Clone)]
pub struct DashboardArgs {}

pub struct DashboardCommand {
    _args: DashboardArgs,
}

impl DashboardCommand {
    pub fn new(args: DashboardArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self, config: &ApiConfig) -> Result<()> {
        info!("Starting dashboard against {}", config.base_url);
        let client = ApiClient::new(config).context("Failed to build API client")?;
        ui::run(client).await
    }
}
