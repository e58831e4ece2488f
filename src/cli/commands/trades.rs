//! Trades command: list trade records

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::display;
use crate::models::AssetType;

#[derive(Args, Clone)]
pub struct TradesArgs {
    /// Filter by broker id
    #[arg(long)]
    pub broker: Option<i64>,

    /// Filter by asset type (STOCK, ETF, OPTION_CALL, OPTION_PUT)
    #[arg(long)]
    pub asset_type: Option<String>,

    /// Filter by strategy id
    #[arg(long)]
    pub strategy: Option<i64>,

    /// Search by symbol substring
    #[arg(long)]
    pub symbol: Option<String>,

    /// Start of the date range (YYYY-MM-DD); requires --to
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD); requires --from
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,
}

pub struct TradesCommand {
    args: TradesArgs,
}

impl TradesCommand {
    pub fn new(args: TradesArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, config: &ApiConfig) -> Result<()> {
        let client = ApiClient::new(config).context("Failed to build API client")?;

        let trades = if let Some(symbol) = &self.args.symbol {
            client.search_trades_by_symbol(symbol).await
        } else if let Some(broker) = self.args.broker {
            client.fetch_trades_by_broker(broker).await
        } else if let Some(code) = &self.args.asset_type {
            let asset_type = AssetType::from(code.to_uppercase());
            client.fetch_trades_by_asset_type(&asset_type).await
        } else if let Some(strategy) = self.args.strategy {
            client.fetch_trades_by_strategy(strategy).await
        } else if let Some((from, to)) = self.args.from.zip(self.args.to) {
            client.fetch_trades_by_date_range(from, to).await
        } else {
            client.fetch_trade_records().await
        }
        .context("Failed to fetch trade records")?;

        display::print_trades(&trades);
        Ok(())
    }
}
