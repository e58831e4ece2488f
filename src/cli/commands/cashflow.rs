//! Cashflow command: list deposits and withdrawals

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::display;
use crate::models::RecordType;

#[derive(Args, Clone)]
pub struct CashflowArgs {
    /// Filter by broker id
    #[arg(long)]
    pub broker: Option<i64>,

    /// Filter by record type (DEPOSIT or WITHDRAWAL)
    #[arg(long)]
    pub record_type: Option<String>,

    /// Start of the date range (YYYY-MM-DD); requires --to
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD); requires --from
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,
}

pub struct CashflowCommand {
    args: CashflowArgs,
}

impl CashflowCommand {
    pub fn new(args: CashflowArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, config: &ApiConfig) -> Result<()> {
        let client = ApiClient::new(config).context("Failed to build API client")?;

        let records = match (self.args.broker, self.args.from.zip(self.args.to)) {
            (Some(broker), Some((from, to))) => {
                client
                    .fetch_cash_flow_by_broker_and_date_range(broker, from, to)
                    .await
            }
            (Some(broker), None) => client.fetch_cash_flow_by_broker(broker).await,
            (None, Some((from, to))) => client.fetch_cash_flow_by_date_range(from, to).await,
            (None, None) => match &self.args.record_type {
                Some(code) => {
                    let record_type = RecordType::from(code.to_uppercase());
                    client.fetch_cash_flow_by_type(&record_type).await
                }
                None => client.fetch_cash_flow_records().await,
            },
        }
        .context("Failed to fetch cash flow records")?;

        display::print_cash_flow(&records);
        Ok(())
    }
}
