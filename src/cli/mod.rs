//! Command-line interface for LedgerBoard
//!
//! `dashboard` runs the full-screen TUI; the remaining subcommands are
//! headless listings over the same API client, suitable for scripts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::ApiConfig;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LogMode, LoggingConfig};

use commands::brokers::{BrokersArgs, BrokersCommand};
use commands::cashflow::{CashflowArgs, CashflowCommand};
use commands::dashboard::{DashboardArgs, DashboardCommand};
use commands::health::{HealthArgs, HealthCommand};
use commands::strategies::{StrategiesArgs, StrategiesCommand};
use commands::trades::{TradesArgs, TradesCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "ledgerboard")]
#[command(version)]
#[command(about = "Terminal dashboard for the LocalLedger investment API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the ledger API (default: LEDGERBOARD_API_URL or http://127.0.0.1:8080)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive dashboard
    Dashboard(DashboardArgs),

    /// Probe the backend health endpoint
    Health(HealthArgs),

    /// List broker accounts
    Brokers(BrokersArgs),

    /// List cash flow records
    Cashflow(CashflowArgs),

    /// List trade records
    Trades(TradesArgs),

    /// List trading strategies
    Strategies(StrategiesArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = ApiConfig::resolve(self.api_url.as_deref())?;
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;

        // The dashboard owns the terminal, so its logs go to file only
        let mode = match self.command {
            Commands::Dashboard(_) => LogMode::FileOnly,
            _ => LogMode::ConsoleAndFile,
        };
        let logging_config =
            LoggingConfig::new(mode, data_paths.clone()).with_verbose(self.verbose > 0);
        init_logging(logging_config)?;

        match self.command {
            Commands::Dashboard(args) => DashboardCommand::new(args).execute(&config).await,
            Commands::Health(args) => HealthCommand::new(args).execute(&config).await,
            Commands::Brokers(args) => BrokersCommand::new(args).execute(&config).await,
            Commands::Cashflow(args) => CashflowCommand::new(args).execute(&config).await,
            Commands::Trades(args) => TradesCommand::new(args).execute(&config).await,
            Commands::Strategies(args) => StrategiesCommand::new(args).execute(&config).await,
            Commands::Version(args) => VersionCommand::new(args).execute(&config).await,
        }
    }
}
