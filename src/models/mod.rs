//! Domain model types shared by the API client and both front ends

pub mod broker;
pub mod cash_flow;
pub mod currency;
pub mod holding;
pub mod strategy;
pub mod tag;
pub mod trade;

pub use broker::{Broker, Country, NewBroker};
pub use cash_flow::{CashFlowRecord, NewCashFlowRecord, RecordType};
pub use currency::Currency;
pub use holding::{sample_holdings, sample_summary, DashboardSummary, Holding, HoldingKind};
pub use strategy::{NewStrategy, Strategy};
pub use tag::TagColor;
pub use trade::{trade_amount, AssetType, CashDirection, NewTradeRecord, TradeRecord, TradeType};
