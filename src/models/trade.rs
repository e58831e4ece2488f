//! Trade records and their classification enums

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::broker::Broker;
use super::currency::Currency;
use super::strategy::Strategy;
use super::tag::TagColor;

/// Kind of instrument a trade is in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Stock,
    Etf,
    OptionCall,
    OptionPut,
    Other(String),
}

impl AssetType {
    pub fn all() -> Vec<AssetType> {
        vec![
            AssetType::Stock,
            AssetType::Etf,
            AssetType::OptionCall,
            AssetType::OptionPut,
        ]
    }

    pub fn code(&self) -> &str {
        match self {
            AssetType::Stock => "STOCK",
            AssetType::Etf => "ETF",
            AssetType::OptionCall => "OPTION_CALL",
            AssetType::OptionPut => "OPTION_PUT",
            AssetType::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Etf => "ETF",
            AssetType::OptionCall => "Call",
            AssetType::OptionPut => "Put",
            AssetType::Other(code) => code,
        }
    }

    pub fn tag_color(&self) -> TagColor {
        match self {
            AssetType::Stock => TagColor::Blue,
            AssetType::Etf => TagColor::Gold,
            AssetType::OptionCall => TagColor::Orange,
            AssetType::OptionPut => TagColor::Magenta,
            AssetType::Other(_) => TagColor::Default,
        }
    }
}

impl From<String> for AssetType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "STOCK" => AssetType::Stock,
            "ETF" => AssetType::Etf,
            "OPTION_CALL" => AssetType::OptionCall,
            "OPTION_PUT" => AssetType::OptionPut,
            _ => AssetType::Other(code),
        }
    }
}

impl From<AssetType> for String {
    fn from(value: AssetType) -> Self {
        value.code().to_string()
    }
}

/// How a trade was executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeType {
    Buy,
    Sell,
    OptionExpire,
    ExerciseBuy,
    ExerciseSell,
    EarlyExercise,
    Other(String),
}

/// Which way cash moves when a trade settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashDirection {
    Outflow,
    Inflow,
    Neutral,
}

impl TradeType {
    pub fn all() -> Vec<TradeType> {
        vec![
            TradeType::Buy,
            TradeType::Sell,
            TradeType::OptionExpire,
            TradeType::ExerciseBuy,
            TradeType::ExerciseSell,
            TradeType::EarlyExercise,
        ]
    }

    pub fn code(&self) -> &str {
        match self {
            TradeType::Buy => "BUY",
            TradeType::Sell => "SELL",
            TradeType::OptionExpire => "OPTION_EXPIRE",
            TradeType::ExerciseBuy => "EXERCISE_BUY",
            TradeType::ExerciseSell => "EXERCISE_SELL",
            TradeType::EarlyExercise => "EARLY_EXERCISE",
            TradeType::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TradeType::Buy => "Buy",
            TradeType::Sell => "Sell",
            TradeType::OptionExpire => "Expire",
            TradeType::ExerciseBuy => "Exercise Buy",
            TradeType::ExerciseSell => "Exercise Sell",
            TradeType::EarlyExercise => "Early Exercise",
            TradeType::Other(code) => code,
        }
    }

    pub fn tag_color(&self) -> TagColor {
        match self {
            TradeType::Buy => TagColor::Green,
            TradeType::Sell => TagColor::Red,
            TradeType::OptionExpire => TagColor::Default,
            TradeType::ExerciseBuy => TagColor::Cyan,
            TradeType::ExerciseSell => TagColor::Purple,
            TradeType::EarlyExercise => TagColor::Gold,
            TradeType::Other(_) => TagColor::Default,
        }
    }

    /// Buys and exercises spend cash, sells receive it, expiry moves none
    pub fn cash_direction(&self) -> CashDirection {
        match self {
            TradeType::Buy | TradeType::ExerciseBuy | TradeType::EarlyExercise => {
                CashDirection::Outflow
            }
            TradeType::Sell | TradeType::ExerciseSell => CashDirection::Inflow,
            TradeType::OptionExpire | TradeType::Other(_) => CashDirection::Neutral,
        }
    }
}

impl From<String> for TradeType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "BUY" => TradeType::Buy,
            "SELL" => TradeType::Sell,
            "OPTION_EXPIRE" => TradeType::OptionExpire,
            "EXERCISE_BUY" => TradeType::ExerciseBuy,
            "EXERCISE_SELL" => TradeType::ExerciseSell,
            "EARLY_EXERCISE" => TradeType::EarlyExercise,
            _ => TradeType::Other(code),
        }
    }
}

impl From<TradeType> for String {
    fn from(value: TradeType) -> Self {
        value.code().to_string()
    }
}

/// Trade record as returned by the API, with broker and strategy joined in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: i64,
    pub trade_date: NaiveDate,
    pub broker_id: i64,
    #[serde(default)]
    pub broker: Option<Broker>,
    pub asset_type: AssetType,
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub underlying_symbol: String,
    pub trade_type: TradeType,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    pub currency: Currency,
    #[serde(default)]
    pub strategy_id: Option<i64>,
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

impl TradeRecord {
    /// Underlying used for grouping and search; options fall back to their
    /// own symbol when the underlying was never filled in
    pub fn effective_underlying(&self) -> &str {
        if self.underlying_symbol.is_empty() {
            &self.symbol
        } else {
            &self.underlying_symbol
        }
    }

    pub fn broker_label(&self) -> String {
        match &self.broker {
            Some(broker) => broker.broker_name.clone(),
            None => format!("#{}", self.broker_id),
        }
    }

    /// Strategy display name, when the trade is attributed to one
    pub fn strategy_label(&self) -> Option<String> {
        match (&self.strategy, self.strategy_id) {
            (Some(strategy), _) => Some(strategy.strategy_name.clone()),
            (None, Some(id)) => Some(format!("#{}", id)),
            (None, None) => None,
        }
    }
}

/// Gross amount of a fill, rounded to cents
pub fn trade_amount(quantity: i64, price: Decimal) -> Decimal {
    (price * Decimal::from(quantity)).round_dp(2)
}

/// Payload for creating or updating a trade record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTradeRecord {
    pub trade_date: NaiveDate,
    pub broker_id: i64,
    pub asset_type: AssetType,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub underlying_symbol: String,
    pub trade_type: TradeType,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<i64>,
}
