//! Console renderers used by the headless subcommands

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::api::{ApiError, HealthStatus};
use crate::format;
use crate::models::{Broker, CashDirection, CashFlowRecord, Strategy, TagColor, TradeRecord};

/// Apply a tag color to console text
pub fn paint(text: &str, color: TagColor) -> String {
    match color {
        TagColor::Green => text.green().to_string(),
        TagColor::Red => text.red().to_string(),
        TagColor::Orange => text.yellow().to_string(),
        TagColor::Blue => text.blue().to_string(),
        TagColor::Purple => text.purple().to_string(),
        TagColor::Magenta => text.bright_magenta().to_string(),
        TagColor::Cyan => text.cyan().to_string(),
        TagColor::Gold => text.bright_yellow().to_string(),
        TagColor::Default => text.to_string(),
    }
}

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn brokers_table(brokers: &[Broker]) -> Table {
    let mut table = base_table(vec![
        "ID",
        "Name",
        "Country",
        "Email",
        "Phone",
        "Status",
        "Description",
    ]);

    for broker in brokers {
        let status = if broker.is_active {
            "Active".green().to_string()
        } else {
            "Disabled".bright_black().to_string()
        };

        table.add_row(vec![
            broker.id.to_string(),
            broker.broker_name.clone(),
            paint(broker.country.label(), broker.country.tag_color()),
            broker.email.clone().unwrap_or_default(),
            broker.phone.clone().unwrap_or_default(),
            status,
            broker.description.clone().unwrap_or_default(),
        ]);
    }

    table
}

pub fn cash_flow_table(records: &[CashFlowRecord]) -> Table {
    let mut table = base_table(vec![
        "ID",
        "Date",
        "Type",
        "Broker",
        "Amount",
        "Currency",
        "Bank",
        "Description",
    ]);

    for record in records {
        let type_color = record.record_type.tag_color();
        let amount = format::signed_thousands(record.signed_amount(), 2);

        table.add_row(vec![
            record.id.to_string(),
            record.record_date.to_string(),
            paint(record.record_type.label(), type_color),
            record.broker_label(),
            paint(&amount, type_color),
            paint(record.currency.code(), record.currency.tag_color()),
            record.bank.clone().unwrap_or_default(),
            record.description.clone().unwrap_or_default(),
        ]);
    }

    table
}

pub fn trades_table(trades: &[TradeRecord]) -> Table {
    let mut table = base_table(vec![
        "ID", "Date", "Broker", "Asset", "Symbol", "Side", "Qty", "Price", "Amount", "Fee", "Ccy",
        "Strategy",
    ]);

    for trade in trades {
        let amount = format::currency_amount(trade.amount, &trade.currency);
        let amount_display = match trade.trade_type.cash_direction() {
            CashDirection::Outflow => amount.red().to_string(),
            CashDirection::Inflow => amount.green().to_string(),
            CashDirection::Neutral => amount,
        };

        table.add_row(vec![
            trade.id.to_string(),
            trade.trade_date.to_string(),
            trade.broker_label(),
            paint(trade.asset_type.label(), trade.asset_type.tag_color()),
            trade.symbol.clone(),
            paint(trade.trade_type.label(), trade.trade_type.tag_color()),
            format::thousands(Decimal::from(trade.quantity), 0),
            format::price(trade.price),
            amount_display,
            format::thousands(trade.fee, 2),
            paint(trade.currency.code(), trade.currency.tag_color()),
            trade.strategy_label().unwrap_or_default(),
        ]);
    }

    table
}

pub fn strategies_table(strategies: &[Strategy]) -> Table {
    let mut table = base_table(vec!["ID", "Name", "Description", "Created", "Updated"]);

    for strategy in strategies {
        table.add_row(vec![
            strategy.id.to_string(),
            strategy.strategy_name.clone(),
            strategy.description.clone().unwrap_or_default(),
            strategy.created_at.format("%Y-%m-%d %H:%M").to_string(),
            strategy.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    table
}

pub fn print_brokers(brokers: &[Broker]) {
    if brokers.is_empty() {
        println!("{}", "No brokers found".bright_black().italic());
        return;
    }
    println!("{}", brokers_table(brokers));
}

pub fn print_cash_flow(records: &[CashFlowRecord]) {
    if records.is_empty() {
        println!("{}", "No cash flow records found".bright_black().italic());
        return;
    }
    println!("{}", cash_flow_table(records));
}

pub fn print_trades(trades: &[TradeRecord]) {
    if trades.is_empty() {
        println!("{}", "No trade records found".bright_black().italic());
        return;
    }
    println!("{}", trades_table(trades));
}

pub fn print_strategies(strategies: &[Strategy]) {
    if strategies.is_empty() {
        println!("{}", "No strategies found".bright_black().italic());
        return;
    }
    println!("{}", strategies_table(strategies));
}

/// Render the health probe outcome
pub fn print_health(base_url: &str, result: &Result<HealthStatus, ApiError>) {
    match result {
        Ok(health) if health.is_up() => {
            println!("{} {} is {}", "●".green(), base_url, "UP".green().bold());
        }
        Ok(health) => {
            println!(
                "{} {} reports {}",
                "●".yellow(),
                base_url,
                health.status.yellow()
            );
        }
        Err(e) => {
            println!("{} {} is {}", "●".red(), base_url, "DOWN".red().bold());
            println!("  {}", e.to_string().bright_black());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Currency, RecordType, TradeType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn broker(id: i64, name: &str, country: Country, active: bool) -> Broker {
        Broker {
            id,
            broker_name: name.to_string(),
            country,
            description: None,
            email: None,
            phone: None,
            is_active: active,
        }
    }

    #[test]
    fn test_brokers_table_lists_every_row() {
        let brokers = vec![
            broker(1, "Futu", Country::Hk, true),
            broker(2, "Tiger", Country::Sg, false),
        ];
        let rendered = brokers_table(&brokers).to_string();
        assert!(rendered.contains("Futu"));
        assert!(rendered.contains("Tiger"));
        assert!(rendered.contains("Active"));
        assert!(rendered.contains("Disabled"));
    }

    #[test]
    fn test_cash_flow_table_signs_amounts() {
        let record = CashFlowRecord {
            id: 4,
            record_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            broker_id: 1,
            broker: None,
            record_type: RecordType::Withdrawal,
            amount: dec!(3000),
            currency: Currency::Usd,
            bank: Some("HSBC".to_string()),
            description: None,
        };
        let rendered = cash_flow_table(&[record]).to_string();
        assert!(rendered.contains("-3,000.00"));
        assert!(rendered.contains("HSBC"));
        assert!(rendered.contains("#1"));
    }

    #[test]
    fn test_trades_table_shows_currency_symbol() {
        let trade = TradeRecord {
            id: 9,
            trade_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            broker_id: 2,
            broker: None,
            asset_type: crate::models::AssetType::Stock,
            symbol: "AAPL".to_string(),
            name: None,
            underlying_symbol: "AAPL".to_string(),
            trade_type: TradeType::Buy,
            quantity: 100,
            price: dec!(185.5),
            amount: dec!(18550),
            fee: dec!(9.28),
            currency: Currency::Usd,
            strategy_id: None,
            strategy: None,
        };
        let rendered = trades_table(&[trade]).to_string();
        assert!(rendered.contains("AAPL"));
        assert!(rendered.contains("185.5"));
        assert!(rendered.contains("$18,550.00"));
    }
}
