//! Demonstration portfolio shown on the dashboard
//!
//! The dashboard and analysis pages render fixed sample figures; real
//! aggregation over trade records is a planned follow-up on the server.

use rust_decimal::Decimal;

use super::tag::TagColor;

/// Asset class of a demonstration holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingKind {
    Stock,
    Crypto,
}

impl HoldingKind {
    pub fn label(&self) -> &'static str {
        match self {
            HoldingKind::Stock => "Stock",
            HoldingKind::Crypto => "Crypto",
        }
    }

    pub fn tag_color(&self) -> TagColor {
        match self {
            HoldingKind::Stock => TagColor::Blue,
            HoldingKind::Crypto => TagColor::Gold,
        }
    }
}

/// One row of the dashboard holdings table
#[derive(Debug, Clone)]
pub struct Holding {
    pub name: &'static str,
    pub code: &'static str,
    pub kind: HoldingKind,
    pub buy_price: Decimal,
    pub current_price: Decimal,
    pub quantity: Decimal,
    pub profit: Decimal,
    pub profit_rate: Decimal,
}

/// Headline figures for the dashboard stat cards
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_invested: Decimal,
    pub market_value: Decimal,
    pub total_profit: Decimal,
    pub return_rate: Decimal,
    pub profitable_count: usize,
}

pub fn sample_summary() -> DashboardSummary {
    DashboardSummary {
        total_invested: Decimal::from(100_000),
        market_value: Decimal::from(125_000),
        total_profit: Decimal::from(25_000),
        return_rate: Decimal::from(25),
        profitable_count: 2,
    }
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        Holding {
            name: "Tencent Holdings",
            code: "00700.HK",
            kind: HoldingKind::Stock,
            buy_price: Decimal::new(3505, 1),
            current_price: Decimal::new(4208, 1),
            quantity: Decimal::from(100),
            profit: Decimal::from(7030),
            profit_rate: Decimal::new(2005, 2),
        },
        Holding {
            name: "Alibaba",
            code: "BABA",
            kind: HoldingKind::Stock,
            buy_price: Decimal::new(1802, 1),
            current_price: Decimal::new(1655, 1),
            quantity: Decimal::from(50),
            profit: Decimal::from(-735),
            profit_rate: Decimal::new(-816, 2),
        },
        Holding {
            name: "Bitcoin",
            code: "BTC",
            kind: HoldingKind::Crypto,
            buy_price: Decimal::from(45_000),
            current_price: Decimal::from(52_000),
            quantity: Decimal::new(5, 1),
            profit: Decimal::from(3500),
            profit_rate: Decimal::new(1556, 2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_figures_are_consistent() {
        let summary = sample_summary();
        assert_eq!(
            summary.market_value - summary.total_invested,
            summary.total_profit
        );
        let holdings = sample_holdings();
        let profitable = holdings.iter().filter(|h| h.profit > Decimal::ZERO).count();
        assert_eq!(profitable, summary.profitable_count);
    }

    #[test]
    fn test_sample_holding_prices() {
        let holdings = sample_holdings();
        assert_eq!(holdings[0].buy_price, dec!(350.5));
        assert_eq!(holdings[1].profit, dec!(-735));
        assert_eq!(holdings[2].quantity, dec!(0.5));
    }
}
