//! Overview page: headline stat cards and the demonstration holdings table

use crossterm::event::KeyEvent;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};
use rust_decimal::Decimal;

use super::{PageContext, PageView};
use crate::format;
use crate::models::{sample_holdings, sample_summary, Holding};
use crate::ui::theme;
use crate::ui::widgets::{StatCard, Trend};

pub struct DashboardPage {
    holdings: Vec<Holding>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            holdings: sample_holdings(),
        }
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let summary = sample_summary();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let cover = |value: Decimal| {
            ctx.visibility
                .cover(format!("¥{}", format::thousands(value, 0)))
        };

        StatCard::new("Total Invested", cover(summary.total_invested), Color::Green)
            .render(frame, chunks[0]);
        StatCard::new("Market Value", cover(summary.market_value), Color::Red)
            .render(frame, chunks[1]);
        let profit_trend = if summary.total_profit >= Decimal::ZERO {
            Trend::Rising
        } else {
            Trend::Falling
        };
        StatCard::new("Total P&L", cover(summary.total_profit), Color::Green)
            .with_trend(profit_trend)
            .render(frame, chunks[2]);
        StatCard::new(
            "Return",
            format::percent(summary.return_rate),
            Color::Green,
        )
        .render(frame, chunks[3]);
    }

    fn render_holdings(&self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let header = Row::new(vec![
            "Name", "Code", "Class", "Buy", "Current", "Qty", "Profit", "Return",
        ])
        .style(theme::header_style());

        let rows: Vec<Row> = self
            .holdings
            .iter()
            .map(|holding| {
                let profit_style = if holding.profit >= Decimal::ZERO {
                    theme::gain_style()
                } else {
                    theme::loss_style()
                };
                let marker = if holding.profit >= Decimal::ZERO {
                    Trend::Rising.marker()
                } else {
                    Trend::Falling.marker()
                };
                Row::new(vec![
                    Cell::from(holding.name),
                    Cell::from(holding.code),
                    Cell::from(holding.kind.label())
                        .style(theme::tag_style(holding.kind.tag_color())),
                    Cell::from(ctx.visibility.cover(format::price(holding.buy_price))),
                    Cell::from(ctx.visibility.cover(format::price(holding.current_price))),
                    Cell::from(ctx.visibility.cover(holding.quantity.normalize().to_string())),
                    Cell::from(ctx.visibility.cover(format!(
                        "{} {}",
                        format::signed_thousands(holding.profit, 0),
                        marker
                    )))
                    .style(profit_style),
                    Cell::from(format::percent(holding.profit_rate)).style(profit_style),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Min(18),
                Constraint::Length(10),
                Constraint::Length(7),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(7),
                Constraint::Length(12),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Holdings (sample data) "),
        );

        frame.render_widget(table, area);
    }
}

impl PageView for DashboardPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        self.render_cards(frame, chunks[0], ctx);
        self.render_holdings(frame, chunks[1], ctx);
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &PageContext) -> bool {
        false
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::TestCtx;

    fn render_to_text(page: &mut DashboardPage, ctx: &PageContext) -> String {
        let backend = ratatui::backend::TestBackend::new(120, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| page.render(frame, frame.area(), ctx))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_hidden_amounts_mask_stats_and_holding_quantities() {
        let mut page = DashboardPage::new();
        let mut fixture = TestCtx::new();
        fixture.visibility.toggle();

        let content = render_to_text(&mut page, &fixture.ctx());
        assert!(content.contains("****"));
        // Invested stat, buy price and the Bitcoin quantity all stay hidden
        assert!(!content.contains("100,000"));
        assert!(!content.contains("350.5"));
        assert!(!content.contains("0.5"));
        // Names and tags stay readable
        assert!(content.contains("Tencent"));
    }

    #[test]
    fn test_visible_amounts_render_in_the_clear() {
        let mut page = DashboardPage::new();
        let fixture = TestCtx::new();

        let content = render_to_text(&mut page, &fixture.ctx());
        assert!(content.contains("100,000"));
        assert!(content.contains("0.5"));
    }
}
