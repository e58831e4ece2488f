//! Profit analysis page: headline figures over a placeholder panel

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Alignment,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{PageContext, PageView};
use crate::format;
use crate::models::sample_summary;
use crate::ui::widgets::{StatCard, Trend};

pub struct AnalysisPage;

impl AnalysisPage {
    pub fn new() -> Self {
        Self
    }
}

impl PageView for AnalysisPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let summary = sample_summary();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(chunks[0]);

        StatCard::new(
            "Total P&L",
            ctx.visibility
                .cover(format!("¥{}", format::thousands(summary.total_profit, 0))),
            Color::Green,
        )
        .with_trend(Trend::Rising)
        .render(frame, cards[0]);
        StatCard::new(
            "Total Return",
            format::percent(summary.return_rate),
            Color::Green,
        )
        .render(frame, cards[1]);
        StatCard::new(
            "Profitable Positions",
            summary.profitable_count.to_string(),
            Color::Green,
        )
        .render(frame, cards[2]);

        let placeholder = Paragraph::new(vec![
            Line::default(),
            Line::from("Detailed profit charts will appear here."),
            Line::from("Per-position and per-strategy breakdowns are planned."),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Profit Analysis "),
        );
        frame.render_widget(placeholder, chunks[1]);
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &PageContext) -> bool {
        false
    }
}

impl Default for AnalysisPage {
    fn default() -> Self {
        Self::new()
    }
}
