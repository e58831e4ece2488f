//! Headline figure cards for the dashboard and analysis pages

use ratatui::{
    layout::Alignment,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Direction marker rendered next to profit figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl Trend {
    pub fn marker(&self) -> &'static str {
        match self {
            Trend::Rising => "▲",
            Trend::Falling => "▼",
            Trend::Flat => "",
        }
    }
}

pub struct StatCard<'a> {
    pub title: &'a str,
    pub value: String,
    pub color: Color,
    pub trend: Trend,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: String, color: Color) -> Self {
        Self {
            title,
            value,
            color,
            trend: Trend::Flat,
        }
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let value = match self.trend.marker() {
            "" => self.value.clone(),
            marker => format!("{} {}", self.value, marker),
        };
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default()
                .fg(self.color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(self.title));
        frame.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_markers() {
        assert_eq!(Trend::Rising.marker(), "▲");
        assert_eq!(Trend::Falling.marker(), "▼");
        assert_eq!(Trend::Flat.marker(), "");
    }
}
