//! Settings page: static sections describing planned configuration areas

use crossterm::event::KeyEvent;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{PageContext, PageView};

const SECTIONS: [(&str, &str); 4] = [
    (
        "Database",
        "Connection settings for the LedgerBoard backend store.",
    ),
    (
        "Notifications",
        "Alerts for large cash movements and trade fills.",
    ),
    (
        "Data Import & Export",
        "Bulk import of broker statements and CSV export of records.",
    ),
    ("About", concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"))),
];

pub struct SettingsPage;

impl SettingsPage {
    pub fn new() -> Self {
        Self
    }
}

impl PageView for SettingsPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &PageContext) {
        let constraints: Vec<Constraint> = SECTIONS
            .iter()
            .map(|_| Constraint::Length(4))
            .chain([Constraint::Min(0)])
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, (title, body)) in SECTIONS.iter().enumerate() {
            let section = Paragraph::new(*body)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", title)),
                );
            frame.render_widget(section, chunks[i]);
        }
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &PageContext) -> bool {
        false
    }
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}
