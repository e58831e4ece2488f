//! Sidebar navigation between the dashboard pages

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    CashFlow,
    Brokers,
    Trades,
    Strategies,
    Analysis,
    Settings,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::CashFlow,
            Page::Brokers,
            Page::Trades,
            Page::Strategies,
            Page::Analysis,
            Page::Settings,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::CashFlow => "Cash Flow",
            Page::Brokers => "Brokers",
            Page::Trades => "Trades",
            Page::Strategies => "Strategies",
            Page::Analysis => "Profit Analysis",
            Page::Settings => "Settings",
        }
    }

    /// Number key that jumps straight to this page
    pub fn hotkey(&self) -> char {
        match self {
            Page::Dashboard => '1',
            Page::CashFlow => '2',
            Page::Brokers => '3',
            Page::Trades => '4',
            Page::Strategies => '5',
            Page::Analysis => '6',
            Page::Settings => '7',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Page> {
        Page::all().into_iter().find(|p| p.hotkey() == c)
    }

    pub fn next(&self) -> Page {
        let pages = Self::all();
        let current_index = pages.iter().position(|p| p == self).unwrap_or(0);
        pages[(current_index + 1) % pages.len()]
    }

    pub fn previous(&self) -> Page {
        let pages = Self::all();
        let current_index = pages.iter().position(|p| p == self).unwrap_or(0);
        let prev_index = if current_index == 0 {
            pages.len() - 1
        } else {
            current_index - 1
        };
        pages[prev_index]
    }
}

pub struct Navigation {
    pub current_page: Page,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            current_page: Page::Dashboard,
        }
    }

    pub fn go_to_page(&mut self, page: Page) {
        self.current_page = page;
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = Page::all()
            .iter()
            .map(|page| {
                let line = format!(" {}  {}", page.hotkey(), page.title());
                if *page == self.current_page {
                    ListItem::new(line).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" LedgerBoard "),
        );

        frame.render_widget(list, area);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}
