use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::{Broker, Strategy};
use crate::ui::app::UiMessage;
use crate::ui::visibility::AmountVisibility;

pub mod analysis;
pub mod brokers;
pub mod cash_flow;
pub mod dashboard;
pub mod settings;
pub mod strategies;
pub mod trades;

pub use analysis::AnalysisPage;
pub use brokers::BrokersPage;
pub use cash_flow::CashFlowPage;
pub use dashboard::DashboardPage;
pub use settings::SettingsPage;
pub use strategies::StrategiesPage;
pub use trades::TradesPage;

/// Rows shown per table page
pub const PAGE_SIZE: usize = 10;

/// Shared state a page needs while rendering or reacting to a key: the
/// API handle and result channel for spawning calls, plus the reference
/// lists used for joins and form selects
pub struct PageContext<'a> {
    pub client: &'a ApiClient,
    pub tx: &'a mpsc::UnboundedSender<UiMessage>,
    pub visibility: &'a AmountVisibility,
    pub brokers: &'a [Broker],
    pub strategies: &'a [Strategy],
    pub brokers_loading: bool,
    pub strategies_loading: bool,
}

impl PageContext<'_> {
    /// Brokers offered in create forms; disabled accounts are left out
    pub fn active_brokers(&self) -> Vec<&Broker> {
        self.brokers.iter().filter(|b| b.is_active).collect()
    }

    pub fn broker_name(&self, id: i64) -> String {
        self.brokers
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.broker_name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }
}

pub trait PageView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext);

    /// Returns true when the key was consumed by the page
    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> bool;

    /// True while a modal or search box should own the keyboard
    fn wants_text_input(&self) -> bool {
        false
    }
}

/// Owned backing state for building a [`PageContext`] in page tests
#[cfg(test)]
pub(crate) struct TestCtx {
    pub client: ApiClient,
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,
    pub visibility: AmountVisibility,
    pub brokers: Vec<Broker>,
    pub strategies: Vec<Strategy>,
}

#[cfg(test)]
impl TestCtx {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: crate::api::test_client("http://127.0.0.1:1"),
            tx,
            rx,
            visibility: AmountVisibility::new(),
            brokers: Vec::new(),
            strategies: Vec::new(),
        }
    }

    pub fn ctx(&self) -> PageContext<'_> {
        PageContext {
            client: &self.client,
            tx: &self.tx,
            visibility: &self.visibility,
            brokers: &self.brokers,
            strategies: &self.strategies,
            brokers_loading: false,
            strategies_loading: false,
        }
    }
}
