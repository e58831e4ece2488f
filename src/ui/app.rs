//! Dashboard application state and the message protocol between the UI
//! loop and spawned API calls
//!
//! Every API call runs as a spawned task that reports back over an
//! unbounded channel; the main loop applies results between redraws. A
//! page reload after a mutation is only issued once the mutation's
//! success message has arrived, so the reload always observes it.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError, HealthStatus};
use crate::models::{Broker, CashFlowRecord, Strategy, TradeRecord};
use crate::ui::navigation::{Navigation, Page};
use crate::ui::pages::{
    AnalysisPage, BrokersPage, CashFlowPage, DashboardPage, PageContext, PageView, SettingsPage,
    StrategiesPage, TradesPage,
};
use crate::ui::visibility::AmountVisibility;
use crate::ui::widgets::Toasts;

/// Result of a spawned API call, routed back to the page that asked
#[derive(Debug)]
pub enum UiMessage {
    Health(Result<HealthStatus, ApiError>),
    Brokers(Result<Vec<Broker>, ApiError>),
    Strategies(Result<Vec<Strategy>, ApiError>),
    CashFlowRecords(Result<Vec<CashFlowRecord>, ApiError>),
    TradeRecords(Result<Vec<TradeRecord>, ApiError>),
    CashFlowCreated(Result<CashFlowRecord, ApiError>),
    CashFlowDeleted(Result<(), ApiError>),
    BrokerCreated(Result<Broker, ApiError>),
    TradeCreated(Result<TradeRecord, ApiError>),
    TradeDeleted(Result<(), ApiError>),
    StrategyCreated(Result<Strategy, ApiError>),
    StrategyUpdated(Result<Strategy, ApiError>),
    StrategyDeleted(Result<(), ApiError>),
}

/// Outcome of the most recent health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No probe has completed yet
    Disconnected,
    Connected,
    Failed,
}

pub struct App {
    pub client: ApiClient,
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub navigation: Navigation,
    pub visibility: AmountVisibility,
    pub connection: ConnectionStatus,
    pub toasts: Toasts,
    pub should_quit: bool,

    // Reference data shared by joins and form selects
    pub brokers: Vec<Broker>,
    pub strategies: Vec<Strategy>,
    pub brokers_loading: bool,
    pub strategies_loading: bool,

    pub dashboard_page: DashboardPage,
    pub cash_flow_page: CashFlowPage,
    pub brokers_page: BrokersPage,
    pub trades_page: TradesPage,
    pub strategies_page: StrategiesPage,
    pub analysis_page: AnalysisPage,
    pub settings_page: SettingsPage,
}

impl App {
    pub fn new(client: ApiClient) -> (Self, mpsc::UnboundedReceiver<UiMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            client,
            tx,
            navigation: Navigation::new(),
            visibility: AmountVisibility::new(),
            connection: ConnectionStatus::Disconnected,
            toasts: Toasts::new(),
            should_quit: false,
            brokers: Vec::new(),
            strategies: Vec::new(),
            brokers_loading: false,
            strategies_loading: false,
            dashboard_page: DashboardPage::new(),
            cash_flow_page: CashFlowPage::new(),
            brokers_page: BrokersPage::new(),
            trades_page: TradesPage::new(),
            strategies_page: StrategiesPage::new(),
            analysis_page: AnalysisPage::new(),
            settings_page: SettingsPage::new(),
        };
        (app, rx)
    }

    /// Startup work: one health probe; the dashboard itself needs no data
    pub fn on_start(&mut self) {
        self.spawn_health_check();
    }

    pub fn tick(&mut self) {
        self.toasts.prune();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // A page with an open modal or search box owns the keyboard.
        // The context is built from individual fields so the page borrow
        // stays disjoint from it.
        let capturing = self.current_page_wants_input();
        if capturing {
            let ctx = PageContext {
                client: &self.client,
                tx: &self.tx,
                visibility: &self.visibility,
                brokers: &self.brokers,
                strategies: &self.strategies,
                brokers_loading: self.brokers_loading,
                strategies_loading: self.strategies_loading,
            };
            match self.navigation.current_page {
                Page::CashFlow => self.cash_flow_page.handle_key(key, &ctx),
                Page::Brokers => self.brokers_page.handle_key(key, &ctx),
                Page::Trades => self.trades_page.handle_key(key, &ctx),
                Page::Strategies => self.strategies_page.handle_key(key, &ctx),
                _ => false,
            };
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("User requested quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.navigation.next_page();
                self.ensure_page_loaded();
            }
            KeyCode::BackTab => {
                self.navigation.previous_page();
                self.ensure_page_loaded();
            }
            KeyCode::Char(c @ '1'..='7') => {
                if let Some(page) = Page::from_hotkey(c) {
                    self.navigation.go_to_page(page);
                    self.ensure_page_loaded();
                }
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.visibility.toggle();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.toasts.info("Checking backend connection...");
                self.spawn_health_check();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload_current_page();
            }
            _ => {
                let ctx = PageContext {
                    client: &self.client,
                    tx: &self.tx,
                    visibility: &self.visibility,
                    brokers: &self.brokers,
                    strategies: &self.strategies,
                    brokers_loading: self.brokers_loading,
                    strategies_loading: self.strategies_loading,
                };
                match self.navigation.current_page {
                    Page::Dashboard => self.dashboard_page.handle_key(key, &ctx),
                    Page::CashFlow => self.cash_flow_page.handle_key(key, &ctx),
                    Page::Brokers => self.brokers_page.handle_key(key, &ctx),
                    Page::Trades => self.trades_page.handle_key(key, &ctx),
                    Page::Strategies => self.strategies_page.handle_key(key, &ctx),
                    Page::Analysis => self.analysis_page.handle_key(key, &ctx),
                    Page::Settings => self.settings_page.handle_key(key, &ctx),
                };
            }
        }
    }

    fn current_page_wants_input(&self) -> bool {
        match self.navigation.current_page {
            Page::CashFlow => self.cash_flow_page.wants_text_input(),
            Page::Brokers => self.brokers_page.wants_text_input(),
            Page::Trades => self.trades_page.wants_text_input(),
            Page::Strategies => self.strategies_page.wants_text_input(),
            _ => false,
        }
    }

    /// First visit to a page triggers its data load; later visits keep
    /// whatever state the page already holds
    fn ensure_page_loaded(&mut self) {
        match self.navigation.current_page {
            Page::CashFlow if !self.cash_flow_page.loaded => self.load_cash_flow(),
            Page::Brokers if !self.brokers_page.loaded => self.load_brokers(),
            Page::Trades if !self.trades_page.loaded => self.load_trades(),
            Page::Strategies if !self.strategies_page.loaded => self.load_strategies(),
            _ => {}
        }
    }

    fn reload_current_page(&mut self) {
        match self.navigation.current_page {
            Page::CashFlow => self.load_cash_flow(),
            Page::Brokers => self.load_brokers(),
            Page::Trades => self.load_trades(),
            Page::Strategies => self.load_strategies(),
            _ => {}
        }
    }

    pub fn spawn_health_check(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(UiMessage::Health(client.health().await));
        });
    }

    /// Records plus the broker reference list, issued concurrently
    pub fn load_cash_flow(&mut self) {
        self.cash_flow_page.loaded = true;
        self.cash_flow_page.loading = true;
        self.spawn_cash_flow_fetch();
        self.spawn_brokers_fetch();
    }

    pub fn load_brokers(&mut self) {
        self.brokers_page.loaded = true;
        self.spawn_brokers_fetch();
    }

    /// Records plus both reference lists, issued concurrently
    pub fn load_trades(&mut self) {
        self.trades_page.loaded = true;
        self.trades_page.loading = true;
        self.spawn_trades_fetch();
        self.spawn_brokers_fetch();
        self.spawn_strategies_fetch();
    }

    pub fn load_strategies(&mut self) {
        self.strategies_page.loaded = true;
        self.spawn_strategies_fetch();
    }

    fn spawn_brokers_fetch(&mut self) {
        self.brokers_loading = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(UiMessage::Brokers(client.fetch_brokers().await));
        });
    }

    fn spawn_strategies_fetch(&mut self) {
        self.strategies_loading = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(UiMessage::Strategies(client.fetch_strategies().await));
        });
    }

    fn spawn_cash_flow_fetch(&mut self) {
        self.cash_flow_page.loading = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(UiMessage::CashFlowRecords(
                client.fetch_cash_flow_records().await,
            ));
        });
    }

    fn spawn_trades_fetch(&mut self) {
        self.trades_page.loading = true;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(UiMessage::TradeRecords(client.fetch_trade_records().await));
        });
    }

    pub fn handle_message(&mut self, message: UiMessage) {
        debug!("Applying UI message: {:?}", message);
        match message {
            UiMessage::Health(Ok(health)) => {
                if health.is_up() {
                    self.connection = ConnectionStatus::Connected;
                    self.toasts.success("Backend connected");
                } else {
                    self.connection = ConnectionStatus::Failed;
                    self.toasts
                        .error(format!("Backend reported status {}", health.status));
                }
            }
            UiMessage::Health(Err(e)) => {
                self.connection = ConnectionStatus::Failed;
                self.toasts.error(format!("Backend unreachable: {}", e));
            }
            UiMessage::Brokers(Ok(brokers)) => {
                self.brokers_loading = false;
                self.brokers = brokers;
                self.brokers_page.on_data(&self.brokers);
            }
            UiMessage::Brokers(Err(e)) => {
                self.brokers_loading = false;
                self.toasts.error(format!("Failed to load brokers: {}", e));
            }
            UiMessage::Strategies(Ok(strategies)) => {
                self.strategies_loading = false;
                self.strategies = strategies;
                self.strategies_page.on_data(&self.strategies);
            }
            UiMessage::Strategies(Err(e)) => {
                self.strategies_loading = false;
                self.toasts
                    .error(format!("Failed to load strategies: {}", e));
            }
            UiMessage::CashFlowRecords(result) => match result {
                Ok(records) => self.cash_flow_page.on_records(records),
                Err(e) => {
                    self.cash_flow_page.loading = false;
                    self.toasts
                        .error(format!("Failed to load cash flow records: {}", e));
                }
            },
            UiMessage::TradeRecords(result) => match result {
                Ok(records) => self.trades_page.on_records(records),
                Err(e) => {
                    self.trades_page.loading = false;
                    self.toasts
                        .error(format!("Failed to load trade records: {}", e));
                }
            },
            UiMessage::CashFlowCreated(result) => match result {
                Ok(_) => {
                    self.cash_flow_page.close_modal();
                    self.toasts.success("Cash flow record created");
                    self.spawn_cash_flow_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::CashFlowDeleted(result) => match result {
                Ok(()) => {
                    self.toasts.success("Cash flow record deleted");
                    self.spawn_cash_flow_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::BrokerCreated(result) => match result {
                Ok(broker) => {
                    self.brokers_page.close_modal();
                    self.toasts
                        .success(format!("Broker '{}' created", broker.broker_name));
                    self.spawn_brokers_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::TradeCreated(result) => match result {
                Ok(_) => {
                    self.trades_page.close_modal();
                    self.toasts.success("Trade record created");
                    self.spawn_trades_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::TradeDeleted(result) => match result {
                Ok(()) => {
                    self.toasts.success("Trade record deleted");
                    self.spawn_trades_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::StrategyCreated(result) => match result {
                Ok(strategy) => {
                    self.strategies_page.close_modal();
                    self.toasts
                        .success(format!("Strategy '{}' created", strategy.strategy_name));
                    self.spawn_strategies_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::StrategyUpdated(result) => match result {
                Ok(strategy) => {
                    self.strategies_page.close_modal();
                    self.toasts
                        .success(format!("Strategy '{}' updated", strategy.strategy_name));
                    self.spawn_strategies_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
            UiMessage::StrategyDeleted(result) => match result {
                Ok(()) => {
                    self.toasts.success("Strategy deleted");
                    self.spawn_strategies_fetch();
                }
                Err(e) => self.toasts.error(e.to_string()),
            },
        }
    }

    pub fn render_current_page(&mut self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let ctx = PageContext {
            client: &self.client,
            tx: &self.tx,
            visibility: &self.visibility,
            brokers: &self.brokers,
            strategies: &self.strategies,
            brokers_loading: self.brokers_loading,
            strategies_loading: self.strategies_loading,
        };
        match self.navigation.current_page {
            Page::Dashboard => self.dashboard_page.render(frame, area, &ctx),
            Page::CashFlow => self.cash_flow_page.render(frame, area, &ctx),
            Page::Brokers => self.brokers_page.render(frame, area, &ctx),
            Page::Trades => self.trades_page.render(frame, area, &ctx),
            Page::Strategies => self.strategies_page.render(frame, area, &ctx),
            Page::Analysis => self.analysis_page.render(frame, area, &ctx),
            Page::Settings => self.settings_page.render(frame, area, &ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_client;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn test_app() -> (App, mpsc::UnboundedReceiver<UiMessage>) {
        App::new(test_client("http://127.0.0.1:1"))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_number_keys_switch_pages() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.navigation.current_page, Page::Trades);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.navigation.current_page, Page::Trades);
    }

    #[tokio::test]
    async fn test_visibility_toggle_key() {
        let (mut app, _rx) = test_app();
        assert!(app.visibility.is_visible());
        press(&mut app, KeyCode::Char('v'));
        assert!(!app.visibility.is_visible());
        press(&mut app, KeyCode::Char('v'));
        assert!(app.visibility.is_visible());
    }

    #[tokio::test]
    async fn test_first_visit_marks_page_loaded() {
        let (mut app, _rx) = test_app();
        assert!(!app.cash_flow_page.loaded);
        press(&mut app, KeyCode::Char('2'));
        assert!(app.cash_flow_page.loaded);
        assert!(app.cash_flow_page.loading);
    }

    #[tokio::test]
    async fn test_open_modal_captures_global_keys() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.navigation.current_page, Page::Strategies);

        app.strategies_page.open_create_modal();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_health_result_updates_connection_and_toasts() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.connection, ConnectionStatus::Disconnected);

        app.handle_message(UiMessage::Health(Ok(HealthStatus {
            status: "UP".to_string(),
        })));
        assert_eq!(app.connection, ConnectionStatus::Connected);
        assert!(app.toasts.current().is_some());

        app.handle_message(UiMessage::Health(Err(ApiError::MissingData)));
        assert_eq!(app.connection, ConnectionStatus::Failed);
    }

    #[tokio::test]
    async fn test_mutation_error_keeps_modal_open() {
        let (mut app, _rx) = test_app();
        app.strategies_page.open_create_modal();
        app.handle_message(UiMessage::StrategyCreated(Err(ApiError::Api(
            "Strategy name already exists".to_string(),
        ))));
        assert!(app.strategies_page.wants_text_input());
        assert_eq!(
            app.toasts.current().unwrap().message,
            "Strategy name already exists"
        );
    }

    #[tokio::test]
    async fn test_mutation_success_closes_modal_and_reloads() {
        let (mut app, mut rx) = test_app();
        app.strategies_page.open_create_modal();
        let strategy: Strategy = serde_json::from_str(
            r#"{"id": 1, "strategyName": "Wheel", "createdAt": "2024-01-01T00:00:00", "updatedAt": "2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        app.handle_message(UiMessage::StrategyCreated(Ok(strategy)));
        assert!(!app.strategies_page.wants_text_input());

        // The reload fires against an unreachable address and still reports
        let reload = rx.recv().await.unwrap();
        assert!(matches!(reload, UiMessage::Strategies(Err(_))));
    }
}
