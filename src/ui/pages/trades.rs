//! Trade records page: stocks, ETFs and options across brokers

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use rust_decimal::Decimal;

use super::{PageContext, PageView, PAGE_SIZE};
use crate::format;
use crate::models::{
    trade_amount, AssetType, CashDirection, Currency, NewTradeRecord, TradeRecord, TradeType,
};
use crate::ui::forms::{
    max_len, parse_date, parse_non_negative_decimal, parse_positive_int, require, Focus,
    SelectField, TextField,
};
use crate::ui::table::{cycle_filter, cycle_sort, SortOrder, TableNav};
use crate::ui::theme;
use crate::ui::widgets::{render_confirm, render_form, FormRow};

/// Column filters plus the underlying-symbol search, combined as an AND
#[derive(Debug, Default, Clone)]
pub struct TradeFilters {
    pub asset_type: Option<AssetType>,
    pub trade_type: Option<TradeType>,
    pub currency: Option<Currency>,
    pub broker_id: Option<i64>,
    pub search: String,
}

impl TradeFilters {
    pub fn matches(&self, trade: &TradeRecord) -> bool {
        self.asset_type
            .as_ref()
            .is_none_or(|a| trade.asset_type == *a)
            && self
                .trade_type
                .as_ref()
                .is_none_or(|t| trade.trade_type == *t)
            && self.currency.as_ref().is_none_or(|c| trade.currency == *c)
            && self.broker_id.is_none_or(|id| trade.broker_id == id)
            && self.matches_search(trade)
    }

    /// Case-insensitive substring match on the derived underlying symbol
    fn matches_search(&self, trade: &TradeRecord) -> bool {
        let query = self.search.trim();
        if query.is_empty() {
            return true;
        }
        trade
            .effective_underlying()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeColumn {
    Date,
    Quantity,
    Price,
    Amount,
    Fee,
}

const SORTABLE: [TradeColumn; 5] = [
    TradeColumn::Date,
    TradeColumn::Quantity,
    TradeColumn::Price,
    TradeColumn::Amount,
    TradeColumn::Fee,
];

pub fn visible_trades<'a>(
    trades: &'a [TradeRecord],
    filters: &TradeFilters,
    sort: Option<(TradeColumn, SortOrder)>,
) -> Vec<&'a TradeRecord> {
    let mut rows: Vec<&TradeRecord> = trades.iter().filter(|t| filters.matches(t)).collect();
    if let Some((column, order)) = sort {
        rows.sort_by(|a, b| {
            let ordering = match column {
                TradeColumn::Date => a.trade_date.cmp(&b.trade_date),
                TradeColumn::Quantity => a.quantity.cmp(&b.quantity),
                TradeColumn::Price => a.price.cmp(&b.price),
                TradeColumn::Amount => a.amount.cmp(&b.amount),
                TradeColumn::Fee => a.fee.cmp(&b.fee),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
    rows
}

/// Modal editor for a new trade; the gross amount is derived from
/// quantity × price and previewed at the bottom of the form
pub struct TradeForm {
    pub date: TextField,
    pub broker: SelectField<(i64, String)>,
    pub asset_type: SelectField<AssetType>,
    pub symbol: TextField,
    pub name: TextField,
    pub underlying: TextField,
    pub trade_type: SelectField<TradeType>,
    pub quantity: TextField,
    pub price: TextField,
    pub fee: TextField,
    pub currency: SelectField<Currency>,
    pub strategy: SelectField<Option<(i64, String)>>,
    pub focus: Focus,
}

impl TradeForm {
    pub fn new(active_brokers: &[(i64, String)], strategies: &[(i64, String)]) -> Self {
        let mut strategy_options: Vec<Option<(i64, String)>> = vec![None];
        strategy_options.extend(strategies.iter().cloned().map(Some));
        Self {
            date: TextField::with_value(
                "Date",
                Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ),
            broker: SelectField::new("Broker", active_brokers.to_vec()),
            asset_type: SelectField::new("Asset", AssetType::all()),
            symbol: TextField::new("Symbol"),
            name: TextField::new("Name"),
            underlying: TextField::new("Underlying"),
            trade_type: SelectField::new("Type", TradeType::all()),
            quantity: TextField::new("Quantity"),
            price: TextField::new("Price"),
            fee: TextField::with_value("Fee", "0"),
            currency: SelectField::new("Currency", Currency::all()),
            strategy: SelectField::new("Strategy", strategy_options),
            focus: Focus::new(12),
        }
    }

    /// Quantity × price as currently typed, for the live preview
    pub fn amount_preview(&self) -> Option<Decimal> {
        let quantity: i64 = self.quantity.value.trim().parse().ok()?;
        let price: Decimal = self.price.value.trim().parse().ok()?;
        Some(trade_amount(quantity, price))
    }

    pub fn validate(&mut self) -> Option<NewTradeRecord> {
        let mut ok = true;

        let trade_date = match parse_date(&self.date.value) {
            Ok(date) => Some(date),
            Err(e) => {
                self.date.error = Some(e);
                ok = false;
                None
            }
        };

        let broker_id = match self.broker.current() {
            Some((id, _)) => Some(*id),
            None => {
                self.broker.error = Some("No active brokers available".to_string());
                ok = false;
                None
            }
        };

        let symbol = match require(&self.symbol.value, "Symbol") {
            Ok(symbol) => match max_len(&symbol, 50, "Symbol") {
                Ok(()) => Some(symbol),
                Err(e) => {
                    self.symbol.error = Some(e);
                    ok = false;
                    None
                }
            },
            Err(e) => {
                self.symbol.error = Some(e);
                ok = false;
                None
            }
        };

        if let Err(e) = max_len(self.name.trimmed(), 200, "Name") {
            self.name.error = Some(e);
            ok = false;
        }

        let quantity = match parse_positive_int(&self.quantity.value, "Quantity") {
            Ok(quantity) => Some(quantity),
            Err(e) => {
                self.quantity.error = Some(e);
                ok = false;
                None
            }
        };

        let price = match parse_non_negative_decimal(&self.price.value, "Price") {
            Ok(price) => Some(price.round_dp(4)),
            Err(e) => {
                self.price.error = Some(e);
                ok = false;
                None
            }
        };

        let fee = match parse_non_negative_decimal(&self.fee.value, "Fee") {
            Ok(fee) => Some(fee.round_dp(2)),
            Err(e) => {
                self.fee.error = Some(e);
                ok = false;
                None
            }
        };

        if !ok {
            return None;
        }

        let symbol = symbol?;
        let quantity = quantity?;
        let price = price?;
        // The server requires an underlying; plain stock trades are their
        // own underlying
        let underlying_symbol = self
            .underlying
            .optional()
            .unwrap_or_else(|| symbol.clone());

        Some(NewTradeRecord {
            trade_date: trade_date?,
            broker_id: broker_id?,
            asset_type: self.asset_type.current()?.clone(),
            symbol,
            name: self.name.optional(),
            underlying_symbol,
            trade_type: self.trade_type.current()?.clone(),
            quantity,
            price,
            amount: trade_amount(quantity, price),
            fee: fee?,
            currency: self.currency.current()?.clone(),
            strategy_id: self.strategy.current()?.as_ref().map(|(id, _)| *id),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.previous(),
            KeyCode::Left => match self.focus.index {
                1 => self.broker.previous_option(),
                2 => self.asset_type.previous_option(),
                6 => self.trade_type.previous_option(),
                10 => self.currency.previous_option(),
                11 => self.strategy.previous_option(),
                _ => {}
            },
            KeyCode::Right => match self.focus.index {
                1 => self.broker.next_option(),
                2 => self.asset_type.next_option(),
                6 => self.trade_type.next_option(),
                10 => self.currency.next_option(),
                11 => self.strategy.next_option(),
                _ => {}
            },
            KeyCode::Char(c) => {
                if let Some(field) = self.text_field_mut() {
                    field.insert(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.text_field_mut() {
                    field.backspace();
                }
            }
            _ => {}
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus.index {
            0 => Some(&mut self.date),
            3 => Some(&mut self.symbol),
            4 => Some(&mut self.name),
            5 => Some(&mut self.underlying),
            7 => Some(&mut self.quantity),
            8 => Some(&mut self.price),
            9 => Some(&mut self.fee),
            _ => None,
        }
    }
}

pub struct TradesPage {
    pub records: Vec<TradeRecord>,
    pub loaded: bool,
    pub loading: bool,
    pub filters: TradeFilters,
    pub sort: Option<(TradeColumn, SortOrder)>,
    pub nav: TableNav,
    pub form: Option<TradeForm>,
    pub confirm_delete: Option<i64>,
    pub search_editing: bool,
}

impl TradesPage {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
            loading: false,
            filters: TradeFilters::default(),
            sort: None,
            nav: TableNav::new(PAGE_SIZE),
            form: None,
            confirm_delete: None,
            search_editing: false,
        }
    }

    pub fn on_records(&mut self, records: Vec<TradeRecord>) {
        self.loading = false;
        self.records = records;
        let visible = visible_trades(&self.records, &self.filters, self.sort).len();
        self.nav.clamp(visible);
    }

    pub fn close_modal(&mut self) {
        self.form = None;
    }

    fn open_create_modal(&mut self, ctx: &PageContext) {
        let brokers: Vec<(i64, String)> = ctx
            .active_brokers()
            .iter()
            .map(|b| (b.id, b.broker_name.clone()))
            .collect();
        let strategies: Vec<(i64, String)> = ctx
            .strategies
            .iter()
            .map(|s| (s.id, s.strategy_name.clone()))
            .collect();
        self.form = Some(TradeForm::new(&brokers, &strategies));
    }

    fn submit(&mut self, ctx: &PageContext) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let Some(payload) = form.validate() else {
            return;
        };
        let client = ctx.client.clone();
        let tx = ctx.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(crate::ui::app::UiMessage::TradeCreated(
                client.create_trade_record(&payload).await,
            ));
        });
    }

    fn delete_confirmed(&mut self, id: i64, ctx: &PageContext) {
        let client = ctx.client.clone();
        let tx = ctx.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(crate::ui::app::UiMessage::TradeDeleted(
                client.delete_trade_record(id).await,
            ));
        });
    }

    fn filter_summary(&self, ctx: &PageContext) -> String {
        let mut parts = Vec::new();
        if !self.filters.search.trim().is_empty() {
            parts.push(format!("search='{}'", self.filters.search.trim()));
        }
        if let Some(a) = &self.filters.asset_type {
            parts.push(format!("asset={}", a.label()));
        }
        if let Some(t) = &self.filters.trade_type {
            parts.push(format!("type={}", t.label()));
        }
        if let Some(c) = &self.filters.currency {
            parts.push(format!("currency={}", c.label()));
        }
        if let Some(id) = self.filters.broker_id {
            parts.push(format!("broker={}", ctx.broker_name(id)));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(" · ")
        }
    }
}

impl PageView for TradesPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        let rows_source = visible_trades(&self.records, &self.filters, self.sort);
        self.nav.clamp(rows_source.len());
        let page_range = self.nav.page_range(rows_source.len());
        let selected_on_page = self.nav.selected_on_page();

        let sort_marker = |column: TradeColumn| match self.sort {
            Some((c, order)) if c == column => order.indicator(),
            _ => "",
        };
        let header = Row::new(vec![
            format!("Date {}", sort_marker(TradeColumn::Date)),
            "Broker".to_string(),
            "Asset".to_string(),
            "Symbol".to_string(),
            "Type".to_string(),
            format!("Qty {}", sort_marker(TradeColumn::Quantity)),
            format!("Price {}", sort_marker(TradeColumn::Price)),
            format!("Amount {}", sort_marker(TradeColumn::Amount)),
            format!("Fee {}", sort_marker(TradeColumn::Fee)),
            "Ccy".to_string(),
            "Strategy".to_string(),
        ])
        .style(theme::header_style());

        let rows: Vec<Row> = if self.loading && rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("Loading trades...")])
                .style(Style::default().fg(Color::Yellow))]
        } else if rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("No trades")]).style(theme::dim_style())]
        } else {
            rows_source[page_range.clone()]
                .iter()
                .enumerate()
                .map(|(i, trade)| {
                    let amount_style = match trade.trade_type.cash_direction() {
                        CashDirection::Outflow => theme::loss_style(),
                        CashDirection::Inflow => theme::gain_style(),
                        CashDirection::Neutral => Style::default(),
                    };
                    let amount = ctx
                        .visibility
                        .cover(format::currency_amount(trade.amount, &trade.currency));
                    let broker_name = trade
                        .broker
                        .as_ref()
                        .map(|b| b.broker_name.clone())
                        .unwrap_or_else(|| ctx.broker_name(trade.broker_id));
                    let row = Row::new(vec![
                        Cell::from(trade.trade_date.format("%Y-%m-%d").to_string()),
                        Cell::from(broker_name),
                        Cell::from(trade.asset_type.label().to_string())
                            .style(theme::tag_style(trade.asset_type.tag_color())),
                        Cell::from(trade.symbol.clone()),
                        Cell::from(trade.trade_type.label().to_string())
                            .style(theme::tag_style(trade.trade_type.tag_color())),
                        Cell::from(ctx.visibility.cover(trade.quantity.to_string())),
                        Cell::from(ctx.visibility.cover(format::price(trade.price))),
                        Cell::from(amount).style(amount_style),
                        Cell::from(ctx.visibility.cover(format::thousands(trade.fee, 2))),
                        Cell::from(trade.currency.label().to_string())
                            .style(theme::tag_style(trade.currency.tag_color())),
                        Cell::from(trade.strategy_label().unwrap_or_default()),
                    ]);
                    if i == selected_on_page {
                        row.style(theme::selected_style())
                    } else {
                        row
                    }
                })
                .collect()
        };

        let search_title = if self.search_editing {
            format!(" Trades · search: {}▏ ", self.filters.search)
        } else if self.filters.search.trim().is_empty() {
            format!(" Trades ({}) ", rows_source.len())
        } else {
            format!(
                " Trades ({}) · search: {} ",
                rows_source.len(),
                self.filters.search.trim()
            )
        };

        let table = Table::new(
            rows,
            &[
                Constraint::Length(12),
                Constraint::Min(12),
                Constraint::Length(6),
                Constraint::Min(12),
                Constraint::Length(13),
                Constraint::Length(7),
                Constraint::Length(9),
                Constraint::Length(13),
                Constraint::Length(8),
                Constraint::Length(5),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(search_title));
        frame.render_widget(table, chunks[0]);

        let footer = Paragraph::new(format!(
            "page {}/{} · {} · n new · d delete · / search · s sort · a asset · t type · u ccy · b broker",
            self.nav.page_index() + 1,
            self.nav.page_count(rows_source.len()),
            self.filter_summary(ctx),
        ))
        .style(theme::dim_style());
        frame.render_widget(footer, chunks[1]);

        if let Some(form) = &self.form {
            let preview = form
                .amount_preview()
                .map(|amount| format::thousands(amount, 2))
                .unwrap_or_else(|| "—".to_string());
            let rows = [
                FormRow::text(&form.date),
                FormRow::select(&form.broker, |(_, name)| name.clone()),
                FormRow::select(&form.asset_type, |a| a.label().to_string()),
                FormRow::text(&form.symbol),
                FormRow::text(&form.name),
                FormRow::text(&form.underlying),
                FormRow::select(&form.trade_type, |t| t.label().to_string()),
                FormRow::text(&form.quantity),
                FormRow::text(&form.price),
                FormRow::text(&form.fee),
                FormRow::select(&form.currency, |c| c.label().to_string()),
                FormRow::select(&form.strategy, |s| match s {
                    Some((_, name)) => name.clone(),
                    None => "(none)".to_string(),
                }),
                FormRow {
                    label: "Amount",
                    value: preview,
                    error: None,
                    is_select: false,
                },
            ];
            render_form(frame, "New Trade", &rows, form.focus.index);
        }

        if self.confirm_delete.is_some() {
            render_confirm(frame, "Delete this trade record?");
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> bool {
        if let Some(id) = self.confirm_delete {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_delete = None;
                    self.delete_confirmed(id, ctx);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_delete = None;
                }
                _ => {}
            }
            return true;
        }

        if self.form.is_some() {
            match key.code {
                KeyCode::Esc => self.close_modal(),
                KeyCode::Enter => self.submit(ctx),
                _ => {
                    if let Some(form) = self.form.as_mut() {
                        form.handle_key(key);
                    }
                }
            }
            return true;
        }

        if self.search_editing {
            match key.code {
                KeyCode::Esc => {
                    self.filters.search.clear();
                    self.search_editing = false;
                }
                KeyCode::Enter => self.search_editing = false,
                KeyCode::Char(c) => {
                    self.filters.search.push(c);
                    self.nav.selected = 0;
                }
                KeyCode::Backspace => {
                    self.filters.search.pop();
                    self.nav.selected = 0;
                }
                _ => {}
            }
            return true;
        }

        let visible = visible_trades(&self.records, &self.filters, self.sort);
        match key.code {
            KeyCode::Down => self.nav.select_next(visible.len()),
            KeyCode::Up => self.nav.select_previous(),
            KeyCode::PageDown => self.nav.next_page(visible.len()),
            KeyCode::PageUp => self.nav.previous_page(),
            KeyCode::Char('/') => self.search_editing = true,
            KeyCode::Char('s') => cycle_sort(&mut self.sort, &SORTABLE),
            KeyCode::Char('a') => {
                cycle_filter(&mut self.filters.asset_type, &AssetType::all());
                self.nav.selected = 0;
            }
            KeyCode::Char('t') => {
                cycle_filter(&mut self.filters.trade_type, &TradeType::all());
                self.nav.selected = 0;
            }
            KeyCode::Char('u') => {
                cycle_filter(&mut self.filters.currency, &Currency::all());
                self.nav.selected = 0;
            }
            KeyCode::Char('b') => {
                let ids: Vec<i64> = ctx.brokers.iter().map(|b| b.id).collect();
                cycle_filter(&mut self.filters.broker_id, &ids);
                self.nav.selected = 0;
            }
            KeyCode::Char('n') => self.open_create_modal(ctx),
            KeyCode::Char('d') => {
                if let Some(trade) = visible.get(self.nav.selected) {
                    self.confirm_delete = Some(trade.id);
                }
            }
            _ => return false,
        }
        true
    }

    fn wants_text_input(&self) -> bool {
        self.form.is_some() || self.confirm_delete.is_some() || self.search_editing
    }
}

impl Default for TradesPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(
        id: i64,
        symbol: &str,
        underlying: &str,
        trade_type: &str,
        asset_type: &str,
        amount: f64,
    ) -> TradeRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "tradeDate": "2024-06-03",
            "brokerId": 1,
            "assetType": asset_type,
            "symbol": symbol,
            "underlyingSymbol": underlying,
            "tradeType": trade_type,
            "quantity": 10,
            "price": 1.0,
            "amount": amount,
            "fee": 0.5,
            "currency": "USD"
        }))
        .unwrap()
    }

    fn sample() -> Vec<TradeRecord> {
        vec![
            trade(1, "AAPL", "", "BUY", "STOCK", 18550.0),
            trade(2, "AAPL240621C190", "AAPL", "SELL", "OPTION_CALL", 235.0),
            trade(3, "00700", "", "BUY", "STOCK", 42080.0),
        ]
    }

    #[test]
    fn test_search_matches_underlying_with_symbol_fallback() {
        let trades = sample();
        let filters = TradeFilters {
            search: "aapl".to_string(),
            ..Default::default()
        };
        let rows = visible_trades(&trades, &filters, None);
        // Record 1 matches on its own symbol, record 2 on its underlying
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.effective_underlying() == "AAPL"));
    }

    #[test]
    fn test_filters_combine_as_and() {
        let trades = sample();
        let filters = TradeFilters {
            asset_type: Some(AssetType::Stock),
            trade_type: Some(TradeType::Buy),
            search: "aapl".to_string(),
            ..Default::default()
        };
        let rows = visible_trades(&trades, &filters, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn test_amount_sorts_numerically() {
        let trades = sample();
        let rows = visible_trades(
            &trades,
            &TradeFilters::default(),
            Some((TradeColumn::Amount, SortOrder::Descending)),
        );
        let amounts: Vec<Decimal> = rows.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![dec!(42080), dec!(18550), dec!(235)]);
    }

    #[test]
    fn test_form_computes_amount_and_derives_underlying() {
        let brokers = vec![(2, "IBKR".to_string())];
        let mut form = TradeForm::new(&brokers, &[]);
        form.date.value = "2024-06-03".to_string();
        form.symbol.value = "AAPL".to_string();
        form.quantity.value = "100".to_string();
        form.price.value = "185.5".to_string();
        form.currency.select_where(|c| *c == Currency::Usd);

        assert_eq!(form.amount_preview(), Some(dec!(18550.00)));
        let payload = form.validate().unwrap();
        assert_eq!(payload.amount, dec!(18550.00));
        assert_eq!(payload.underlying_symbol, "AAPL");
        assert!(payload.strategy_id.is_none());
    }

    #[test]
    fn test_form_keeps_explicit_underlying_and_strategy() {
        let brokers = vec![(2, "IBKR".to_string())];
        let strategies = vec![(7, "Covered calls".to_string())];
        let mut form = TradeForm::new(&brokers, &strategies);
        form.symbol.value = "AAPL240621C190".to_string();
        form.underlying.value = "AAPL".to_string();
        form.quantity.value = "1".to_string();
        form.price.value = "2.35".to_string();
        form.strategy.select_where(|s| s.is_some());

        let payload = form.validate().unwrap();
        assert_eq!(payload.underlying_symbol, "AAPL");
        assert_eq!(payload.strategy_id, Some(7));
    }

    #[test]
    fn test_form_rejects_zero_quantity_and_negative_fee() {
        let brokers = vec![(2, "IBKR".to_string())];
        let mut form = TradeForm::new(&brokers, &[]);
        form.symbol.value = "AAPL".to_string();
        form.quantity.value = "0".to_string();
        form.price.value = "185.5".to_string();
        form.fee.value = "-1".to_string();
        assert!(form.validate().is_none());
        assert!(form.quantity.error.is_some());
        assert!(form.fee.error.is_some());
    }

    #[test]
    fn test_hidden_amounts_mask_quantity_and_money_cells() {
        let mut record = trade(1, "AAPL", "", "BUY", "STOCK", 18550.0);
        record.quantity = 98765;
        let mut page = TradesPage::new();
        page.on_records(vec![record]);

        use crate::ui::pages::TestCtx;

        let mut fixture = TestCtx::new();
        fixture.visibility.toggle();
        let ctx = fixture.ctx();

        let backend = ratatui::backend::TestBackend::new(140, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| page.render(frame, frame.area(), &ctx))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("****"));
        assert!(!content.contains("98765"));
        assert!(!content.contains("18,550"));
        // Non-sensitive columns stay readable
        assert!(content.contains("AAPL"));
        assert!(content.contains("2024-06-03"));
    }

    #[test]
    fn test_price_may_be_zero_for_expiry() {
        let brokers = vec![(2, "IBKR".to_string())];
        let mut form = TradeForm::new(&brokers, &[]);
        form.symbol.value = "AAPL240621C190".to_string();
        form.quantity.value = "1".to_string();
        form.price.value = "0".to_string();
        form.trade_type.select_where(|t| *t == TradeType::OptionExpire);

        let payload = form.validate().unwrap();
        assert_eq!(payload.trade_type, TradeType::OptionExpire);
        assert_eq!(payload.amount, Decimal::ZERO);
    }
}
