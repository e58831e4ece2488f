//! Cash flow page: deposits and withdrawals per broker

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::{PageContext, PageView, PAGE_SIZE};
use crate::format;
use crate::models::{CashFlowRecord, Currency, NewCashFlowRecord, RecordType};
use crate::ui::forms::{max_len, parse_date, parse_positive_decimal, Focus, SelectField, TextField};
use crate::ui::table::{cycle_filter, cycle_sort, SortOrder, TableNav};
use crate::ui::theme;
use crate::ui::widgets::{render_confirm, render_form, FormRow};

/// Column filters combined as an AND
#[derive(Debug, Default, Clone)]
pub struct CashFlowFilters {
    pub record_type: Option<RecordType>,
    pub currency: Option<Currency>,
    pub broker_id: Option<i64>,
}

impl CashFlowFilters {
    pub fn matches(&self, record: &CashFlowRecord) -> bool {
        self.record_type
            .as_ref()
            .is_none_or(|t| record.record_type == *t)
            && self.currency.as_ref().is_none_or(|c| record.currency == *c)
            && self.broker_id.is_none_or(|id| record.broker_id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashFlowColumn {
    Date,
    Amount,
}

const SORTABLE: [CashFlowColumn; 2] = [CashFlowColumn::Date, CashFlowColumn::Amount];

/// Apply the active filters, then the active sort, over a snapshot
pub fn visible_records<'a>(
    records: &'a [CashFlowRecord],
    filters: &CashFlowFilters,
    sort: Option<(CashFlowColumn, SortOrder)>,
) -> Vec<&'a CashFlowRecord> {
    let mut rows: Vec<&CashFlowRecord> = records.iter().filter(|r| filters.matches(r)).collect();
    if let Some((column, order)) = sort {
        rows.sort_by(|a, b| {
            let ordering = match column {
                CashFlowColumn::Date => a.record_date.cmp(&b.record_date),
                CashFlowColumn::Amount => a.signed_amount().cmp(&b.signed_amount()),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
    rows
}

/// Modal editor for a new record
pub struct CashFlowForm {
    pub date: TextField,
    pub broker: SelectField<(i64, String)>,
    pub record_type: SelectField<RecordType>,
    pub amount: TextField,
    pub currency: SelectField<Currency>,
    pub bank: TextField,
    pub description: TextField,
    pub focus: Focus,
}

impl CashFlowForm {
    pub fn new(active_brokers: &[(i64, String)]) -> Self {
        Self {
            date: TextField::with_value("Date", Local::now().date_naive().format("%Y-%m-%d").to_string()),
            broker: SelectField::new("Broker", active_brokers.to_vec()),
            record_type: SelectField::new("Type", RecordType::all()),
            amount: TextField::new("Amount"),
            currency: SelectField::new("Currency", Currency::all()),
            bank: TextField::new("Bank"),
            description: TextField::new("Description"),
            focus: Focus::new(7),
        }
    }

    /// Check every field; on success the payload is ready to POST
    pub fn validate(&mut self) -> Option<NewCashFlowRecord> {
        let mut ok = true;

        let record_date = match parse_date(&self.date.value) {
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

        let amount = match parse_positive_decimal(&self.amount.value, "Amount") {
            Ok(amount) => Some(amount),
            Err(e) => {
                self.amount.error = Some(e);
                ok = false;
                None
            }
        };

        if let Err(e) = max_len(self.bank.trimmed(), 100, "Bank") {
            self.bank.error = Some(e);
            ok = false;
        }
        if let Err(e) = max_len(self.description.trimmed(), 500, "Description") {
            self.description.error = Some(e);
            ok = false;
        }

        if !ok {
            return None;
        }

        Some(NewCashFlowRecord {
            record_date: record_date?,
            broker_id: broker_id?,
            record_type: self.record_type.current()?.clone(),
            amount: amount?.round_dp(2),
            currency: self.currency.current()?.clone(),
            bank: self.bank.optional(),
            description: self.description.optional(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.previous(),
            KeyCode::Left => match self.focus.index {
                1 => self.broker.previous_option(),
                2 => self.record_type.previous_option(),
                4 => self.currency.previous_option(),
                _ => {}
            },
            KeyCode::Right => match self.focus.index {
                1 => self.broker.next_option(),
                2 => self.record_type.next_option(),
                4 => self.currency.next_option(),
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
            3 => Some(&mut self.amount),
            5 => Some(&mut self.bank),
            6 => Some(&mut self.description),
            _ => None,
        }
    }
}

pub struct CashFlowPage {
    pub records: Vec<CashFlowRecord>,
    pub loaded: bool,
    pub loading: bool,
    pub filters: CashFlowFilters,
    pub sort: Option<(CashFlowColumn, SortOrder)>,
    pub nav: TableNav,
    pub form: Option<CashFlowForm>,
    pub confirm_delete: Option<i64>,
}

impl CashFlowPage {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
            loading: false,
            filters: CashFlowFilters::default(),
            sort: None,
            nav: TableNav::new(PAGE_SIZE),
            form: None,
            confirm_delete: None,
        }
    }

    pub fn on_records(&mut self, records: Vec<CashFlowRecord>) {
        self.loading = false;
        self.records = records;
        let visible = visible_records(&self.records, &self.filters, self.sort).len();
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
        self.form = Some(CashFlowForm::new(&brokers));
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
            let _ = tx.send(crate::ui::app::UiMessage::CashFlowCreated(
                client.create_cash_flow_record(&payload).await,
            ));
        });
    }

    fn delete_confirmed(&mut self, id: i64, ctx: &PageContext) {
        let client = ctx.client.clone();
        let tx = ctx.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(crate::ui::app::UiMessage::CashFlowDeleted(
                client.delete_cash_flow_record(id).await,
            ));
        });
    }

    fn cycle_broker_filter(&mut self, ctx: &PageContext) {
        let ids: Vec<i64> = ctx.brokers.iter().map(|b| b.id).collect();
        cycle_filter(&mut self.filters.broker_id, &ids);
        self.nav.selected = 0;
    }

    fn filter_summary(&self, ctx: &PageContext) -> String {
        let mut parts = Vec::new();
        if let Some(t) = &self.filters.record_type {
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

impl PageView for CashFlowPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        let rows_source = visible_records(&self.records, &self.filters, self.sort);
        self.nav.clamp(rows_source.len());
        let page_range = self.nav.page_range(rows_source.len());
        let selected_on_page = self.nav.selected_on_page();

        let sort_marker = |column: CashFlowColumn| match self.sort {
            Some((c, order)) if c == column => order.indicator(),
            _ => "",
        };
        let header = Row::new(vec![
            format!("Date {}", sort_marker(CashFlowColumn::Date)),
            "Broker".to_string(),
            "Type".to_string(),
            format!("Amount {}", sort_marker(CashFlowColumn::Amount)),
            "Currency".to_string(),
            "Bank".to_string(),
            "Description".to_string(),
        ])
        .style(theme::header_style());

        let rows: Vec<Row> = if self.loading && rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("Loading records...")])
                .style(Style::default().fg(Color::Yellow))]
        } else if rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("No records")]).style(theme::dim_style())]
        } else {
            rows_source[page_range.clone()]
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let amount_cell = {
                        let formatted = ctx
                            .visibility
                            .cover(format::signed_thousands(record.signed_amount(), 2));
                        Cell::from(formatted).style(theme::tag_style(record.record_type.tag_color()))
                    };
                    let broker_name = record
                        .broker
                        .as_ref()
                        .map(|b| b.broker_name.clone())
                        .unwrap_or_else(|| ctx.broker_name(record.broker_id));
                    let row = Row::new(vec![
                        Cell::from(record.record_date.format("%Y-%m-%d").to_string()),
                        Cell::from(broker_name),
                        Cell::from(record.record_type.label().to_string())
                            .style(theme::tag_style(record.record_type.tag_color())),
                        amount_cell,
                        Cell::from(record.currency.label().to_string())
                            .style(theme::tag_style(record.currency.tag_color())),
                        Cell::from(record.bank.clone().unwrap_or_default()),
                        Cell::from(record.description.clone().unwrap_or_default()),
                    ]);
                    if i == selected_on_page {
                        row.style(theme::selected_style())
                    } else {
                        row
                    }
                })
                .collect()
        };

        let table = Table::new(
            rows,
            &[
                Constraint::Length(12),
                Constraint::Min(14),
                Constraint::Length(11),
                Constraint::Length(14),
                Constraint::Length(9),
                Constraint::Length(10),
                Constraint::Min(12),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Cash Flow ({} records) ",
            rows_source.len()
        )));
        frame.render_widget(table, chunks[0]);

        let footer = Paragraph::new(format!(
            "page {}/{} · {} · n new · d delete · s sort · t type · u currency · b broker",
            self.nav.page_index() + 1,
            self.nav.page_count(rows_source.len()),
            self.filter_summary(ctx),
        ))
        .style(theme::dim_style());
        frame.render_widget(footer, chunks[1]);

        if let Some(form) = &self.form {
            let rows = [
                FormRow::text(&form.date),
                FormRow::select(&form.broker, |(_, name)| name.clone()),
                FormRow::select(&form.record_type, |t| t.label().to_string()),
                FormRow::text(&form.amount),
                FormRow::select(&form.currency, |c| c.label().to_string()),
                FormRow::text(&form.bank),
                FormRow::text(&form.description),
            ];
            render_form(frame, "New Cash Flow Record", &rows, form.focus.index);
        }

        if self.confirm_delete.is_some() {
            render_confirm(frame, "Delete this cash flow record?");
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

        let visible = visible_records(&self.records, &self.filters, self.sort);
        match key.code {
            KeyCode::Down => self.nav.select_next(visible.len()),
            KeyCode::Up => self.nav.select_previous(),
            KeyCode::PageDown => self.nav.next_page(visible.len()),
            KeyCode::PageUp => self.nav.previous_page(),
            KeyCode::Char('s') => cycle_sort(&mut self.sort, &SORTABLE),
            KeyCode::Char('t') => {
                cycle_filter(&mut self.filters.record_type, &RecordType::all());
                self.nav.selected = 0;
            }
            KeyCode::Char('u') => {
                cycle_filter(&mut self.filters.currency, &Currency::all());
                self.nav.selected = 0;
            }
            KeyCode::Char('b') => self.cycle_broker_filter(ctx),
            KeyCode::Char('n') => self.open_create_modal(ctx),
            KeyCode::Char('d') => {
                if let Some(record) = visible.get(self.nav.selected) {
                    self.confirm_delete = Some(record.id);
                }
            }
            _ => return false,
        }
        true
    }

    fn wants_text_input(&self) -> bool {
        self.form.is_some() || self.confirm_delete.is_some()
    }
}

impl Default for CashFlowPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: i64, date: &str, broker_id: i64, kind: &str, amount: f64, currency: &str) -> CashFlowRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "recordDate": date,
            "brokerId": broker_id,
            "recordType": kind,
            "amount": amount,
            "currency": currency
        }))
        .unwrap()
    }

    fn sample() -> Vec<CashFlowRecord> {
        vec![
            record(1, "2024-01-15", 1, "DEPOSIT", 50000.0, "CNY"),
            record(2, "2024-02-05", 2, "WITHDRAWAL", 3000.0, "USD"),
            record(3, "2024-03-01", 1, "DEPOSIT", 1000.0, "USD"),
        ]
    }

    #[test]
    fn test_filters_combine_as_and() {
        let records = sample();
        let mut filters = CashFlowFilters {
            record_type: Some(RecordType::Deposit),
            ..Default::default()
        };
        assert_eq!(visible_records(&records, &filters, None).len(), 2);

        filters.currency = Some(Currency::Usd);
        let rows = visible_records(&records, &filters, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 3);

        filters.broker_id = Some(2);
        assert!(visible_records(&records, &filters, None).is_empty());
    }

    #[test]
    fn test_amount_sort_uses_signed_values() {
        let records = sample();
        let rows = visible_records(
            &records,
            &CashFlowFilters::default(),
            Some((CashFlowColumn::Amount, SortOrder::Ascending)),
        );
        // The withdrawal sorts below both deposits once negated
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[2].id, 1);
    }

    #[test]
    fn test_date_sort_descending() {
        let records = sample();
        let rows = visible_records(
            &records,
            &CashFlowFilters::default(),
            Some((CashFlowColumn::Date, SortOrder::Descending)),
        );
        assert_eq!(rows[0].id, 3);
        assert_eq!(rows[2].id, 1);
    }

    #[test]
    fn test_form_validates_payload() {
        let brokers = vec![(3, "Futu Securities".to_string())];
        let mut form = CashFlowForm::new(&brokers);
        form.date.value = "2024-06-01".to_string();
        form.amount.value = "1000.00".to_string();
        form.currency.select_where(|c| *c == Currency::Usd);

        let payload = form.validate().unwrap();
        assert_eq!(payload.broker_id, 3);
        assert_eq!(payload.record_type, RecordType::Deposit);
        assert_eq!(payload.amount, dec!(1000.00));
        assert_eq!(payload.currency, Currency::Usd);
        assert_eq!(payload.record_date.to_string(), "2024-06-01");
        assert!(payload.bank.is_none());
    }

    #[test]
    fn test_form_rejects_bad_amount_and_date() {
        let brokers = vec![(1, "IBKR".to_string())];
        let mut form = CashFlowForm::new(&brokers);
        form.date.value = "01/06/2024".to_string();
        form.amount.value = "-5".to_string();
        assert!(form.validate().is_none());
        assert!(form.date.error.is_some());
        assert!(form.amount.error.is_some());
    }

    #[test]
    fn test_form_without_brokers_cannot_submit() {
        let mut form = CashFlowForm::new(&[]);
        form.amount.value = "100".to_string();
        assert!(form.validate().is_none());
        assert!(form.broker.error.is_some());
    }

    #[tokio::test]
    async fn test_canceling_confirm_issues_no_delete() {
        use crate::ui::pages::TestCtx;
        use crossterm::event::KeyModifiers;

        let mut fixture = TestCtx::new();
        let mut page = CashFlowPage::new();
        page.on_records(sample());
        page.confirm_delete = Some(1);

        let consumed = page.handle_key(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            &fixture.ctx(),
        );
        assert!(consumed);
        assert!(page.confirm_delete.is_none());
        assert_eq!(page.records.len(), 3);
        // No delete call was spawned
        assert!(fixture.rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_confirming_delete_spawns_the_call() {
        use crate::ui::pages::TestCtx;
        use crate::ui::app::UiMessage;
        use crossterm::event::KeyModifiers;

        let mut fixture = TestCtx::new();
        let mut page = CashFlowPage::new();
        page.on_records(sample());
        page.confirm_delete = Some(1);

        page.handle_key(
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
            &fixture.ctx(),
        );
        assert!(page.confirm_delete.is_none());
        // The spawned delete fails against the unreachable test address but
        // still reports back over the channel
        let message = fixture.rx.recv().await.unwrap();
        assert!(matches!(message, UiMessage::CashFlowDeleted(Err(_))));
    }
}
