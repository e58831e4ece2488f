//! Broker directory page; accounts are created here and only ever
//! disabled server-side, so the page is create-only

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::{PageContext, PageView, PAGE_SIZE};
use crate::models::{Broker, Country, NewBroker};
use crate::ui::forms::{max_len, require, valid_email, Focus, SelectField, TextField};
use crate::ui::table::{cycle_filter, TableNav};
use crate::ui::theme;
use crate::ui::widgets::{render_form, FormRow};

#[derive(Debug, Default, Clone)]
pub struct BrokerFilters {
    pub country: Option<Country>,
    pub active_only: bool,
}

impl BrokerFilters {
    pub fn matches(&self, broker: &Broker) -> bool {
        self.country.as_ref().is_none_or(|c| broker.country == *c)
            && (!self.active_only || broker.is_active)
    }
}

pub fn visible_brokers<'a>(brokers: &'a [Broker], filters: &BrokerFilters) -> Vec<&'a Broker> {
    brokers.iter().filter(|b| filters.matches(b)).collect()
}

/// Modal editor for a new broker account
pub struct BrokerForm {
    pub name: TextField,
    pub country: SelectField<Country>,
    pub description: TextField,
    pub email: TextField,
    pub phone: TextField,
    pub focus: Focus,
}

impl BrokerForm {
    pub fn new() -> Self {
        Self {
            name: TextField::new("Name"),
            country: SelectField::new("Country", Country::all()),
            description: TextField::new("Description"),
            email: TextField::new("Email"),
            phone: TextField::new("Phone"),
            focus: Focus::new(5),
        }
    }

    pub fn validate(&mut self) -> Option<NewBroker> {
        let mut ok = true;

        let name = match require(&self.name.value, "Name") {
            Ok(name) => match max_len(&name, 100, "Name") {
                Ok(()) => Some(name),
                Err(e) => {
                    self.name.error = Some(e);
                    ok = false;
                    None
                }
            },
            Err(e) => {
                self.name.error = Some(e);
                ok = false;
                None
            }
        };

        if let Err(e) = max_len(self.description.trimmed(), 200, "Description") {
            self.description.error = Some(e);
            ok = false;
        }
        if !self.email.trimmed().is_empty() {
            if let Err(e) = valid_email(self.email.trimmed()) {
                self.email.error = Some(e);
                ok = false;
            } else if let Err(e) = max_len(self.email.trimmed(), 100, "Email") {
                self.email.error = Some(e);
                ok = false;
            }
        }
        if let Err(e) = max_len(self.phone.trimmed(), 30, "Phone") {
            self.phone.error = Some(e);
            ok = false;
        }

        if !ok {
            return None;
        }

        Some(NewBroker {
            broker_name: name?,
            country: self.country.current()?.clone(),
            description: self.description.optional(),
            email: self.email.optional(),
            phone: self.phone.optional(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.previous(),
            KeyCode::Left if self.focus.index == 1 => self.country.previous_option(),
            KeyCode::Right if self.focus.index == 1 => self.country.next_option(),
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
            0 => Some(&mut self.name),
            2 => Some(&mut self.description),
            3 => Some(&mut self.email),
            4 => Some(&mut self.phone),
            _ => None,
        }
    }
}

pub struct BrokersPage {
    pub loaded: bool,
    pub filters: BrokerFilters,
    pub nav: TableNav,
    pub form: Option<BrokerForm>,
}

impl BrokersPage {
    pub fn new() -> Self {
        Self {
            loaded: false,
            filters: BrokerFilters::default(),
            nav: TableNav::new(PAGE_SIZE),
            form: None,
        }
    }

    /// Reference data arrived; pull the cursor back into range
    pub fn on_data(&mut self, brokers: &[Broker]) {
        let visible = visible_brokers(brokers, &self.filters).len();
        self.nav.clamp(visible);
    }

    pub fn close_modal(&mut self) {
        self.form = None;
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
            let _ = tx.send(crate::ui::app::UiMessage::BrokerCreated(
                client.create_broker(&payload).await,
            ));
        });
    }
}

impl PageView for BrokersPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        let rows_source = visible_brokers(ctx.brokers, &self.filters);
        self.nav.clamp(rows_source.len());
        let page_range = self.nav.page_range(rows_source.len());
        let selected_on_page = self.nav.selected_on_page();

        let header = Row::new(vec![
            "ID", "Name", "Country", "Description", "Email", "Phone", "Status",
        ])
        .style(theme::header_style());

        let rows: Vec<Row> = if ctx.brokers_loading && rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("Loading brokers...")])
                .style(Style::default().fg(Color::Yellow))]
        } else if rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("No brokers")]).style(theme::dim_style())]
        } else {
            rows_source[page_range.clone()]
                .iter()
                .enumerate()
                .map(|(i, broker)| {
                    let status = if broker.is_active {
                        Cell::from("Active").style(theme::gain_style())
                    } else {
                        Cell::from("Disabled").style(theme::dim_style())
                    };
                    let row = Row::new(vec![
                        Cell::from(broker.id.to_string()),
                        Cell::from(broker.broker_name.clone()),
                        Cell::from(broker.country.label().to_string())
                            .style(theme::tag_style(broker.country.tag_color())),
                        Cell::from(broker.description.clone().unwrap_or_default()),
                        Cell::from(broker.email.clone().unwrap_or_default()),
                        Cell::from(broker.phone.clone().unwrap_or_default()),
                        status,
                    ]);
                    if i == selected_on_page {
                        row.style(theme::selected_style())
                    } else if !broker.is_active {
                        row.style(theme::dim_style())
                    } else {
                        row
                    }
                })
                .collect()
        };

        let table = Table::new(
            rows,
            &[
                Constraint::Length(5),
                Constraint::Min(16),
                Constraint::Length(14),
                Constraint::Min(14),
                Constraint::Min(16),
                Constraint::Length(14),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Brokers ({}) ",
            rows_source.len()
        )));
        frame.render_widget(table, chunks[0]);

        let country = self
            .filters
            .country
            .as_ref()
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| "all".to_string());
        let footer = Paragraph::new(format!(
            "page {}/{} · country={} · active-only={} · n new · o country · a active",
            self.nav.page_index() + 1,
            self.nav.page_count(rows_source.len()),
            country,
            self.filters.active_only,
        ))
        .style(theme::dim_style());
        frame.render_widget(footer, chunks[1]);

        if let Some(form) = &self.form {
            let rows = [
                FormRow::text(&form.name),
                FormRow::select(&form.country, |c| c.label().to_string()),
                FormRow::text(&form.description),
                FormRow::text(&form.email),
                FormRow::text(&form.phone),
            ];
            render_form(frame, "New Broker", &rows, form.focus.index);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &PageContext) -> bool {
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

        let visible = visible_brokers(ctx.brokers, &self.filters);
        match key.code {
            KeyCode::Down => self.nav.select_next(visible.len()),
            KeyCode::Up => self.nav.select_previous(),
            KeyCode::PageDown => self.nav.next_page(visible.len()),
            KeyCode::PageUp => self.nav.previous_page(),
            KeyCode::Char('o') => {
                cycle_filter(&mut self.filters.country, &Country::all());
                self.nav.selected = 0;
            }
            KeyCode::Char('a') => {
                self.filters.active_only = !self.filters.active_only;
                self.nav.selected = 0;
            }
            KeyCode::Char('n') => self.form = Some(BrokerForm::new()),
            _ => return false,
        }
        true
    }

    fn wants_text_input(&self) -> bool {
        self.form.is_some()
    }
}

impl Default for BrokersPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broker(id: i64, name: &str, country: &str, active: bool) -> Broker {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "brokerName": name,
            "country": country,
            "isActive": active
        }))
        .unwrap()
    }

    #[test]
    fn test_country_and_active_filters_combine() {
        let brokers = vec![
            broker(1, "Futu", "HK", true),
            broker(2, "IBKR", "US", true),
            broker(3, "Old HK", "HK", false),
        ];

        let filters = BrokerFilters {
            country: Some(Country::Hk),
            active_only: false,
        };
        assert_eq!(visible_brokers(&brokers, &filters).len(), 2);

        let filters = BrokerFilters {
            country: Some(Country::Hk),
            active_only: true,
        };
        let rows = visible_brokers(&brokers, &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn test_form_requires_name() {
        let mut form = BrokerForm::new();
        assert!(form.validate().is_none());
        assert!(form.name.error.is_some());

        form.name.value = "Tiger Brokers".to_string();
        let payload = form.validate().unwrap();
        assert_eq!(payload.broker_name, "Tiger Brokers");
        assert_eq!(payload.country, Country::Cn);
        assert!(payload.email.is_none());
    }

    #[test]
    fn test_form_checks_email_shape() {
        let mut form = BrokerForm::new();
        form.name.value = "Tiger".to_string();
        form.email.value = "not-an-email".to_string();
        assert!(form.validate().is_none());
        assert!(form.email.error.is_some());

        form.email.value = "ops@tiger.example".to_string();
        form.email.error = None;
        let payload = form.validate().unwrap();
        assert_eq!(payload.email.as_deref(), Some("ops@tiger.example"));
    }
}
