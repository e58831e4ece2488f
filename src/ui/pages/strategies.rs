//! Strategy management page; the one page with in-place editing

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::{PageContext, PageView, PAGE_SIZE};
use crate::models::{NewStrategy, Strategy};
use crate::ui::forms::{max_len, require, Focus, TextField};
use crate::ui::table::{cycle_sort, SortOrder, TableNav};
use crate::ui::theme;
use crate::ui::widgets::{render_confirm, render_form, FormRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyColumn {
    Created,
    Updated,
}

const SORTABLE: [StrategyColumn; 2] = [StrategyColumn::Created, StrategyColumn::Updated];

pub fn sorted_strategies<'a>(
    strategies: &'a [Strategy],
    sort: Option<(StrategyColumn, SortOrder)>,
) -> Vec<&'a Strategy> {
    let mut rows: Vec<&Strategy> = strategies.iter().collect();
    if let Some((column, order)) = sort {
        rows.sort_by(|a, b| {
            let ordering = match column {
                StrategyColumn::Created => a.created_at.cmp(&b.created_at),
                StrategyColumn::Updated => a.updated_at.cmp(&b.updated_at),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
    rows
}

/// Modal editor, reused for create and edit; `editing_id` decides whether
/// the submission POSTs or PUTs
pub struct StrategyForm {
    pub editing_id: Option<i64>,
    pub name: TextField,
    pub description: TextField,
    pub focus: Focus,
}

impl StrategyForm {
    pub fn create() -> Self {
        Self {
            editing_id: None,
            name: TextField::new("Name"),
            description: TextField::new("Description"),
            focus: Focus::new(2),
        }
    }

    pub fn edit(strategy: &Strategy) -> Self {
        Self {
            editing_id: Some(strategy.id),
            name: TextField::with_value("Name", strategy.strategy_name.clone()),
            description: TextField::with_value(
                "Description",
                strategy.description.clone().unwrap_or_default(),
            ),
            focus: Focus::new(2),
        }
    }

    pub fn validate(&mut self) -> Option<NewStrategy> {
        let mut ok = true;

        let name = match require(&self.name.value, "Name") {
            Ok(name) => match max_len(&name, 200, "Name") {
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

        if let Err(e) = max_len(self.description.trimmed(), 500, "Description") {
            self.description.error = Some(e);
            ok = false;
        }

        if !ok {
            return None;
        }

        Some(NewStrategy {
            strategy_name: name?,
            description: self.description.optional(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.previous(),
            KeyCode::Char(c) => self.text_field_mut().insert(c),
            KeyCode::Backspace => self.text_field_mut().backspace(),
            _ => {}
        }
    }

    fn text_field_mut(&mut self) -> &mut TextField {
        match self.focus.index {
            0 => &mut self.name,
            _ => &mut self.description,
        }
    }
}

pub struct StrategiesPage {
    pub loaded: bool,
    pub sort: Option<(StrategyColumn, SortOrder)>,
    pub nav: TableNav,
    pub form: Option<StrategyForm>,
    pub confirm_delete: Option<i64>,
}

impl StrategiesPage {
    pub fn new() -> Self {
        Self {
            loaded: false,
            sort: None,
            nav: TableNav::new(PAGE_SIZE),
            form: None,
            confirm_delete: None,
        }
    }

    pub fn on_data(&mut self, strategies: &[Strategy]) {
        self.nav.clamp(strategies.len());
    }

    pub fn open_create_modal(&mut self) {
        self.form = Some(StrategyForm::create());
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
        match form.editing_id {
            Some(id) => {
                tokio::spawn(async move {
                    let _ = tx.send(crate::ui::app::UiMessage::StrategyUpdated(
                        client.update_strategy(id, &payload).await,
                    ));
                });
            }
            None => {
                tokio::spawn(async move {
                    let _ = tx.send(crate::ui::app::UiMessage::StrategyCreated(
                        client.create_strategy(&payload).await,
                    ));
                });
            }
        }
    }

    fn delete_confirmed(&mut self, id: i64, ctx: &PageContext) {
        let client = ctx.client.clone();
        let tx = ctx.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(crate::ui::app::UiMessage::StrategyDeleted(
                client.delete_strategy(id).await,
            ));
        });
    }
}

impl PageView for StrategiesPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        let rows_source = sorted_strategies(ctx.strategies, self.sort);
        self.nav.clamp(rows_source.len());
        let page_range = self.nav.page_range(rows_source.len());
        let selected_on_page = self.nav.selected_on_page();

        let sort_marker = |column: StrategyColumn| match self.sort {
            Some((c, order)) if c == column => order.indicator(),
            _ => "",
        };
        let header = Row::new(vec![
            "ID".to_string(),
            "Name".to_string(),
            "Description".to_string(),
            format!("Created {}", sort_marker(StrategyColumn::Created)),
            format!("Updated {}", sort_marker(StrategyColumn::Updated)),
        ])
        .style(theme::header_style());

        let rows: Vec<Row> = if ctx.strategies_loading && rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("Loading strategies...")])
                .style(Style::default().fg(Color::Yellow))]
        } else if rows_source.is_empty() {
            vec![Row::new(vec![Cell::from("No strategies")]).style(theme::dim_style())]
        } else {
            rows_source[page_range.clone()]
                .iter()
                .enumerate()
                .map(|(i, strategy)| {
                    let row = Row::new(vec![
                        Cell::from(strategy.id.to_string()),
                        Cell::from(strategy.strategy_name.clone()),
                        Cell::from(strategy.description.clone().unwrap_or_default()),
                        Cell::from(
                            strategy.created_at.format("%Y-%m-%d %H:%M").to_string(),
                        ),
                        Cell::from(
                            strategy.updated_at.format("%Y-%m-%d %H:%M").to_string(),
                        ),
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
                Constraint::Length(5),
                Constraint::Min(18),
                Constraint::Min(24),
                Constraint::Length(17),
                Constraint::Length(17),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Strategies ({}) ",
            rows_source.len()
        )));
        frame.render_widget(table, chunks[0]);

        let footer = Paragraph::new(format!(
            "page {}/{} · n new · e edit · d delete · s sort",
            self.nav.page_index() + 1,
            self.nav.page_count(rows_source.len()),
        ))
        .style(theme::dim_style());
        frame.render_widget(footer, chunks[1]);

        if let Some(form) = &self.form {
            let title = if form.editing_id.is_some() {
                "Edit Strategy"
            } else {
                "New Strategy"
            };
            let rows = [FormRow::text(&form.name), FormRow::text(&form.description)];
            render_form(frame, title, &rows, form.focus.index);
        }

        if self.confirm_delete.is_some() {
            render_confirm(frame, "Delete this strategy?");
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

        let visible = sorted_strategies(ctx.strategies, self.sort);
        match key.code {
            KeyCode::Down => self.nav.select_next(visible.len()),
            KeyCode::Up => self.nav.select_previous(),
            KeyCode::PageDown => self.nav.next_page(visible.len()),
            KeyCode::PageUp => self.nav.previous_page(),
            KeyCode::Char('s') => cycle_sort(&mut self.sort, &SORTABLE),
            KeyCode::Char('n') => self.open_create_modal(),
            KeyCode::Char('e') => {
                if let Some(strategy) = visible.get(self.nav.selected) {
                    self.form = Some(StrategyForm::edit(strategy));
                }
            }
            KeyCode::Char('d') => {
                if let Some(strategy) = visible.get(self.nav.selected) {
                    self.confirm_delete = Some(strategy.id);
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

impl Default for StrategiesPage {
    fn default() -> Self {
        Self::new()
    }
}
