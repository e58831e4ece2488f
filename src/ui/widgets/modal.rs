//! Centered modal overlays: form editor frame and delete confirmation

use ratatui::{
    layout::{Alignment, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::forms::{SelectField, TextField};

/// Centered rectangle sized as a percentage of the frame
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// One rendered line of a form, assembled by the page from its fields
pub struct FormRow<'a> {
    pub label: &'a str,
    pub value: String,
    pub error: Option<&'a str>,
    pub is_select: bool,
}

impl<'a> FormRow<'a> {
    pub fn text(field: &'a TextField) -> Self {
        Self {
            label: field.label,
            value: field.value.clone(),
            error: field.error.as_deref(),
            is_select: false,
        }
    }

    pub fn select<T>(field: &'a SelectField<T>, display: impl Fn(&T) -> String) -> Self {
        Self {
            label: field.label,
            value: field.current().map(&display).unwrap_or_default(),
            error: field.error.as_deref(),
            is_select: true,
        }
    }
}

/// Draw a modal form; the focused row is highlighted and select rows show
/// cycle arrows
pub fn render_form(frame: &mut Frame, title: &str, rows: &[FormRow], focus: usize) {
    let area = frame.area();
    let height = (rows.len() as u16) * 2 + 4;
    let modal_area = centered_rect(60, 100, area);
    let modal_area = Rect {
        height: height.min(area.height),
        ..modal_area
    };

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() * 2 + 1);
    for (i, row) in rows.iter().enumerate() {
        let focused = i == focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = if row.is_select {
            format!("◂ {} ▸", row.value)
        } else if focused {
            format!("{}▏", row.value)
        } else {
            row.value.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", row.label), label_style),
            Span::raw(value),
        ]));
        match row.error {
            Some(error) => lines.push(Line::from(Span::styled(
                format!("{:<14}{}", "", error),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::default()),
        }
    }
    lines.push(Line::from(Span::styled(
        "Tab next field · ◂▸ change option · Enter save · Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let form = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(form, inner);
}

/// Draw a yes/no confirmation; nothing is deleted until `y` is pressed
pub fn render_confirm(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let modal_area = centered_rect(50, 20, area);
    let modal_area = Rect {
        height: 5.min(area.height),
        ..modal_area
    };

    frame.render_widget(Clear, modal_area);

    let text = vec![
        Line::from(message.to_string()),
        Line::default(),
        Line::from(Span::styled(
            "y confirm · n / Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(widget, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn test_centered_rect_on_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(80, 100, area);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }
}
