//! Transient notification overlay

use ratatui::{
    layout::{Alignment, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn color(&self) -> Color {
        match self {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

/// Queue of short-lived notifications; only the newest one is drawn
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.queue.push(Toast {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    /// Drop expired entries; called from the tick handler
    pub fn prune(&mut self) {
        self.queue
            .retain(|toast| toast.shown_at.elapsed() < TOAST_LIFETIME);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.queue.last()
    }

    /// Render the newest toast centered at the bottom of the screen
    pub fn render(&self, frame: &mut Frame) {
        let Some(toast) = self.current() else {
            return;
        };

        let area = frame.area();
        let width = (toast.message.chars().count() + 4).min(70) as u16;
        let height = 3;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = area.height.saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width.min(area.width), height.min(area.height));

        let color = toast.kind.color();
        let widget = Paragraph::new(toast.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            )
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(widget, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_toast_wins() {
        let mut toasts = Toasts::new();
        toasts.success("saved");
        toasts.error("boom");
        let current = toasts.current().unwrap();
        assert_eq!(current.kind, ToastKind::Error);
        assert_eq!(current.message, "boom");
    }

    #[test]
    fn test_prune_keeps_fresh_toasts() {
        let mut toasts = Toasts::new();
        toasts.info("checking backend");
        toasts.prune();
        assert!(toasts.current().is_some());
    }
}
