//! Terminal input pump for the dashboard

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Error(String),
}

/// Forwards crossterm events and a steady tick over a channel so the main
/// loop can `select!` on them next to API responses
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let _task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut interval = tokio::time::interval(tick_rate);

            loop {
                let message = tokio::select! {
                    _ = interval.tick() => Some(Event::Tick),
                    terminal_event = reader.next() => match terminal_event {
                        Some(Ok(CrosstermEvent::Key(key))) => Some(Event::Key(key)),
                        // Resize and mouse events only trigger the next redraw
                        Some(Ok(_)) => None,
                        Some(Err(e)) => {
                            error!("Failed to read terminal event: {}", e);
                            Some(Event::Error(format!("Terminal read error: {}", e)))
                        }
                        None => {
                            debug!("Terminal event stream ended");
                            break;
                        }
                    },
                };

                if let Some(message) = message {
                    if tx.send(message).is_err() {
                        debug!("Event channel closed, stopping input pump");
                        break;
                    }
                }
            }
        });

        Self { rx, _task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
