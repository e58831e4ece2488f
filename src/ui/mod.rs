//! Full-screen terminal dashboard
//!
//! The shell owns the terminal: sidebar navigation on the left, a header
//! with the backend connection indicator, the active page in the content
//! area, and a toast overlay for request outcomes.

pub mod app;
pub mod events;
pub mod forms;
pub mod navigation;
pub mod pages;
pub mod table;
pub mod theme;
pub mod visibility;
pub mod widgets;

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::*, widgets::Paragraph, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::api::ApiClient;
use app::{App, ConnectionStatus, UiMessage};
use events::{Event, EventHandler};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the dashboard until the user quits
pub async fn run(client: ApiClient) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let (mut app, mut rx) = App::new(client);
    app.on_start();
    let mut event_handler = EventHandler::new(TICK_RATE);

    info!("Starting dashboard main loop");
    let result = run_loop(&mut terminal, &mut app, &mut rx, &mut event_handler).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<UiMessage>,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        tokio::select! {
            ui_event = event_handler.next() => {
                match ui_event {
                    Some(Event::Key(key)) => {
                        if key.kind != KeyEventKind::Release {
                            app.handle_key(key);
                        }
                    }
                    Some(Event::Tick) => app.tick(),
                    Some(Event::Error(message)) => app.toasts.error(message),
                    None => {
                        return Err(anyhow::anyhow!("Input event handler stopped unexpectedly"));
                    }
                }
            }
            message = rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            info!("Exiting dashboard main loop");
            return Ok(());
        }
    }
}

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(frame.area());

    app.navigation.render(frame, outer[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(outer[1]);

    render_header(frame, main[0], app);
    app.render_current_page(frame, main[1]);
    app.toasts.render(frame);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let (status_text, status_color) = match app.connection {
        ConnectionStatus::Connected => ("● Connected", Color::Green),
        ConnectionStatus::Failed => ("● Failed", Color::Red),
        ConnectionStatus::Disconnected => ("○ Disconnected", Color::DarkGray),
    };
    let amounts = if app.visibility.is_visible() {
        Span::raw("amounts visible")
    } else {
        Span::styled("amounts hidden", Style::default().fg(Color::Yellow))
    };

    let line = Line::from(vec![
        Span::styled(
            app.navigation.current_page.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw("  ·  "),
        amounts,
        Span::raw("  ·  "),
        Span::styled(
            "q quit · Tab pages · v amounts · c check · r refresh",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    if !io::stdout().is_terminal() {
        return Err(anyhow::anyhow!("stdout is not a terminal"));
    }
    if !io::stderr().is_terminal() {
        return Err(anyhow::anyhow!("stderr is not a terminal"));
    }

    enable_raw_mode().map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| anyhow::anyhow!("Failed to setup terminal screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
