//! pollchat-tui — Terminal chat widget over the polling session.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use pollchat_core::client::ChatClient;
use pollchat_core::config::Config;
use pollchat_core::session::ChatSession;

use app::{App, FeedView, UiEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to a file, not stdout, since we own the terminal
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("pollchat-tui.log")
                .map(|f| Box::new(f) as Box<dyn io::Write>)
                .unwrap_or_else(|_| Box::new(io::sink()) as Box<dyn io::Write>)
        })
        .try_init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load_or_default(&cwd.join("config.yaml"))?;
    let client = ChatClient::new(&config).context("Failed to build HTTP client")?;

    let (ui_tx, mut ui_rx) = tokio::sync::mpsc::unbounded_channel::<UiEvent>();
    let view = FeedView::new(ui_tx.clone(), config.time_format.clone());
    let session = Arc::new(ChatSession::new(client, view));
    let poller = session.start_polling(config.poll_interval());

    let mut app = App::new(config.default_name.clone());
    info!("pollchat-tui started against {}", config.base_url);

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Apply session updates (non-blocking)
        while let Ok(event) = ui_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    (KeyCode::Tab, _) => app.toggle_focus(),
                    (KeyCode::Enter, _) => {
                        // Submit off the draw loop so the UI stays responsive
                        let draft = app.draft.clone();
                        let session = Arc::clone(&session);
                        let tx = ui_tx.clone();
                        tokio::spawn(async move {
                            session
                                .submit(&draft, move || {
                                    let _ = tx.send(UiEvent::ClearText);
                                })
                                .await;
                        });
                    }
                    (KeyCode::Backspace, _) => app.backspace(),
                    (KeyCode::PageUp, _) => app.scroll_up(),
                    (KeyCode::PageDown, _) => app.scroll_down(),
                    (KeyCode::Char(c), _) => app.type_char(c),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    poller.stop().await;
    info!("pollchat-tui stopped");
    Ok(())
}
