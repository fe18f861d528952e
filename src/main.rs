use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use shelf::app::{App, AppMessage, Screen};
use shelf::config::ClientConfig;
use shelf::session::SessionStore;
use shelf::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log to `~/.shelf/shelf.log`; the terminal is owned by the TUI. Filter
/// via the `SHELF_LOG` env var, default `info`.
fn init_logging() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let log_dir = home.join(".shelf");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("shelf.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
}

/// Restore the terminal on panic so the error is actually readable.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("shelf {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_logging();
    setup_panic_hook();

    let config = ClientConfig::from_env();
    let session = SessionStore::new();
    tracing::info!(base_url = %config.base_url, "Starting shelf");

    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, session, tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, rx).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Start with fresh catalog data when already signed in
    if app.screen == Screen::Books {
        app.fetch_books(1);
    }

    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.tick();
            }
            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Terminal event error");
                    }
                    None => return Ok(()),
                }
            }
            message = rx.recv() => {
                match message {
                    Some(message) => app.apply_message(message),
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
