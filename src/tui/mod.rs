//! Interactive terminal dashboard.
//!
//! Architecture: a single unbounded queue of [`message::Message`]s feeds
//! the [`app::App`] engine, which mutates state serially and renders one
//! frame per processed batch. Async work runs as [`command::Command`]s on
//! the runtime and reports back through the same queue.

pub mod app;
pub mod command;
pub mod events;
pub mod message;
pub mod router;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;

use crate::api::Client;
use crate::config::Config;
use anyhow::{Context, Result};
use app::App;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use message::Message;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use router::ViewId;
use std::io::{self, Stdout};
use std::sync::Arc;
use theme::Theme;
use tokio::sync::mpsc;

/// Launch the dashboard on its landing screen.
pub async fn launch_dashboard(config: Config) -> Result<()> {
    launch_view(config, ViewId::Dashboard).await
}

/// Launch the dashboard directly on a specific screen.
pub async fn launch_view(config: Config, entry: ViewId) -> Result<()> {
    let client = Arc::new(Client::new(config).context("failed to build API client")?);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, client, entry).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: Arc<Client>,
    entry: ViewId,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    events::spawn_input_reader(tx.clone());

    let mut app = App::new(client, tx, entry, detect_theme());

    let size = terminal.size()?;
    app.handle_message(Message::Resize(size.width, size.height));

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        app.handle_message(message);
        // Drain whatever else is queued before paying for another frame.
        while let Ok(message) = rx.try_recv() {
            app.handle_message(message);
            if app.should_quit() {
                break;
            }
        }
    }
    Ok(())
}

/// Pick the palette the terminal can actually show.
fn detect_theme() -> Theme {
    theme_for(&std::env::var("COLORTERM").unwrap_or_default())
}

/// Truecolor terminals get the full palette; everything else falls back to
/// the ANSI preset.
fn theme_for(colorterm: &str) -> Theme {
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        Theme::quickspin_dark()
    } else {
        Theme::ansi()
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
