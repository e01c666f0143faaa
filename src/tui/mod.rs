// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, request completions)
// - Spawning store requests so the screen never blocks on the network

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::screens::{self, Completion, Request, Route};
use crate::store::ProductStore;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// A finished request, tagged with the screen generation that issued it
type Tagged = (u64, Completion);

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop starting at `start`, and
/// restores the terminal even when the loop fails.
pub async fn run_tui<S>(config: Config, store: S, log_buffer: LogBuffer, start: Route) -> Result<()>
where
    S: ProductStore + 'static,
{
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    app.navigate(start);

    let result = run_event_loop(&mut terminal, &mut app, Arc::new(store)).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (spinner, toast expiry)
/// 3. Completions from spawned requests
async fn run_event_loop<S>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: Arc<S>,
) -> Result<()>
where
    S: ProductStore + 'static,
{
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<Tagged>();

    loop {
        for (generation, request) in app.take_requests() {
            spawn_request(store.clone(), completion_tx.clone(), generation, request);
        }

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        input::handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some((generation, completion)) = completion_rx.recv() => {
                app.complete(generation, completion);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run one request on its own task and report back over the channel
fn spawn_request<S>(
    store: Arc<S>,
    completion_tx: mpsc::UnboundedSender<Tagged>,
    generation: u64,
    request: Request,
) where
    S: ProductStore + 'static,
{
    tracing::debug!("Spawning {:?}", request);
    tokio::spawn(async move {
        let completion = screens::execute(store.as_ref(), request).await;
        // Receiver is gone once the TUI has exited
        let _ = completion_tx.send((generation, completion));
    });
}
