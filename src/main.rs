mod app;
mod domain;
mod input;
mod logging;
mod terminal;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::event::{Event, KeyEventKind};
use domain::TaskList;
use std::path::PathBuf;
use std::time::Duration;
use terminal::TerminalGuard;
use timer::{CountdownTimer, TimerSnapshot};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Redraw interval when nothing else happens
const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
/// How long the input thread blocks waiting for a terminal event
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A terminal Pomodoro timer with a scratch task list", long_about = None)]
struct Cli {
    /// Log filter directive, e.g. "info" or "tomato=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
    /// Directory for tomato.log. Defaults to the platform cache directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

enum UiEvent {
    Input(Event),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init_tracing(&cli.log_level, &log_dir)?;
    info!(log_dir = %log_dir.display(), "starting tomato");

    let mut app = AppState::new(CountdownTimer::new(), TaskList::new());

    let result = run_tui(&mut app).await;

    // No countdown may outlive the session
    app.shutdown().await;

    match &result {
        Ok(()) => info!("exiting"),
        Err(err) => error!(error = %err, "tui exited with error"),
    }
    result
}

async fn run_tui(app: &mut AppState) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;

    // crossterm reads block, so they live on a blocking thread
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();
    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut timer_rx = app.timer.subscribe();
    let result = run_app(&mut terminal, app, &mut event_rx, &mut timer_rx).await;

    input_shutdown.cancel();
    result
}

async fn run_app(
    terminal: &mut TerminalGuard,
    app: &mut AppState,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    timer_rx: &mut watch::Receiver<TimerSnapshot>,
) -> Result<()> {
    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);

    loop {
        app.refresh_timer_view();
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            changed = timer_rx.changed() => {
                if changed.is_err() {
                    warn!("timer channel closed");
                    return Ok(());
                }
            }
            maybe_event = event_rx.recv() => {
                let Some(UiEvent::Input(event)) = maybe_event else {
                    return Ok(());
                };
                // Only process key press events (ignore key release)
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press && input::handle_key(app, key).await? {
                        return Ok(());
                    }
                }
            }
            _ = tick.tick() => {}
        }
    }
}
