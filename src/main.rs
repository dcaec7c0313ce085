mod audio;
mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::time::MissedTickBehavior;

use view::AppView;
use audio::{MediaEventReceiver, SimulatedBackend};
use config::AppConfig;
use controller::AppController;
use model::{AppModel, Catalog, CatalogData};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let _log_guard = match logging::init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Rhythm Sync Starting ===");

    let data = match &config.catalog_path {
        Some(path) => CatalogData::from_json_file(path)?,
        None => CatalogData::fixture(),
    };
    let catalog = Catalog::from_data(data, config.owner.clone());

    let (backend, media_events) = SimulatedBackend::new(config.load_latency());
    let app_model = AppModel::new(catalog, config.share_host.clone());
    let mut controller = AppController::new(app_model, Box::new(backend), config.initial_volume);

    tracing::info!("Starting TUI...");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, media_events, &config).await;

    controller.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Rhythm Sync shutting down");
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    mut media_events: MediaEventReceiver,
    config: &AppConfig,
) -> Result<()> {
    let mut input = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| {
            AppView::render(f, controller.model(), &controller.playback_info());
        })?;

        if controller.should_quit() {
            break;
        }

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => controller.handle_key_event(key),
                Some(Ok(Event::Mouse(mouse))) => {
                    let size = terminal.size()?;
                    controller.handle_mouse_event(mouse, Rect::new(0, 0, size.width, size.height));
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                None => break,
            },
            _ = ticker.tick() => controller.tick(),
            Some(event) = media_events.recv() => controller.handle_media_event(event),
        }
    }

    Ok(())
}
