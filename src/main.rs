//! Skycast - terminal weather dashboard
//!
//! A terminal UI application that shows current conditions and hourly and
//! daily forecasts for the configured location or a searched city.

mod app;
mod cli;
mod conditions;
mod data;
mod location;
mod search;
mod timefmt;
mod ui;
mod wind;

use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, StartupConfig};
use data::{GeocodeClient, WeatherClient};

/// How often the header clock is refreshed
const CLOCK_TICK: Duration = Duration::from_secs(60);

/// Sets up a panic hook that restores the terminal before printing the
/// panic message. This ensures the terminal is usable even if the
/// application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    // Diagnostics go to stderr, filtered by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance wired to the fetch-result channel
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let weather_client = WeatherClient::new(&config.api_base);
    let geocode_client = GeocodeClient::new(&config.api_base);
    let mut app = App::new(weather_client, geocode_client, msg_tx);

    // Startup: seed the search box when a city was given, otherwise run
    // the location flow once.
    if let Some(city) = &config.seed_city {
        app.search.on_query_changed(city.clone(), Instant::now());
    } else {
        app.start_from_location(location::device_coordinates(&config));
    }

    let mut last_clock_tick = Instant::now();

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| ui::render_dashboard(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }

        // Drain results from background fetch tasks without blocking
        while let Ok(msg) = msg_rx.try_recv() {
            app.apply_message(msg);
        }

        // Dispatch a debounced search once its quiet period elapses
        app.poll_debounce(Instant::now());

        // Refresh the header clock once a minute, independent of fetches
        if last_clock_tick.elapsed() >= CLOCK_TICK {
            app.tick_clock(chrono::Local::now());
            last_clock_tick = Instant::now();
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
