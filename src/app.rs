//! Application state management for Skycast
//!
//! This module contains the main application state, handling keyboard
//! input, fetch orchestration, and the application of results delivered
//! from background tasks. All mutation happens on the event-loop task;
//! network fetches run in spawned tasks that report back over an mpsc
//! channel as [`AppMessage`] values.

use std::time::Instant;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::data::{
    Coordinate, ForecastSnapshot, GeocodeClient, GeocodeError, Place, WeatherClient, WeatherError,
};
use crate::location::{LocationError, CURRENT_LOCATION_LABEL};
use crate::search::SearchBox;

/// Progress of the forecast request that currently owns the display
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    /// A fetch is in flight
    pub loading: bool,
    /// User-visible error banner, if any
    pub error: Option<String>,
}

/// Messages sent from background fetch tasks to the main app
#[derive(Debug)]
pub enum AppMessage {
    /// A forecast request settled
    ForecastReady {
        /// Sequence number the request was issued with
        seq: u64,
        /// The fetched snapshot or the failure to report
        result: Result<ForecastSnapshot, WeatherError>,
    },
    /// A geocoding search settled
    CandidatesReady {
        /// Query generation the search was issued for
        generation: u64,
        /// Matching places, or the degraded failure
        result: Result<Vec<Place>, GeocodeError>,
    },
    /// Reverse geocoding finished; `None` means fall back to the generic label
    PlaceResolved {
        /// Label of the resolved place
        label: Option<String>,
    },
}

/// Main application struct managing state and fetch orchestration
pub struct App {
    /// Latest successfully fetched forecast, displayed until replaced
    pub forecast: Option<ForecastSnapshot>,
    /// Loading/error state of the current forecast request
    pub request: RequestState,
    /// Search input state machine
    pub search: SearchBox,
    /// Wall-clock time shown in the header, refreshed by the 60 s tick
    pub clock: DateTime<Local>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Sequence number of the most recently issued forecast request
    forecast_seq: u64,
    /// Forecast API client
    weather_client: WeatherClient,
    /// Geocoding API client
    geocode_client: GeocodeClient,
    /// Sender handed to spawned fetch tasks
    msg_tx: mpsc::Sender<AppMessage>,
}

impl App {
    /// Creates a new App with the given clients and result channel
    pub fn new(
        weather_client: WeatherClient,
        geocode_client: GeocodeClient,
        msg_tx: mpsc::Sender<AppMessage>,
    ) -> Self {
        Self {
            forecast: None,
            request: RequestState::default(),
            search: SearchBox::new(),
            clock: Local::now(),
            should_quit: false,
            forecast_seq: 0,
            weather_client,
            geocode_client,
            msg_tx,
        }
    }

    /// Runs the startup location flow
    ///
    /// On success the forecast fetch and reverse label lookup are issued
    /// together; on failure the error is shown and nothing is fetched.
    pub fn start_from_location(&mut self, resolved: Result<Coordinate, LocationError>) {
        match resolved {
            Ok(coordinate) => {
                self.request_forecast(coordinate);
                self.request_place_label(coordinate);
            }
            Err(e) => {
                self.request.error = Some(e.to_string());
            }
        }
    }

    /// Issues a forecast request for a coordinate
    ///
    /// Each request carries a fresh sequence number; a request issued
    /// later always wins over one that merely resolves later.
    pub fn request_forecast(&mut self, coordinate: Coordinate) {
        let seq = self.begin_forecast();
        let client = self.weather_client.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_forecast(coordinate).await;
            let _ = tx.send(AppMessage::ForecastReady { seq, result }).await;
        });
    }

    /// Resolves a display label for a coordinate via reverse geocoding
    ///
    /// Failure and no-match both degrade to the generic label; neither is
    /// surfaced as an error.
    pub fn request_place_label(&mut self, coordinate: Coordinate) {
        let client = self.geocode_client.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let label = match client.reverse_lookup(coordinate).await {
                Ok(Some(place)) => Some(place.label()),
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!("reverse geocode failed: {e}");
                    None
                }
            };
            let _ = tx.send(AppMessage::PlaceResolved { label }).await;
        });
    }

    /// Dispatches a due debounced search to the geocoder
    ///
    /// Called every loop iteration; does nothing unless the quiet period
    /// has elapsed since the last edit.
    pub fn poll_debounce(&mut self, now: Instant) {
        let Some(pending) = self.search.poll_due(now) else {
            return;
        };
        let generation = pending.generation;
        let client = self.geocode_client.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let result = client.search(&pending.query).await;
            let _ = tx
                .send(AppMessage::CandidatesReady { generation, result })
                .await;
        });
    }

    /// Applies a message from a background fetch task
    pub fn apply_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ForecastReady { seq, result } => self.apply_forecast(seq, result),
            AppMessage::CandidatesReady { generation, result } => {
                self.apply_candidates(generation, result)
            }
            AppMessage::PlaceResolved { label } => self.apply_place_label(label),
        }
    }

    /// Marks a new forecast request as issued and returns its sequence number
    pub fn begin_forecast(&mut self) -> u64 {
        self.forecast_seq += 1;
        self.request.loading = true;
        self.forecast_seq
    }

    /// Applies a settled forecast request
    ///
    /// Results from superseded requests are discarded outright. An error
    /// replaces the banner but never the previously displayed snapshot.
    pub fn apply_forecast(&mut self, seq: u64, result: Result<ForecastSnapshot, WeatherError>) {
        if seq != self.forecast_seq {
            return;
        }
        self.request.loading = false;
        match result {
            Ok(snapshot) => {
                self.forecast = Some(snapshot);
                self.request.error = None;
            }
            Err(e) => {
                self.request.error = Some(e.to_string());
            }
        }
    }

    /// Applies a settled geocoding search
    fn apply_candidates(&mut self, generation: u64, result: Result<Vec<Place>, GeocodeError>) {
        match result {
            Ok(places) => {
                self.search.apply_candidates(generation, places);
            }
            Err(e) => {
                // Degraded: keep the list empty, log the diagnostic.
                tracing::warn!("place search failed: {e}");
                self.search.apply_candidates(generation, Vec::new());
            }
        }
    }

    /// Applies the reverse-geocoded label, falling back to the generic one
    fn apply_place_label(&mut self, label: Option<String>) {
        self.search.selected_label =
            Some(label.unwrap_or_else(|| CURRENT_LOCATION_LABEL.to_string()));
    }

    /// Refreshes the header clock
    pub fn tick_clock(&mut self, now: DateTime<Local>) {
        self.clock = now;
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - Printable characters: type into the search query
    /// - `Backspace`: delete the last query character
    /// - `Up`/`Down`: move the candidate highlight
    /// - `Enter`: select the highlighted candidate and fetch its forecast
    /// - `Esc`: clear the search input; quit when it is already empty
    /// - `Ctrl+C`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent, now: Instant) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        match key_event.code {
            KeyCode::Char(ch) => {
                self.search.push_char(ch, now);
            }
            KeyCode::Backspace => {
                self.search.backspace(now);
            }
            KeyCode::Up => {
                self.search.highlight_up();
            }
            KeyCode::Down => {
                self.search.highlight_down();
            }
            KeyCode::Enter => {
                if let Some(place) = self.search.select_highlighted() {
                    self.request_forecast(place.coordinate);
                }
            }
            KeyCode::Esc => {
                if self.search.query.is_empty() && self.search.candidates.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search.clear();
                }
            }
            _ => {}
        }
    }
}
