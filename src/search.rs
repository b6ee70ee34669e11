//! Search input state machine
//!
//! Owns the search query, the candidate list, and the debounce timer that
//! coalesces rapid edits into a single geocoding call. The timer is a
//! stored deadline: every edit overwrites it, which is the cancel-and-
//! reschedule the debounce needs. Stale results are suppressed with a
//! generation counter that bumps on every edit and on selection, so a
//! response is applied only if the query that produced it is still
//! current.

use std::time::{Duration, Instant};

use crate::data::geocode::MIN_QUERY_LEN;
use crate::data::Place;

/// Quiet period after the last edit before a search is issued
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A search that became due and should be dispatched to the geocoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    /// Generation of the query this search was issued for
    pub generation: u64,
    /// The query text to search
    pub query: String,
}

/// State of the search input and its candidate dropdown
#[derive(Debug)]
pub struct SearchBox {
    /// Current query text
    pub query: String,
    /// Candidate places, in API response order
    pub candidates: Vec<Place>,
    /// Label of the last selected place (or resolved startup location)
    pub selected_label: Option<String>,
    /// Index of the highlighted candidate
    pub highlighted: usize,
    /// When the debounce quiet period elapses, if an edit is pending
    deadline: Option<Instant>,
    /// Bumped on every edit and selection; tags outgoing searches
    generation: u64,
}

impl SearchBox {
    /// Creates an empty search box
    pub fn new() -> Self {
        Self {
            query: String::new(),
            candidates: Vec::new(),
            selected_label: None,
            highlighted: 0,
            deadline: None,
            generation: 0,
        }
    }

    /// Replaces the query text, restarting the debounce timer
    ///
    /// Queries shorter than the minimum clear the candidate list
    /// immediately and cancel any pending timer.
    pub fn on_query_changed(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.generation += 1;
        self.highlighted = 0;

        if self.query.chars().count() < MIN_QUERY_LEN {
            self.candidates.clear();
            self.deadline = None;
        } else {
            self.deadline = Some(now + DEBOUNCE);
        }
    }

    /// Appends a typed character to the query
    pub fn push_char(&mut self, ch: char, now: Instant) {
        let mut text = self.query.clone();
        text.push(ch);
        self.on_query_changed(text, now);
    }

    /// Removes the last character of the query
    pub fn backspace(&mut self, now: Instant) {
        let mut text = self.query.clone();
        text.pop();
        self.on_query_changed(text, now);
    }

    /// Returns the search to dispatch if the quiet period has elapsed
    ///
    /// Consumes the deadline, so each elapsed quiet period yields exactly
    /// one search.
    pub fn poll_due(&mut self, now: Instant) -> Option<PendingSearch> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        Some(PendingSearch {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies search results if the query that produced them is current
    ///
    /// Returns whether the results were applied or discarded as stale.
    pub fn apply_candidates(&mut self, generation: u64, results: Vec<Place>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.candidates = results;
        self.highlighted = 0;
        true
    }

    /// Selects the highlighted candidate, if any
    ///
    /// Sets the display label, clears the query and candidates, cancels
    /// the timer, and bumps the generation so any in-flight search result
    /// is discarded on arrival. Returns the selected place.
    pub fn select_highlighted(&mut self) -> Option<Place> {
        let place = self.candidates.get(self.highlighted)?.clone();
        self.selected_label = Some(place.label());
        self.query.clear();
        self.candidates.clear();
        self.highlighted = 0;
        self.deadline = None;
        self.generation += 1;
        Some(place)
    }

    /// Clears the query and candidates without selecting
    pub fn clear(&mut self) {
        self.query.clear();
        self.candidates.clear();
        self.highlighted = 0;
        self.deadline = None;
        self.generation += 1;
    }

    /// Moves the candidate highlight up, saturating at the top
    pub fn highlight_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Moves the candidate highlight down, saturating at the bottom
    pub fn highlight_down(&mut self) {
        if !self.candidates.is_empty() && self.highlighted < self.candidates.len() - 1 {
            self.highlighted += 1;
        }
    }

    /// Whether a debounce timer is currently armed
    pub fn timer_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Coordinate;

    fn place(id: u64, name: &str) -> Place {
        Place {
            id,
            name: name.to_string(),
            coordinate: Coordinate {
                latitude: 51.5,
                longitude: -0.12,
            },
            country: "United Kingdom".to_string(),
            admin1: None,
        }
    }

    #[test]
    fn test_short_query_clears_candidates_synchronously() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("London", now);
        search.apply_candidates(1, vec![place(1, "London")]);
        assert_eq!(search.candidates.len(), 1);

        search.on_query_changed("L", now);
        assert!(search.candidates.is_empty());
        assert!(!search.timer_armed());
    }

    #[test]
    fn test_short_query_never_becomes_due() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("L", now);
        assert!(search.poll_due(now + DEBOUNCE * 2).is_none());
    }

    #[test]
    fn test_search_due_after_quiet_period() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lo", now);

        // Not yet due inside the quiet period.
        assert!(search.poll_due(now + Duration::from_millis(100)).is_none());

        let pending = search
            .poll_due(now + DEBOUNCE)
            .expect("Search should be due after the quiet period");
        assert_eq!(pending.query, "Lo");

        // The deadline is consumed; polling again yields nothing.
        assert!(search.poll_due(now + DEBOUNCE * 2).is_none());
    }

    #[test]
    fn test_rapid_edits_coalesce_into_one_search() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lo", now);
        search.on_query_changed("Lon", now + Duration::from_millis(150));

        // The first deadline was overwritten by the second edit.
        assert!(search.poll_due(now + DEBOUNCE).is_none());

        let pending = search
            .poll_due(now + Duration::from_millis(150) + DEBOUNCE)
            .expect("Search should be due after the second quiet period");
        assert_eq!(pending.query, "Lon");
        assert!(search.poll_due(now + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_stale_results_discarded_after_edit() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lon", now);
        let pending = search.poll_due(now + DEBOUNCE).unwrap();

        // A further edit supersedes the in-flight search.
        search.on_query_changed("Lond", now + DEBOUNCE);

        let applied = search.apply_candidates(pending.generation, vec![place(1, "London")]);
        assert!(!applied);
        assert!(search.candidates.is_empty());
    }

    #[test]
    fn test_current_results_applied() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lon", now);
        let pending = search.poll_due(now + DEBOUNCE).unwrap();

        let applied =
            search.apply_candidates(pending.generation, vec![place(1, "London"), place(2, "Londonderry")]);
        assert!(applied);
        assert_eq!(search.candidates.len(), 2);
        assert_eq!(search.highlighted, 0);
    }

    #[test]
    fn test_select_highlighted_clears_and_labels() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lon", now);
        let pending = search.poll_due(now + DEBOUNCE).unwrap();
        search.apply_candidates(pending.generation, vec![place(1, "London"), place(2, "Londonderry")]);
        search.highlight_down();

        let selected = search.select_highlighted().expect("Expected a selection");
        assert_eq!(selected.name, "Londonderry");
        assert_eq!(
            search.selected_label.as_deref(),
            Some("Londonderry, United Kingdom")
        );
        assert!(search.query.is_empty());
        assert!(search.candidates.is_empty());
        assert!(!search.timer_armed());
    }

    #[test]
    fn test_selection_supersedes_inflight_search() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lon", now);
        let pending = search.poll_due(now + DEBOUNCE).unwrap();
        search.apply_candidates(pending.generation, vec![place(1, "London")]);

        // A second search goes out, then the user selects before it lands.
        search.on_query_changed("Lond", now + DEBOUNCE);
        let second = search.poll_due(now + DEBOUNCE * 2).unwrap();
        search.apply_candidates(second.generation, vec![place(1, "London")]);
        search.select_highlighted().unwrap();

        let applied = search.apply_candidates(second.generation, vec![place(3, "Londonderry")]);
        assert!(!applied);
        assert!(search.candidates.is_empty());
    }

    #[test]
    fn test_select_with_no_candidates_is_noop() {
        let mut search = SearchBox::new();
        assert!(search.select_highlighted().is_none());
        assert!(search.selected_label.is_none());
    }

    #[test]
    fn test_highlight_saturates_at_bounds() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.on_query_changed("Lon", now);
        let pending = search.poll_due(now + DEBOUNCE).unwrap();
        search.apply_candidates(pending.generation, vec![place(1, "a"), place(2, "b")]);

        search.highlight_up();
        assert_eq!(search.highlighted, 0);
        search.highlight_down();
        search.highlight_down();
        assert_eq!(search.highlighted, 1);
    }

    #[test]
    fn test_clear_resets_without_label() {
        let now = Instant::now();
        let mut search = SearchBox::new();
        search.selected_label = Some("London, United Kingdom".to_string());
        search.on_query_changed("Par", now);
        search.clear();

        assert!(search.query.is_empty());
        assert!(!search.timer_armed());
        // Clearing the input does not discard the selected place label.
        assert_eq!(
            search.selected_label.as_deref(),
            Some("London, United Kingdom")
        );
    }
}
