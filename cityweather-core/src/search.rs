//! Ad-hoc city search: geocode a free-text query, then fetch its weather.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;
use tracing::debug;

use crate::{model::CurrentConditions, provider::WeatherLookup};

pub const NOT_FOUND_MESSAGE: &str = "City not found";
pub const ERROR_MESSAGE: &str = "Error fetching weather";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The geocoder's canonical name, not the typed query.
    pub display_name: String,
    pub country: Option<String>,
    pub conditions: CurrentConditions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Resolved(SearchResult),
    NotFound,
    Errored,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// User-facing message for the terminal failure states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchState::NotFound => Some(NOT_FOUND_MESSAGE),
            SearchState::Errored => Some(ERROR_MESSAGE),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchState::Resolved(result) => Some(result),
            _ => None,
        }
    }
}

/// Holds the single search result slot.
///
/// Each submission is numbered; a response is applied only while its number is
/// still the latest issued, so a slow earlier search never overwrites a later one.
#[derive(Debug)]
pub struct CitySearch {
    lookup: Arc<dyn WeatherLookup>,
    state: Mutex<SearchState>,
    issued: AtomicU64,
}

impl CitySearch {
    pub fn new(lookup: Arc<dyn WeatherLookup>) -> Self {
        Self { lookup, state: Mutex::new(SearchState::Idle), issued: AtomicU64::new(0) }
    }

    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    /// Run one search. Returns `false` without touching state or the network
    /// when the query is blank.
    pub async fn submit(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(seq, SearchState::Loading);

        let outcome = self.run(query).await;
        if !self.apply(seq, outcome) {
            debug!(query, seq, "discarding stale search response");
        }

        true
    }

    async fn run(&self, query: &str) -> SearchState {
        let found = match self.lookup.resolve_city(query).await {
            Ok(Some(found)) => found,
            Ok(None) => return SearchState::NotFound,
            Err(err) => {
                debug!(query, error = %err, "geocoding failed");
                return SearchState::Errored;
            }
        };

        match self.lookup.fetch_current_conditions(found.latitude, found.longitude).await {
            Ok(conditions) => SearchState::Resolved(SearchResult {
                display_name: found.name,
                country: found.country,
                conditions,
            }),
            Err(err) => {
                debug!(query, city = %found.name, error = %err, "weather lookup failed");
                SearchState::Errored
            }
        }
    }

    fn apply(&self, seq: u64, next: SearchState) -> bool {
        let mut state = self.state.lock();
        if self.issued.load(Ordering::SeqCst) != seq {
            return false;
        }
        *state = next;
        true
    }
}
