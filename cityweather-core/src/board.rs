//! Current conditions for a fixed list of cities.
//!
//! Each city owns one slot, addressed by its position in the list. Lookups run
//! concurrently and every settled lookup replaces its own slot as a whole, so
//! slots never observe each other's failures.

use std::sync::Arc;

use futures::future::join_all;
use parking_lot::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{
    model::{City, CurrentConditions},
    provider::WeatherLookup,
};

/// Display state of one board entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    pub data: Option<CurrentConditions>,
    pub is_loading: bool,
    pub has_error: bool,
}

impl SlotState {
    pub fn loading() -> Self {
        Self { data: None, is_loading: true, has_error: false }
    }

    pub fn loaded(data: CurrentConditions) -> Self {
        Self { data: Some(data), is_loading: false, has_error: false }
    }

    pub fn failed() -> Self {
        Self { data: None, is_loading: false, has_error: true }
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading && (self.data.is_some() != self.has_error)
    }
}

/// Emitted every time a slot is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotUpdate {
    pub index: usize,
    pub state: SlotState,
}

#[derive(Debug)]
pub struct CityBoard {
    lookup: Arc<dyn WeatherLookup>,
    cities: Vec<City>,
    slots: Mutex<Vec<SlotState>>,
    updates: Option<UnboundedSender<SlotUpdate>>,
}

impl CityBoard {
    pub fn new(lookup: Arc<dyn WeatherLookup>, cities: Vec<City>) -> Self {
        let slots = vec![SlotState::default(); cities.len()];
        Self { lookup, cities, slots: Mutex::new(slots), updates: None }
    }

    /// Report every slot replacement on `tx`. Send failures are ignored.
    pub fn with_updates(mut self, tx: UnboundedSender<SlotUpdate>) -> Self {
        self.updates = Some(tx);
        self
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn snapshot(&self) -> Vec<SlotState> {
        self.slots.lock().clone()
    }

    /// Look every city up concurrently and wait until all slots have settled.
    pub async fn load_all(&self) -> Vec<SlotState> {
        join_all((0..self.cities.len()).map(|index| self.load_slot(index))).await;
        self.snapshot()
    }

    /// Look one city up, replacing its slot at start and on completion.
    pub async fn load_slot(&self, index: usize) {
        let Some(city) = self.cities.get(index) else {
            return;
        };

        self.replace_slot(index, SlotState::loading());

        let state = match self.lookup.fetch_current_conditions(city.latitude, city.longitude).await
        {
            Ok(data) => SlotState::loaded(data),
            Err(err) => {
                debug!(city = %city.name, error = %err, "current conditions lookup failed");
                SlotState::failed()
            }
        };

        self.replace_slot(index, state);
    }

    fn replace_slot(&self, index: usize, state: SlotState) {
        {
            let mut slots = self.slots.lock();
            match slots.get_mut(index) {
                Some(slot) => *slot = state.clone(),
                None => return,
            }
        }

        if let Some(tx) = &self.updates {
            let _ = tx.send(SlotUpdate { index, state });
        }
    }
}
