//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - The weather lookup client (current conditions + geocoding)
//! - The weather code classifier
//! - Presentation state for the city board and the search box
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but holds no terminal code of its own.

pub mod board;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod search;

#[cfg(test)]
mod testing;

pub use board::{CityBoard, SlotState, SlotUpdate};
pub use condition::{WeatherCategory, classify};
pub use config::Config;
pub use error::{LookupError, LookupResult};
pub use model::{City, CityMatch, CurrentConditions, default_cities};
pub use provider::{WeatherLookup, lookup_from_config, open_meteo::OpenMeteoClient};
pub use search::{CitySearch, SearchResult, SearchState};
