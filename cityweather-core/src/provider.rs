use crate::{
    Config,
    error::LookupResult,
    model::{CityMatch, CurrentConditions},
    provider::open_meteo::OpenMeteoClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Read-only access to a weather provider and its geocoder.
#[async_trait]
pub trait WeatherLookup: Send + Sync + Debug {
    /// Current temperature, precipitation probability and weather code at a coordinate.
    async fn fetch_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> LookupResult<CurrentConditions>;

    /// First geocoder match for a free-text name, or `None` if nothing matched.
    async fn resolve_city(&self, name: &str) -> LookupResult<Option<CityMatch>>;
}

/// Construct the lookup client from the configured base URLs.
pub fn lookup_from_config(config: &Config) -> Box<dyn WeatherLookup> {
    Box::new(OpenMeteoClient::with_base_urls(
        config.weather_url.clone(),
        config.geocoding_url.clone(),
    ))
}
