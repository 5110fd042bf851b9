use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{LookupError, LookupResult},
    model::{CityMatch, CurrentConditions},
};

use super::WeatherLookup;

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

const CURRENT_FIELDS: &str = "temperature_2m,precipitation_probability,weather_code";

const FORECAST: &str = "Open-Meteo forecast";
const GEOCODING: &str = "Open-Meteo geocoding";

/// Open-Meteo forecast and geocoding APIs. Neither needs an API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    weather_url: String,
    geocoding_url: String,
    http: Client,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_WEATHER_URL, DEFAULT_GEOCODING_URL)
    }

    pub fn with_base_urls(weather_url: impl Into<String>, geocoding_url: impl Into<String>) -> Self {
        Self {
            weather_url: weather_url.into(),
            geocoding_url: geocoding_url.into(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        provider: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> LookupResult<T> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| LookupError::Network { provider, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| LookupError::Network { provider, source })?;

        if !status.is_success() {
            return Err(LookupError::Status { provider, status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body).map_err(|source| LookupError::Parse { provider, source })
    }
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResponse {
    // Absent or null when nothing matched.
    #[serde(default)]
    results: Option<Vec<CityMatch>>,
}

#[async_trait]
impl WeatherLookup for OpenMeteoClient {
    async fn fetch_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> LookupResult<CurrentConditions> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();
        debug!(%latitude, %longitude, "fetching current conditions");

        let parsed: OmForecastResponse = self
            .get_json(
                FORECAST,
                &self.weather_url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current", CURRENT_FIELDS),
                ],
            )
            .await?;

        debug!(weather_code = parsed.current.weather_code, "current conditions received");
        Ok(parsed.current)
    }

    async fn resolve_city(&self, name: &str) -> LookupResult<Option<CityMatch>> {
        debug!(query = name, "geocoding city");

        let parsed: OmGeocodingResponse =
            self.get_json(GEOCODING, &self.geocoding_url, &[("name", name)]).await?;

        let first = parsed.results.unwrap_or_default().into_iter().next();
        match &first {
            Some(m) => debug!(query = name, resolved = %m.name, "geocoder matched"),
            None => debug!(query = name, "geocoder returned no matches"),
        }

        Ok(first)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
