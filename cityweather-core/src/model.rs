use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::condition::WeatherCategory;

/// A named coordinate the board looks weather up for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude }
    }
}

/// Cities shown on the board when the config does not list its own.
pub fn default_cities() -> Vec<City> {
    vec![
        City::new("Delhi", 28.6139, 77.209),
        City::new("New York", 40.7128, -74.006),
        City::new("London", 51.5074, -0.1278),
        City::new("Tokyo", 35.6895, 139.6917),
        City::new("Sydney", -33.8688, 151.2093),
    ]
}

/// The provider's `current` block, fields named as the provider names them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2 m, °C.
    pub temperature_2m: f64,
    /// Percent, 0-100. Some models report null.
    #[serde(default)]
    pub precipitation_probability: Option<u8>,
    /// WMO weather code.
    pub weather_code: i64,
    /// Provider local time, e.g. "2026-10-19T14:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl CurrentConditions {
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::from_code(self.weather_code)
    }

    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        let time = self.time.as_deref()?;
        NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }
}

/// First candidate returned by the geocoder for a free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMatch {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}
