//! In-memory `WeatherLookup` used by the controller tests.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    error::{LookupError, LookupResult},
    model::{CityMatch, CurrentConditions},
    provider::WeatherLookup,
};

#[derive(Debug, Default)]
pub struct FakeLookup {
    codes: Vec<((f64, f64), i64)>,
    failing: Vec<(f64, f64)>,
    cities: HashMap<String, CityMatch>,
    failing_geocode: Vec<String>,
    geocode_delays: HashMap<String, Duration>,
    weather_calls: AtomicUsize,
    geocode_calls: AtomicUsize,
}

impl FakeLookup {
    pub fn conditions(code: i64) -> CurrentConditions {
        CurrentConditions {
            temperature_2m: 24.0,
            precipitation_probability: Some(15),
            weather_code: code,
            time: Some("2026-10-19T12:00".to_string()),
        }
    }

    pub fn with_conditions(mut self, latitude: f64, longitude: f64, code: i64) -> Self {
        self.codes.push(((latitude, longitude), code));
        self
    }

    pub fn failing_at(mut self, latitude: f64, longitude: f64) -> Self {
        self.failing.push((latitude, longitude));
        self
    }

    pub fn with_city(mut self, query: &str, name: &str, latitude: f64, longitude: f64) -> Self {
        self.cities.insert(
            query.to_string(),
            CityMatch {
                name: name.to_string(),
                country: Some("Testland".to_string()),
                latitude,
                longitude,
            },
        );
        self
    }

    pub fn failing_geocode(mut self, query: &str) -> Self {
        self.failing_geocode.push(query.to_string());
        self
    }

    pub fn delay_geocode(mut self, query: &str, delay: Duration) -> Self {
        self.geocode_delays.insert(query.to_string(), delay);
        self
    }

    pub fn weather_calls(&self) -> usize {
        self.weather_calls.load(Ordering::SeqCst)
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }

    fn server_error(provider: &'static str) -> LookupError {
        LookupError::Status {
            provider,
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }
    }
}

#[async_trait]
impl WeatherLookup for FakeLookup {
    async fn fetch_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> LookupResult<CurrentConditions> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if self.failing.contains(&(latitude, longitude)) {
            return Err(Self::server_error("fake forecast"));
        }

        let code = self
            .codes
            .iter()
            .find(|(at, _)| *at == (latitude, longitude))
            .map(|(_, code)| *code)
            .unwrap_or(0);

        Ok(Self::conditions(code))
    }

    async fn resolve_city(&self, name: &str) -> LookupResult<Option<CityMatch>> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.geocode_delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_geocode.iter().any(|q| q == name) {
            return Err(Self::server_error("fake geocoding"));
        }

        Ok(self.cities.get(name).cloned())
    }
}
