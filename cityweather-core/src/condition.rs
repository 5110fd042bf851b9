//! Coarse weather categories derived from WMO weather codes.
//!
//! The bands are deliberately lossy: every code up to and including a band's
//! upper bound falls in that band, checked in ascending order.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    Clear,
    MainlyClear,
    Fog,
    Drizzle,
    Rain,
    FreezingRain,
    Snow,
    Convective,
    Thunderstorm,
    Unknown,
}

/// Upper bounds (inclusive) of each band after the exact-zero case.
const BANDS: &[(i64, WeatherCategory)] = &[
    (3, WeatherCategory::MainlyClear),
    (45, WeatherCategory::Fog),
    (51, WeatherCategory::Drizzle),
    (63, WeatherCategory::Rain),
    (67, WeatherCategory::FreezingRain),
    (71, WeatherCategory::Snow),
    (82, WeatherCategory::Convective),
    (95, WeatherCategory::Thunderstorm),
];

impl WeatherCategory {
    pub fn from_code(code: i64) -> Self {
        if code == 0 {
            return Self::Clear;
        }
        // Negative codes would otherwise land in the first band.
        if code < 0 {
            return Self::Unknown;
        }

        BANDS
            .iter()
            .find(|(upper, _)| code <= *upper)
            .map(|(_, category)| *category)
            .unwrap_or(Self::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::MainlyClear => "Mainly Clear",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing Rain",
            Self::Snow => "Snow",
            Self::Convective => "Convective",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable label for a weather code.
pub fn classify(code: i64) -> &'static str {
    WeatherCategory::from_code(code).label()
}
