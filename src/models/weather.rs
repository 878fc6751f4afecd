//! Weather snapshot model and display methods

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time weather readout for a coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Human-readable description of weather conditions
    pub description: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Perceived temperature in Celsius
    pub feels_like_c: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
    /// Timestamp for this observation
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// First report line: conditions and temperatures
    #[must_use]
    pub fn format_conditions(&self) -> String {
        format!(
            "날씨: {}, 온도: {}°C, 체감: {}°C",
            self.description, self.temperature_c, self.feels_like_c
        )
    }

    /// Second report line: humidity and wind
    #[must_use]
    pub fn format_humidity_wind(&self) -> String {
        format!("습도: {}%, 풍속: {} m/s", self.humidity_pct, self.wind_speed_ms)
    }
}
