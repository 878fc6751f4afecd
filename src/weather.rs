//! Weather client for OpenWeatherMap
//!
//! One GET per lookup, mapped into a flat [`WeatherSnapshot`]. Any transport
//! error or non-success status is returned as an error; callers degrade to
//! "weather unavailable" rather than failing the surrounding action. No
//! retries are performed.

use crate::config::WeatherConfig;
use crate::models::{Location, WeatherSnapshot};
use crate::{Result, WayfarerError};
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Weather API client for OpenWeatherMap
pub struct WeatherClient {
    /// HTTP client
    client: Client,
    /// API key for OpenWeatherMap
    api_key: String,
    /// Base URL for the weather API
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client.
    ///
    /// Fails with a configuration error when no weather API key is set; the
    /// rest of the application keeps working without weather.
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| {
                WayfarerError::config(
                    "Weather API key is not configured. Set WAYFARER_WEATHER__API_KEY or weather.api_key.",
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("Wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WayfarerError::weather(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
        })
    }

    /// Get the current weather for a location
    #[instrument(skip(self), fields(location = %location.name))]
    pub async fn current_weather(&self, location: &Location) -> Result<WeatherSnapshot> {
        info!(
            "Getting current weather for {} at {}",
            location.name,
            location.format_coordinates()
        );

        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", "kr".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WayfarerError::weather(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Weather API returned {status}: {body}");
            return Err(WayfarerError::weather(format!(
                "Weather API returned status {status}"
            )));
        }

        let payload: owm::CurrentWeatherResponse = response
            .json()
            .await
            .context("Failed to parse OpenWeatherMap response")
            .map_err(|e| {
                debug!("Weather parse failure: {e:#}");
                WayfarerError::weather("Invalid weather data received from OpenWeatherMap")
            })?;

        let snapshot = WeatherSnapshot::from(payload);
        info!(
            "Current weather for {}: {}",
            location.name, snapshot.description
        );
        Ok(snapshot)
    }
}

/// OpenWeatherMap API response structures and conversion utilities
mod owm {
    use crate::models::WeatherSnapshot;
    use chrono::Utc;
    use serde::Deserialize;

    /// Current weather response from OpenWeatherMap `data/2.5/weather`
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub weather: Vec<Condition>,
        pub main: MainReadings,
        pub wind: Wind,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        pub temp: f64,
        pub feels_like: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    impl From<CurrentWeatherResponse> for WeatherSnapshot {
        fn from(response: CurrentWeatherResponse) -> Self {
            let description = response
                .weather
                .into_iter()
                .next()
                .map_or_else(|| "알 수 없음".to_string(), |c| c.description);

            WeatherSnapshot {
                description,
                temperature_c: response.main.temp,
                feels_like_c: response.main.feels_like,
                humidity_pct: response.main.humidity,
                wind_speed_ms: response.wind.speed,
                observed_at: Utc::now(),
            }
        }
    }
}

/// Fetch weather for a location, degrading to `None` on any failure.
///
/// The weather block is optional everywhere downstream, so a failed lookup
/// is logged as a warning and otherwise ignored.
pub async fn fetch_or_unavailable(
    client: Option<&WeatherClient>,
    location: &Location,
) -> Option<WeatherSnapshot> {
    let client = client?;
    match client.current_weather(location).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("Weather unavailable for {}: {}", location.name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::City;

    #[test]
    fn test_client_requires_api_key() {
        let config = WeatherConfig::default();
        let result = WeatherClient::new(&config);
        assert!(matches!(result, Err(WayfarerError::Config { .. })));
    }

    #[test]
    fn test_client_builds_with_key() {
        let config = WeatherConfig {
            api_key: Some("0123456789abcdef".to_string()),
            ..WeatherConfig::default()
        };
        assert!(WeatherClient::new(&config).is_ok());
    }

    #[test]
    fn test_owm_response_maps_to_snapshot() {
        let json = r#"{
            "weather": [{"id": 800, "main": "Clear", "description": "맑음", "icon": "01d"}],
            "main": {"temp": 21.3, "feels_like": 20.8, "temp_min": 19.0, "temp_max": 23.0, "pressure": 1013, "humidity": 45},
            "wind": {"speed": 2.4, "deg": 180}
        }"#;

        let response: super::owm::CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        let snapshot = WeatherSnapshot::from(response);
        assert_eq!(snapshot.description, "맑음");
        assert_eq!(snapshot.temperature_c, 21.3);
        assert_eq!(snapshot.feels_like_c, 20.8);
        assert_eq!(snapshot.humidity_pct, 45);
        assert_eq!(snapshot.wind_speed_ms, 2.4);
    }

    #[test]
    fn test_owm_response_without_conditions() {
        let json = r#"{
            "weather": [],
            "main": {"temp": 10.0, "feels_like": 8.0, "humidity": 70},
            "wind": {"speed": 5.0}
        }"#;

        let response: super::owm::CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        let snapshot = WeatherSnapshot::from(response);
        assert_eq!(snapshot.description, "알 수 없음");
    }

    #[tokio::test]
    async fn test_fetch_without_client_is_unavailable() {
        let location = City::Seoul.location();
        assert!(fetch_or_unavailable(None, &location).await.is_none());
    }
}
