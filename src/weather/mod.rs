//! Weather Provider
//!
//! Current-conditions lookup against the OpenWeatherMap `weather` endpoint.
//! URL building and response interpretation live here so the browser
//! (`gloo-net`) and native (`reqwest`) clients share them.

#[cfg(feature = "native")]
mod client;

#[cfg(feature = "native")]
pub use client::WeatherClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Coordinates, WeatherReading};

/// Default OpenWeatherMap API base
pub const DEFAULT_WEATHER_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Unit system requested from the provider. Temperatures are shown in °C.
pub const METRIC_UNITS: &str = "metric";

/// Anything that can report current conditions for a position
#[async_trait(?Send)]
pub trait WeatherProvider {
    async fn current(&self, at: Coordinates) -> Result<WeatherReading, WeatherError>;
}

/// Where and how to call the weather API
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherEndpoint {
    pub base_url: String,
    pub api_key: String,
    pub units: String,
}

impl Default for WeatherEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE.to_string(),
            api_key: String::new(),
            units: METRIC_UNITS.to_string(),
        }
    }
}

impl WeatherEndpoint {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the current-conditions request for a position
    pub fn current_url(&self, at: Coordinates) -> String {
        format!(
            "{}/weather?lat={}&lon={}&units={}&appid={}",
            self.base_url.trim_end_matches('/'),
            at.latitude,
            at.longitude,
            urlencoding::encode(&self.units),
            urlencoding::encode(&self.api_key),
        )
    }
}

/// Turn an HTTP status and body into a reading
///
/// Any non-2xx status is an error, whatever the body says.
pub fn interpret_response(status: u16, body: &str) -> Result<WeatherReading, WeatherError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<OwmErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| body.trim().to_string());
        return Err(WeatherError::Http { status, message });
    }

    let response: OwmCurrentResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;

    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Parse("response has no weather conditions".to_string()))?;

    Ok(WeatherReading {
        temp: response.main.temp,
        condition: condition.main,
        description: condition.description,
        location: response.name.filter(|n| !n.is_empty()),
        observed_at: response.dt,
    })
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ============================================
// Errors
// ============================================

/// Errors from the weather call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("Weather API error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Weather request failed: {0}")]
    Network(String),

    #[error("Invalid weather response: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Text shown in the weather panel
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Http { status, .. } => {
                format!("Failed to fetch weather data (HTTP {})", status)
            }
            WeatherError::Network(_) => "Could not reach the weather service".to_string(),
            WeatherError::Parse(_) => "Weather data could not be read".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOUDY: &str =
        r#"{"main":{"temp":25.6},"weather":[{"main":"Clouds","description":"overcast"}]}"#;

    #[test]
    fn test_current_url() {
        let endpoint = WeatherEndpoint::new("abc123");
        assert_eq!(
            endpoint.current_url(Coordinates::new(-33.5, 22.25)),
            "https://api.openweathermap.org/data/2.5/weather?lat=-33.5&lon=22.25&units=metric&appid=abc123"
        );
    }

    #[test]
    fn test_current_url_trims_and_encodes() {
        let endpoint = WeatherEndpoint::new("a b&c").with_base_url("http://localhost:9000/");
        assert_eq!(
            endpoint.current_url(Coordinates::new(1.0, 2.0)),
            "http://localhost:9000/weather?lat=1&lon=2&units=metric&appid=a%20b%26c"
        );
    }

    #[test]
    fn test_interpret_success() {
        let reading = interpret_response(200, CLOUDY).unwrap();
        assert_eq!(reading.temp, 25.6);
        assert_eq!(reading.temperature_label(), "26°C");
        assert_eq!(reading.condition_label(), "Clouds (overcast)");
        assert_eq!(reading.location, None);
    }

    #[test]
    fn test_interpret_full_body() {
        let body = r#"{
            "coord": {"lon": 22.25, "lat": -33.5},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 18.2, "feels_like": 17.0, "humidity": 40},
            "dt": 1700000000,
            "name": "Oudtshoorn"
        }"#;
        let reading = interpret_response(200, body).unwrap();
        assert_eq!(reading.condition, "Clear");
        assert_eq!(reading.location.as_deref(), Some("Oudtshoorn"));
        assert_eq!(reading.observed_at, Some(1_700_000_000));
    }

    #[test]
    fn test_interpret_unauthorized() {
        let body = r#"{"cod":401,"message":"Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."}"#;
        let err = interpret_response(401, body).unwrap_err();
        assert!(matches!(err, WeatherError::Http { status: 401, .. }));
        assert!(err.to_string().starts_with("Weather API error 401: Invalid API key"));
        assert_eq!(err.user_message(), "Failed to fetch weather data (HTTP 401)");
    }

    #[test]
    fn test_interpret_error_status_with_plain_body() {
        let err = interpret_response(502, " Bad Gateway \n").unwrap_err();
        assert_eq!(
            err,
            WeatherError::Http {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_error_status_ignores_valid_body() {
        let err = interpret_response(500, CLOUDY).unwrap_err();
        assert!(matches!(err, WeatherError::Http { status: 500, .. }));
    }

    #[test]
    fn test_interpret_malformed() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
        assert_eq!(err.user_message(), "Weather data could not be read");

        let err = interpret_response(200, r#"{"main":{"temp":1.0},"weather":[]}"#).unwrap_err();
        assert_eq!(
            err,
            WeatherError::Parse("response has no weather conditions".to_string())
        );
    }
}
