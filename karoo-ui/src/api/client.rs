//! HTTP API Client
//!
//! Current-weather lookup with `gloo-net`. The response is handed to
//! `karoo::interpret_response` so the browser and the CLI read it the same way.

use async_trait::async_trait;
use gloo_net::http::Request;

use karoo::{interpret_response, Coordinates, WeatherEndpoint, WeatherError, WeatherProvider, WeatherReading};

/// Key baked in at build time (`KAROO_WEATHER_API_KEY=... trunk build`)
const EMBEDDED_API_KEY: &str = match option_env!("KAROO_WEATHER_API_KEY") {
    Some(key) => key,
    None => "",
};

const API_KEY_STORAGE: &str = "karoo_weather_api_key";
const API_URL_STORAGE: &str = "karoo_weather_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn stored(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

/// Endpoint with local-storage overrides applied
pub fn weather_endpoint() -> WeatherEndpoint {
    let mut endpoint = WeatherEndpoint::new(
        stored(API_KEY_STORAGE).unwrap_or_else(|| EMBEDDED_API_KEY.to_string()),
    );
    if let Some(url) = stored(API_URL_STORAGE) {
        endpoint = endpoint.with_base_url(url.trim_end_matches('/'));
    }
    endpoint
}

/// Weather provider backed by `fetch`
pub struct BrowserWeather {
    endpoint: WeatherEndpoint,
}

impl BrowserWeather {
    pub fn new(endpoint: WeatherEndpoint) -> Self {
        Self { endpoint }
    }
}

impl Default for BrowserWeather {
    fn default() -> Self {
        Self::new(weather_endpoint())
    }
}

#[async_trait(?Send)]
impl WeatherProvider for BrowserWeather {
    async fn current(&self, at: Coordinates) -> Result<WeatherReading, WeatherError> {
        let response = Request::get(&self.endpoint.current_url(at))
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}
