//! Native weather client
//!
//! `reqwest` implementation of [`WeatherProvider`]. One GET per call, no
//! retries and no timeout beyond the transport's own.

use async_trait::async_trait;
use reqwest::Client;

use super::{interpret_response, WeatherEndpoint, WeatherError, WeatherProvider};
use crate::model::{Coordinates, WeatherReading};

/// OpenWeatherMap client for the CLI
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    endpoint: WeatherEndpoint,
}

impl WeatherClient {
    pub fn new(endpoint: WeatherEndpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &WeatherEndpoint {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl WeatherProvider for WeatherClient {
    async fn current(&self, at: Coordinates) -> Result<WeatherReading, WeatherError> {
        let url = self.endpoint.current_url(at);
        tracing::debug!(lat = at.latitude, lon = at.longitude, "Requesting current weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.without_url().to_string()))?;

        interpret_response(status, &body)
    }
}
