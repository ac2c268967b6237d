use crate::types::{Coordinates, WeatherError, WeatherSnapshot};
use reqwest::Client;
use skyglass_core::WeatherConfig;
use std::sync::Arc;

/// Fetches current conditions. No retries and no timeout beyond the HTTP
/// client's own defaults.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        Self::new(config.api_url.clone())
    }

    /// Current conditions at `coordinates`.
    #[tracing::instrument(skip(self), level = "info")]
    pub async fn fetch_current(
        &self,
        coordinates: &Coordinates,
    ) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!("Fetching weather data from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("lat", coordinates.latitude), ("lon", coordinates.longitude)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let snapshot: WeatherSnapshot =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!(
            "Weather for {}: {} ({} °C)",
            snapshot.name,
            snapshot.description(),
            snapshot.main.temp
        );
        Ok(snapshot)
    }
}
