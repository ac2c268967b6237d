//! Forward geocoding: convert a typed place name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use crate::types::{Coordinates, GeocodeError, GeocodedPlace};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use skyglass_core::GeocodingConfig;

/// Place-name lookup.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for `place`, or `GeocodeError::NotFound` if there is none.
    async fn search(&self, place: &str) -> Result<GeocodedPlace, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// `user_agent` identifies this client; Nominatim rejects anonymous requests.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, GeocodeError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        Self::new(config.api_url.clone(), &config.user_agent)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[tracing::instrument(skip(self), level = "info")]
    async fn search(&self, place: &str) -> Result<GeocodedPlace, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Geocode returned status {}", response.status());
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let results: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Parse(e.to_string()))?;

        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(place.to_string()))?;

        let coordinates = Coordinates::new(
            parse_coordinate(&first.lat)?,
            parse_coordinate(&first.lon)?,
        );
        if !coordinates.is_valid() {
            return Err(GeocodeError::Parse(format!(
                "coordinates out of range: {}, {}",
                first.lat, first.lon
            )));
        }

        tracing::info!("Geocoded location: {}", first.display_name);
        Ok(GeocodedPlace {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            display_name: first.display_name,
        })
    }
}

fn parse_coordinate(value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| GeocodeError::Parse(format!("bad coordinate {:?}: {}", value, e)))
}
