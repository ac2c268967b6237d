//! One-shot dashboard load: current conditions plus tonight's moon.

use chrono::{DateTime, Utc};
use skyglass_weather::{
    current_moon_phase, moon_phase_at, Coordinates, WeatherProvider, WeatherSnapshot,
};

use super::DashboardError;
use crate::models::DashboardModel;

pub struct WeatherService {
    provider: WeatherProvider,
}

impl WeatherService {
    pub fn new(provider: WeatherProvider) -> Self {
        Self { provider }
    }

    pub async fn load(
        &self,
        model: &mut DashboardModel,
        coordinates: &Coordinates,
    ) -> Result<(), DashboardError> {
        let snapshot = self.fetch(coordinates).await?;
        model.update_from_data(&snapshot, &current_moon_phase());
        tracing::info!("Dashboard updated for {}", snapshot.name);
        Ok(())
    }

    /// Fetch conditions and render them with the moon phase for `now`.
    ///
    /// On failure the model keeps whatever it showed before.
    pub async fn load_at(
        &self,
        model: &mut DashboardModel,
        coordinates: &Coordinates,
        now: DateTime<Utc>,
    ) -> Result<(), DashboardError> {
        let snapshot = self.fetch(coordinates).await?;
        model.update_from_data(&snapshot, &moon_phase_at(now));
        tracing::info!("Dashboard updated for {}", snapshot.name);
        Ok(())
    }

    async fn fetch(&self, coordinates: &Coordinates) -> Result<WeatherSnapshot, DashboardError> {
        self.provider.fetch_current(coordinates).await.map_err(|e| {
            tracing::error!("Error fetching weather data: {}", e);
            e.into()
        })
    }
}
