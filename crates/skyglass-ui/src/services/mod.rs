pub mod location_service;
pub mod weather_service;

pub use location_service::LocationService;
pub use weather_service::WeatherService;

use skyglass_weather::{GeocodeError, LocationError, WeatherError};

/// Anything that stops a dashboard load.
#[derive(Debug)]
pub enum DashboardError {
    Location(LocationError),
    Geocode(GeocodeError),
    Weather(WeatherError),
    /// The user closed the location prompt without picking a place.
    Cancelled,
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Location(e) => write!(f, "Location error: {}", e),
            DashboardError::Geocode(e) => write!(f, "Geocoding error: {}", e),
            DashboardError::Weather(e) => write!(f, "Weather error: {}", e),
            DashboardError::Cancelled => write!(f, "Location entry cancelled"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Location(e) => Some(e),
            DashboardError::Geocode(e) => Some(e),
            DashboardError::Weather(e) => Some(e),
            DashboardError::Cancelled => None,
        }
    }
}

impl From<LocationError> for DashboardError {
    fn from(e: LocationError) -> Self {
        DashboardError::Location(e)
    }
}

impl From<GeocodeError> for DashboardError {
    fn from(e: GeocodeError) -> Self {
        DashboardError::Geocode(e)
    }
}

impl From<WeatherError> for DashboardError {
    fn from(e: WeatherError) -> Self {
        DashboardError::Weather(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_error_display() {
        assert!(DashboardError::from(WeatherError::Status(500))
            .to_string()
            .contains("HTTP error! status: 500"));
        assert!(DashboardError::from(LocationError::Timeout)
            .to_string()
            .starts_with("Location"));
        assert!(DashboardError::Cancelled.to_string().contains("cancelled"));
    }
}
