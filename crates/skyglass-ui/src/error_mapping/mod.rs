//! Maps dashboard errors to skyglass_core::AppError for consistent user-facing messages.
//! Domain errors are foreign to this crate on both sides, so each family gets
//! a small conversion function instead of a `From` impl.

mod location;
mod weather;

use crate::services::DashboardError;
use skyglass_core::{AppError, LocationError};

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Location(e) => location::from_locator(e),
            DashboardError::Geocode(e) => location::from_geocoder(e),
            DashboardError::Weather(e) => weather::from_provider(e),
            DashboardError::Cancelled => AppError::Location(LocationError::Cancelled),
        }
    }
}
