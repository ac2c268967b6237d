//! WinRT geolocator.

use crate::location::LocationRequest;
use crate::types::{Coordinates, LocationError};
use windows::Devices::Geolocation::{GeolocationAccessStatus, Geolocator, PositionAccuracy};
use windows::Foundation::TimeSpan;

// HRESULT_FROM_WIN32(ERROR_ACCESS_DENIED)
const E_ACCESSDENIED: i32 = 0x8007_0005_u32 as i32;
// HRESULT_FROM_WIN32(ERROR_TIMEOUT)
const E_TIMEOUT: i32 = 0x8007_05B4_u32 as i32;

impl From<windows::core::Error> for LocationError {
    fn from(err: windows::core::Error) -> Self {
        match err.code().0 {
            E_ACCESSDENIED => LocationError::PermissionDenied,
            E_TIMEOUT => LocationError::Timeout,
            _ => LocationError::Unavailable(err.message().to_string()),
        }
    }
}

pub(crate) async fn locate(request: &LocationRequest) -> Result<Coordinates, LocationError> {
    let request = *request;
    tokio::task::spawn_blocking(move || locate_blocking(&request))
        .await
        .map_err(|e| LocationError::Other(e.to_string()))?
}

fn locate_blocking(request: &LocationRequest) -> Result<Coordinates, LocationError> {
    let access = Geolocator::RequestAccessAsync()?.get()?;
    if access != GeolocationAccessStatus::Allowed {
        return Err(LocationError::PermissionDenied);
    }

    let geolocator = Geolocator::new()?;
    geolocator.SetDesiredAccuracy(if request.high_accuracy {
        PositionAccuracy::High
    } else {
        PositionAccuracy::Default
    })?;

    let position = geolocator
        .GetGeopositionAsyncWithAgeAndTimeout(
            TimeSpan::from(request.maximum_age),
            TimeSpan::from(request.timeout),
        )?
        .get()?;

    let coordinate = position.Coordinate()?;
    let point = coordinate.Point()?.Position()?;

    Ok(Coordinates {
        latitude: point.Latitude,
        longitude: point.Longitude,
        accuracy: coordinate.Accuracy().ok(),
    })
}
