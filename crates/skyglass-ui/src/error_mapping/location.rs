use skyglass_core::{AppError, LocationError, ReqwestErrorExt};
use skyglass_weather::{GeocodeError, LocationError as LocatorError};

pub(super) fn from_locator(e: LocatorError) -> AppError {
    AppError::Location(match e {
        LocatorError::Unsupported => LocationError::Unsupported,
        LocatorError::PermissionDenied => LocationError::PermissionDenied,
        LocatorError::Unavailable(_) => LocationError::Unavailable,
        LocatorError::Timeout => LocationError::Timeout,
        LocatorError::Other(s) => LocationError::Unknown(s),
    })
}

pub(super) fn from_geocoder(e: GeocodeError) -> AppError {
    match e {
        GeocodeError::EmptyQuery => AppError::Location(LocationError::EmptyPlaceName),
        GeocodeError::NotFound(place) => AppError::Location(LocationError::PlaceNotFound(place)),
        GeocodeError::Status(status) => {
            AppError::Location(LocationError::LookupFailed(format!("HTTP {}", status)))
        }
        GeocodeError::Network(e) => AppError::Network(e.into_network_error()),
        GeocodeError::Parse(s) => AppError::Location(LocationError::LookupFailed(s)),
    }
}
