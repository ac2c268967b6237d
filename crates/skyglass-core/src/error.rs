//! Centralized error types for Skyglass.
//!
//! Every failure that can end a dashboard load lands in [`AppError`]. The
//! `Display` text keeps the technical detail for the log; `user_message()` is
//! what gets printed under the dashboard.

use thiserror::Error;

/// Anything that can stop a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "Could not read or write Skyglass files.",
            AppError::Other(_) => "Something went wrong. Run with --verbose for details.",
        }
    }
}

/// Transport failures shared by the weather and geocoding clients.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Could not reach the server. Check your internet connection."
            }
            NetworkError::Timeout => "The server took too long to answer. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is having problems right now. Please try again later."
            }
            NetworkError::ServerError { .. } => "The server rejected the request.",
            NetworkError::InvalidResponse(_) => {
                "The server sent a reply Skyglass could not read."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Configuration file access failed: {0}")]
    Io(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "config.toml has invalid values. Run with --verbose for details.",
            ConfigError::ParseError(_) => "config.toml could not be read. Fix or delete it to restore defaults.",
            ConfigError::Io(_) => {
                "Could not read or write the config file. Check its location and permissions."
            }
        }
    }
}

/// Location resolution errors, covering both the platform location service
/// and place-name lookups.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location services are not supported on this system")]
    Unsupported,

    #[error("Location access denied by user")]
    PermissionDenied,

    #[error("Location information unavailable")]
    Unavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Unknown location error: {0}")]
    Unknown(String),

    #[error("Please enter a city name")]
    EmptyPlaceName,

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Geocoding failed: {0}")]
    LookupFailed(String),

    #[error("Location entry cancelled")]
    Cancelled,
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Unsupported => {
                "Location services are not supported here. Please enter your location manually."
            }
            LocationError::PermissionDenied => {
                "Location permission denied. Please enter your location manually."
            }
            LocationError::Unavailable => {
                "Location service is unavailable. Please enter your location manually."
            }
            LocationError::Timeout => {
                "Location request timed out. Please enter your location manually."
            }
            LocationError::Unknown(_) => {
                "Unknown error occurred. Please enter your location manually."
            }
            LocationError::EmptyPlaceName => "Please enter a city name",
            LocationError::PlaceNotFound(_) => {
                "City not found. Please try again with a different name."
            }
            LocationError::LookupFailed(_) => "Location lookup failed. Please try again.",
            LocationError::Cancelled => "No location selected.",
        }
    }
}

/// Weather proxy failures.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP error! status: {status}")]
    RequestFailed { status: u16 },

    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::RequestFailed { status } if *status >= 500 => {
                "Weather service unavailable. Please try again later."
            }
            WeatherError::RequestFailed { .. } => "Weather request failed. Please try again.",
            WeatherError::InvalidResponse(_) => {
                "Received unexpected weather data. Please try again."
            }
        }
    }
}

/// Classify a reqwest failure.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
