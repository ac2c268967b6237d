//! Platform location service.
//!
//! Linux talks to GeoClue2 over the system D-Bus, Windows uses the WinRT
//! geolocator. Everything else reports `LocationError::Unsupported`.

use crate::types::{Coordinates, LocationError};
use async_trait::async_trait;
use parking_lot::Mutex;
use skyglass_core::LocationConfig;
use std::future::Future;
use std::time::{Duration, Instant};

/// Options for a single position request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    /// Ask for the most precise fix the platform can give
    pub high_accuracy: bool,
    /// Give up after this long
    pub timeout: Duration,
    /// A previous fix at most this old may be returned instead
    pub maximum_age: Duration,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

impl From<&LocationConfig> for LocationRequest {
    fn from(config: &LocationConfig) -> Self {
        Self {
            high_accuracy: config.high_accuracy,
            timeout: config.timeout(),
            maximum_age: config.maximum_age(),
        }
    }
}

/// Source of the device's current position.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Resolve once; no retries.
    async fn locate(&self, request: &LocationRequest) -> Result<Coordinates, LocationError>;
}

/// The operating system's location service.
#[derive(Debug, Default)]
pub struct SystemLocator {
    last_fix: Mutex<Option<(Instant, Coordinates)>>,
}

impl SystemLocator {
    pub fn new() -> Self {
        Self::default()
    }

    fn cached_fix(&self, maximum_age: Duration) -> Option<Coordinates> {
        let last_fix = self.last_fix.lock();
        last_fix
            .as_ref()
            .filter(|(obtained_at, _)| obtained_at.elapsed() <= maximum_age)
            .map(|(_, coordinates)| *coordinates)
    }
}

#[async_trait]
impl Locator for SystemLocator {
    async fn locate(&self, request: &LocationRequest) -> Result<Coordinates, LocationError> {
        if let Some(coordinates) = self.cached_fix(request.maximum_age) {
            tracing::debug!("Reusing recent position fix");
            return Ok(coordinates);
        }

        tracing::info!("Getting your location...");
        let coordinates = within_timeout(request, platform_locate(request)).await?;

        tracing::info!(
            "Location found: {}, {} (accuracy {:?} m)",
            coordinates.latitude,
            coordinates.longitude,
            coordinates.accuracy
        );
        *self.last_fix.lock() = Some((Instant::now(), coordinates));
        Ok(coordinates)
    }
}

/// Wait for `fix`, giving up once the request timeout elapses.
async fn within_timeout<F>(request: &LocationRequest, fix: F) -> Result<Coordinates, LocationError>
where
    F: Future<Output = Result<Coordinates, LocationError>>,
{
    match tokio::time::timeout(request.timeout, fix).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    }
}

#[cfg(target_os = "linux")]
async fn platform_locate(request: &LocationRequest) -> Result<Coordinates, LocationError> {
    crate::geoclue::locate(request).await
}

#[cfg(windows)]
async fn platform_locate(request: &LocationRequest) -> Result<Coordinates, LocationError> {
    crate::winrt::locate(request).await
}

#[cfg(not(any(target_os = "linux", windows)))]
async fn platform_locate(_request: &LocationRequest) -> Result<Coordinates, LocationError> {
    Err(LocationError::Unsupported)
}
