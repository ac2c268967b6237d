//! Picks the coordinates for this run.
//!
//! Order: saved preference, then the platform location service. When the
//! service fails the caller asks the user for a place name and passes it to
//! [`LocationResolver::resolve_place`].

use crate::geocode::Geocoder;
use crate::location::{LocationRequest, Locator};
use crate::preference::LocationStore;
use crate::types::{
    GeocodeError, LocationError, LocationSource, ResolvedLocation, SavedLocation, StoreError,
};

pub struct LocationResolver<L, G> {
    store: LocationStore,
    locator: L,
    geocoder: G,
    request: LocationRequest,
}

impl<L: Locator, G: Geocoder> LocationResolver<L, G> {
    pub fn new(store: LocationStore, locator: L, geocoder: G) -> Self {
        Self {
            store,
            locator,
            geocoder,
            request: LocationRequest::default(),
        }
    }

    pub fn with_request(mut self, request: LocationRequest) -> Self {
        self.request = request;
        self
    }

    /// Saved preference if there is a usable one, otherwise ask the platform
    /// location service once.
    pub async fn resolve(&self) -> Result<ResolvedLocation, LocationError> {
        if let Some(saved) = self.store.load() {
            tracing::info!("Using saved location: {}", saved.name);
            return Ok(ResolvedLocation {
                coordinates: saved.coordinates(),
                name: Some(saved.name),
                source: LocationSource::Saved,
            });
        }

        match self.locator.locate(&self.request).await {
            Ok(coordinates) => Ok(ResolvedLocation {
                coordinates,
                name: None,
                source: LocationSource::Service,
            }),
            Err(e) => {
                tracing::warn!("Failed to get current location: {}", e);
                Err(e)
            }
        }
    }

    /// Look up a place name typed by the user and remember it for next time.
    ///
    /// The raw input (trimmed) is what gets saved, not the geocoder's display name.
    pub async fn resolve_place(&self, input: &str) -> Result<ResolvedLocation, GeocodeError> {
        let place = input.trim();
        if place.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        tracing::info!("Geocoding city: {}", place);
        let found = self.geocoder.search(place).await?;

        let saved = SavedLocation {
            latitude: found.latitude,
            longitude: found.longitude,
            name: place.to_string(),
        };
        if let Err(e) = self.store.save(&saved) {
            tracing::warn!("Could not remember location {:?}: {}", place, e);
        }

        Ok(ResolvedLocation {
            coordinates: saved.coordinates(),
            name: Some(found.display_name),
            source: LocationSource::Geocoded,
        })
    }

    /// Drop the saved preference so the next resolution asks the platform again.
    pub fn forget(&self) -> Result<(), StoreError> {
        self.store.clear()
    }
}
