//! Weather domain for Skyglass
//!
//! Resolves where the user is (saved preference, platform location service or
//! a typed place name), fetches current conditions for that spot, and works
//! out the current lunar phase.

pub mod types;
pub mod display;
pub mod geocode;
pub mod location;
pub mod moon;
pub mod preference;
pub mod provider;
pub mod resolver;

#[cfg(target_os = "linux")]
mod geoclue;
#[cfg(windows)]
mod winrt;

pub use types::*;
pub use geocode::{Geocoder, NominatimGeocoder};
pub use location::{LocationRequest, Locator, SystemLocator};
pub use moon::{current_moon_phase, moon_phase_at, MoonPhase, MoonPhaseInfo};
pub use preference::LocationStore;
pub use provider::WeatherProvider;
pub use resolver::LocationResolver;
