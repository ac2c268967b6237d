//! Presentation layer for Skyglass: the dashboard model, the interactive
//! location prompt, and the services that drive a single dashboard load.

mod error_mapping;
pub mod models;
pub mod prompt;
pub mod services;

pub use models::{DashboardModel, WeatherIcon};
pub use prompt::{LocationPrompt, TerminalPrompt};
pub use services::{DashboardError, LocationService, WeatherService};
