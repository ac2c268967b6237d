//! Where to show the weather for: saved preference, the platform location
//! service, or a place name typed at the prompt.

use skyglass_core::AppError;
use skyglass_weather::{
    Geocoder, LocationResolver, Locator, ResolvedLocation, StoreError,
};

use super::DashboardError;
use crate::models::dashboard_model::{
    LOADING_SAVED_LOCATION, LOCATION_UNAVAILABLE, LOOKING_UP_LOCATION, PLEASE_WAIT,
};
use crate::models::DashboardModel;
use crate::prompt::LocationPrompt;

const ENTER_CITY: &str = "Please enter your city:";
const SERVICE_UNAVAILABLE: &str =
    "The location service is unavailable. Please enter your city:";
const EMPTY_CITY: &str = "Please enter a city name";

pub struct LocationService<L, G> {
    resolver: LocationResolver<L, G>,
}

impl<L: Locator, G: Geocoder> LocationService<L, G> {
    pub fn new(resolver: LocationResolver<L, G>) -> Self {
        Self { resolver }
    }

    /// Work out the location for this run, falling back to the prompt when
    /// the platform can't tell us.
    ///
    /// With `city` set, automatic resolution is skipped and that name is
    /// looked up (and remembered) instead.
    pub async fn resolve<P>(
        &self,
        model: &mut DashboardModel,
        prompt: &mut P,
        city: Option<&str>,
    ) -> Result<ResolvedLocation, DashboardError>
    where
        P: LocationPrompt + ?Sized,
    {
        if let Some(city) = city {
            return match self.lookup(model, city).await {
                Ok(resolved) => Ok(resolved),
                Err(error) => {
                    let message = format!("{}\n{}", error, ENTER_CITY);
                    self.prompt_for_location(model, prompt, &message).await
                }
            };
        }

        match self.resolver.resolve().await {
            Ok(resolved) => {
                if let Some(name) = &resolved.name {
                    model.show_status(LOADING_SAVED_LOCATION, name);
                }
                Ok(resolved)
            }
            Err(e) => {
                let reason = AppError::from(DashboardError::Location(e));
                model.show_status(LOCATION_UNAVAILABLE, reason.user_message());
                self.prompt_for_location(model, prompt, SERVICE_UNAVAILABLE)
                    .await
            }
        }
    }

    /// Ask for place names until one resolves or the user cancels.
    pub async fn prompt_for_location<P>(
        &self,
        model: &mut DashboardModel,
        prompt: &mut P,
        message: &str,
    ) -> Result<ResolvedLocation, DashboardError>
    where
        P: LocationPrompt + ?Sized,
    {
        let mut message = message.to_string();
        loop {
            let Some(input) = prompt.ask(&message) else {
                tracing::info!("Location entry cancelled");
                return Err(DashboardError::Cancelled);
            };

            if input.trim().is_empty() {
                message = format!("{}\n{}", EMPTY_CITY, ENTER_CITY);
                continue;
            }

            match self.lookup(model, &input).await {
                Ok(resolved) => return Ok(resolved),
                Err(error) => message = format!("{}\n{}", error, ENTER_CITY),
            }
        }
    }

    /// Drop the remembered place so the next run asks the platform again.
    pub fn forget(&self) -> Result<(), StoreError> {
        self.resolver.forget()
    }

    /// Geocode `place`, returning the message to show the user on failure.
    async fn lookup(
        &self,
        model: &mut DashboardModel,
        place: &str,
    ) -> Result<ResolvedLocation, &'static str> {
        let previous = (model.location.clone(), model.description.clone());
        model.show_status(LOOKING_UP_LOCATION, PLEASE_WAIT);

        match self.resolver.resolve_place(place).await {
            Ok(resolved) => Ok(resolved),
            Err(e) => {
                tracing::error!("Error processing location: {}", e);
                model.show_status(&previous.0, &previous.1);
                Err(AppError::from(DashboardError::Geocode(e)).user_message())
            }
        }
    }
}
