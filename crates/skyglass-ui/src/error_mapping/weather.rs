use skyglass_core::{AppError, ReqwestErrorExt, WeatherError};
use skyglass_weather::WeatherError as ProviderError;

pub(super) fn from_provider(e: ProviderError) -> AppError {
    match e {
        ProviderError::Status(status) => AppError::Weather(WeatherError::RequestFailed { status }),
        ProviderError::Network(e) => AppError::Network(e.into_network_error()),
        ProviderError::Parse(s) => AppError::Weather(WeatherError::InvalidResponse(s)),
    }
}
