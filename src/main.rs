use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skyglass_core::{AppError, Config};
use skyglass_ui::{DashboardError, DashboardModel, LocationService, TerminalPrompt, WeatherService};
use skyglass_weather::{
    LocationRequest, LocationResolver, LocationStore, NominatimGeocoder, StoreError,
    SystemLocator, WeatherProvider,
};

#[derive(Parser, Debug)]
#[command(name = "skyglass")]
#[command(about = "Current weather and moon phase for where you are", version)]
struct Cli {
    /// Look up this place instead of detecting the location (and remember it)
    #[arg(long, value_name = "NAME")]
    city: Option<String>,

    /// Forget the saved location before resolving
    #[arg(long)]
    forget_location: bool,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    skyglass_core::init(cli.verbose)?;

    if let Err(e) = run(cli).await {
        eprintln!("{}", e.user_message());
        return Err(e.into());
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load_validated(cli.config.as_deref())?;
    tracing::debug!("Config directory: {}", config.config_dir.display());

    let store = LocationStore::new(config.saved_location_path());
    let geocoder = NominatimGeocoder::from_config(&config.geocoding)
        .context("Failed to create geocoding client")?;
    let resolver = LocationResolver::new(store, SystemLocator::new(), geocoder)
        .with_request(LocationRequest::from(&config.location));
    let locations = LocationService::new(resolver);
    let weather = WeatherService::new(
        WeatherProvider::from_config(&config.weather)
            .context("Failed to create weather client")?,
    );

    if cli.forget_location {
        locations.forget().map_err(forget_failed)?;
        tracing::info!("Saved location cleared");
    }

    let mut model = DashboardModel::new(config.weather.temperature_unit, config.weather.speed_unit);
    let mut prompt = TerminalPrompt::stdio();

    let result = match locations
        .resolve(&mut model, &mut prompt, cli.city.as_deref())
        .await
    {
        Ok(resolved) => weather.load(&mut model, &resolved.coordinates).await,
        Err(e) => Err(e),
    };

    print!("{}", model);

    match result {
        Ok(()) => Ok(()),
        Err(DashboardError::Cancelled) => {
            eprintln!("{}", AppError::from(DashboardError::Cancelled).user_message());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn forget_failed(e: StoreError) -> AppError {
    match e {
        StoreError::Io(e) => AppError::Io(e),
        other => AppError::Other(anyhow::Error::new(other).context("Failed to forget saved location")),
    }
}
