use std::fmt;

use skyglass_core::{SpeedUnit, TemperatureUnit};
use skyglass_weather::display::{
    condition_emoji, display_temperature, display_wind_speed, format_clock_time, CompassPoint,
};
use skyglass_weather::{MoonPhaseInfo, WeatherSnapshot};

pub const LOOKING_UP_LOCATION: &str = "📍 Looking up location...";
pub const LOADING_SAVED_LOCATION: &str = "📍 Loading saved location...";
pub const LOCATION_UNAVAILABLE: &str = "⚠️ Location Unavailable";
pub const PLEASE_WAIT: &str = "Please wait...";

/// Condition icon as served by the weather proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherIcon {
    pub url: String,
    pub alt: String,
}

/// The fixed set of display fields the dashboard is made of.
///
/// Fields hold ready-to-print text. Nothing here performs I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    temperature_unit: TemperatureUnit,
    speed_unit: SpeedUnit,
    pub icon: Option<WeatherIcon>,
    pub location: String,
    pub description: String,
    pub current_temp: String,
    pub temp_range: String,
    pub humidity: String,
    pub sunrise: String,
    pub sunset: String,
    pub moon_phase: String,
    pub wind: String,
    pub has_data: bool,
}

impl DashboardModel {
    pub fn new(temperature_unit: TemperatureUnit, speed_unit: SpeedUnit) -> Self {
        Self {
            temperature_unit,
            speed_unit,
            icon: None,
            location: String::new(),
            description: String::new(),
            current_temp: String::new(),
            temp_range: String::new(),
            humidity: String::new(),
            sunrise: String::new(),
            sunset: String::new(),
            moon_phase: String::new(),
            wind: String::new(),
            has_data: false,
        }
    }

    /// Fill every field from a snapshot and the lunar phase.
    ///
    /// Icon and sun times are only touched when the snapshot carries them.
    pub fn update_from_data(&mut self, data: &WeatherSnapshot, moon: &MoonPhaseInfo) {
        if let Some(icon) = data.condition().and_then(|c| c.icon.as_ref()) {
            self.icon = Some(WeatherIcon {
                url: icon.clone(),
                alt: data.description().to_string(),
            });
        }

        self.location = format!("📍 {}, {}", data.name, data.sys.country);

        let description = data.description();
        self.description = format!("{} {}", condition_emoji(description), description);

        if let Some(time) = data
            .sys
            .sunrise
            .and_then(|ts| format_clock_time(ts, data.timezone))
        {
            self.sunrise = format!("🌅 {}", time);
        }
        if let Some(time) = data
            .sys
            .sunset
            .and_then(|ts| format_clock_time(ts, data.timezone))
        {
            self.sunset = format!("🌇 {}", time);
        }

        let unit = self.temperature_unit;
        self.current_temp = format!("{}°", display_temperature(data.main.temp, unit));
        self.temp_range = format!(
            "H: {}° L: {}°",
            display_temperature(data.main.temp_max, unit),
            display_temperature(data.main.temp_min, unit)
        );
        self.humidity = format!("💧 {}%", data.main.humidity);
        self.moon_phase = format!("{} {}", moon.emoji(), moon.name());
        self.wind = format!(
            "💨 {} {} {}",
            display_wind_speed(data.wind.speed, self.speed_unit),
            self.speed_unit.label(),
            CompassPoint::from_degrees(data.wind.deg)
        );

        self.has_data = true;
    }

    /// Replace the location and description lines with a progress or failure notice.
    pub fn show_status(&mut self, location: &str, description: &str) {
        self.location = location.to_string();
        self.description = description.to_string();
    }
}

impl fmt::Display for DashboardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.location)?;
        writeln!(f, "{}", self.description)?;
        if !self.has_data {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{}   {}", self.current_temp, self.temp_range)?;
        writeln!(f, "{}   {}", self.humidity, self.wind)?;
        if !self.sunrise.is_empty() || !self.sunset.is_empty() {
            writeln!(f, "{}   {}", self.sunrise, self.sunset)?;
        }
        writeln!(f, "{}", self.moon_phase)?;
        if let Some(icon) = &self.icon {
            writeln!(f, "Icon: {} ({})", icon.url, icon.alt)?;
        }
        Ok(())
    }
}
