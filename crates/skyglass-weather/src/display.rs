//! Conversions from raw snapshot values to what the dashboard shows.

use chrono::DateTime;
use skyglass_core::{SpeedUnit, TemperatureUnit};

/// Checked in order; the first keyword found in the description wins.
const CONDITION_EMOJI: &[(&[&str], &str)] = &[
    (&["clear"], "☀️"),
    (&["cloud"], "☁️"),
    (&["rain"], "🌧️"),
    (&["drizzle"], "🌦️"),
    (&["thunderstorm"], "⛈️"),
    (&["snow"], "❄️"),
    (&["mist", "fog"], "🌫️"),
];

const DEFAULT_CONDITION_EMOJI: &str = "⛅";

/// Emoji decorating a textual weather condition such as "light rain".
pub fn condition_emoji(description: &str) -> &'static str {
    let description = description.to_lowercase();
    CONDITION_EMOJI
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| description.contains(k)))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_CONDITION_EMOJI)
}

/// Celsius reading in the display unit, rounded to a whole degree.
pub fn display_temperature(celsius: f64, unit: TemperatureUnit) -> i64 {
    unit.from_celsius(celsius).round() as i64
}

/// m/s reading in the display unit, rounded.
pub fn display_wind_speed(meters_per_second: f64, unit: SpeedUnit) -> i64 {
    unit.from_meters_per_second(meters_per_second).round() as i64
}

/// One of the eight principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

const COMPASS_POINTS: [CompassPoint; 8] = [
    CompassPoint::N,
    CompassPoint::NE,
    CompassPoint::E,
    CompassPoint::SE,
    CompassPoint::S,
    CompassPoint::SW,
    CompassPoint::W,
    CompassPoint::NW,
];

impl CompassPoint {
    /// Nearest compass point to a bearing; each point owns a 45° sector
    /// centred on it, so the boundaries sit at 22.5°, 67.5°, ...
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = (degrees.rem_euclid(360.0) / 45.0).round() as usize % 8;
        COMPASS_POINTS[sector]
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Arrow pointing where the wind is heading (downwind).
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::N => "↓",
            Self::NE => "↙",
            Self::E => "←",
            Self::SE => "↖",
            Self::S => "↑",
            Self::SW => "↗",
            Self::W => "→",
            Self::NW => "↘",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.arrow(), self.abbreviation())
    }
}

/// Wall-clock time at a location in 12-hour form, e.g. `6:05 AM`.
///
/// `utc_offset_secs` is added to the Unix timestamp before reading the clock.
pub fn format_clock_time(timestamp: i64, utc_offset_secs: i64) -> Option<String> {
    let local = DateTime::from_timestamp(timestamp.checked_add(utc_offset_secs)?, 0)?;
    Some(local.format("%-I:%M %p").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_emoji_keywords() {
        assert_eq!(condition_emoji("clear sky"), "☀️");
        assert_eq!(condition_emoji("broken clouds"), "☁️");
        assert_eq!(condition_emoji("moderate rain"), "🌧️");
        assert_eq!(condition_emoji("light intensity drizzle"), "🌦️");
        assert_eq!(condition_emoji("thunderstorm"), "⛈️");
        assert_eq!(condition_emoji("light snow"), "❄️");
        assert_eq!(condition_emoji("mist"), "🌫️");
        assert_eq!(condition_emoji("fog"), "🌫️");
        assert_eq!(condition_emoji("haze"), "⛅");
    }

    #[test]
    fn test_condition_emoji_is_case_insensitive() {
        assert_eq!(condition_emoji("Clear"), "☀️");
        assert_eq!(condition_emoji("FOG"), "🌫️");
    }

    #[test]
    fn test_condition_emoji_priority_order() {
        // "rain" is checked before "drizzle" and "thunderstorm"
        assert_eq!(condition_emoji("thunderstorm with light rain"), "🌧️");
        assert_eq!(condition_emoji("shower rain and drizzle"), "🌧️");
        assert_eq!(condition_emoji("thunderstorm with drizzle"), "🌦️");
        assert_eq!(condition_emoji("snow and clouds"), "☁️");
    }

    #[test]
    fn test_temperature_reference_values() {
        assert_eq!(display_temperature(0.0, TemperatureUnit::Fahrenheit), 32);
        assert_eq!(display_temperature(100.0, TemperatureUnit::Fahrenheit), 212);
        assert_eq!(display_temperature(-40.0, TemperatureUnit::Fahrenheit), -40);
        assert_eq!(display_temperature(21.6, TemperatureUnit::Celsius), 22);
    }

    #[test]
    fn test_temperature_rounds_to_nearest_degree() {
        // 11.2 °C = 52.16 °F
        assert_eq!(display_temperature(11.2, TemperatureUnit::Fahrenheit), 52);
        // 11.5 °C = 52.7 °F
        assert_eq!(display_temperature(11.5, TemperatureUnit::Fahrenheit), 53);
    }

    #[test]
    fn test_wind_speed_conversion() {
        assert_eq!(display_wind_speed(4.6, SpeedUnit::Mph), 10);
        assert_eq!(display_wind_speed(4.6, SpeedUnit::Kmh), 17);
        assert_eq!(display_wind_speed(4.6, SpeedUnit::Ms), 5);
        assert_eq!(display_wind_speed(0.0, SpeedUnit::Mph), 0);
    }

    #[test]
    fn test_compass_sectors() {
        assert_eq!(CompassPoint::from_degrees(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(22.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(23.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(44.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(46.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_degrees(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_degrees(200.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_degrees(315.0), CompassPoint::NW);
        assert_eq!(CompassPoint::from_degrees(338.0), CompassPoint::N);
    }

    #[test]
    fn test_compass_wraps() {
        assert_eq!(CompassPoint::from_degrees(360.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(405.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(-45.0), CompassPoint::NW);
    }

    #[test]
    fn test_compass_display() {
        assert_eq!(CompassPoint::N.to_string(), "↓ N");
        assert_eq!(CompassPoint::SW.to_string(), "↗ SW");
    }

    #[test]
    fn test_format_clock_time() {
        // 2023-11-14T22:13:20Z
        assert_eq!(format_clock_time(1_700_000_000, 0).as_deref(), Some("10:13 PM"));
        // Shifted by UTC-8
        assert_eq!(format_clock_time(1_700_000_000, -28_800).as_deref(), Some("2:13 PM"));
        // Midnight and noon render as 12
        assert_eq!(format_clock_time(0, 0).as_deref(), Some("12:00 AM"));
        assert_eq!(format_clock_time(12 * 3600 + 5 * 60, 0).as_deref(), Some("12:05 PM"));
    }

    #[test]
    fn test_format_clock_time_out_of_range() {
        assert_eq!(format_clock_time(i64::MAX, 1), None);
    }
}
