//! Integration tests for WeatherService using wiremock.

use chrono::{TimeZone, Utc};
use skyglass_core::{AppError, SpeedUnit, TemperatureUnit};
use skyglass_ui::{DashboardError, DashboardModel, WeatherService};
use skyglass_weather::{Coordinates, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_weather() -> serde_json::Value {
    serde_json::json!({
        "weather": [
            { "main": "Rain", "description": "light rain", "icon": "https://cdn.example.test/10d.png" }
        ],
        "main": { "temp": 0.0, "feels_like": -3.2, "temp_min": -1.0, "temp_max": 2.0, "humidity": 90 },
        "wind": { "speed": 5.0, "deg": 180 },
        "sys": { "country": "CA", "sunrise": 1_700_000_000, "sunset": 1_700_030_000 },
        "timezone": 0,
        "name": "Montreal"
    })
}

fn service(server: &MockServer) -> WeatherService {
    WeatherService::new(WeatherProvider::new(format!("{}/api/current", server.uri())).unwrap())
}

fn montreal() -> Coordinates {
    Coordinates::new(45.5, -73.57)
}

#[tokio::test]
async fn test_load_renders_snapshot_and_moon() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/current"))
        .and(query_param("lat", "45.5"))
        .and(query_param("lon", "-73.57"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut model = DashboardModel::new(TemperatureUnit::Fahrenheit, SpeedUnit::Mph);
    // Reference new moon
    let now = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();

    service(&mock_server)
        .load_at(&mut model, &montreal(), now)
        .await
        .unwrap();

    assert!(model.has_data);
    assert_eq!(model.location, "📍 Montreal, CA");
    assert_eq!(model.description, "🌧️ light rain");
    assert_eq!(model.current_temp, "32°");
    assert_eq!(model.temp_range, "H: 36° L: 30°");
    assert_eq!(model.humidity, "💧 90%");
    assert_eq!(model.wind, "💨 11 mph ↑ S");
    assert_eq!(model.sunrise, "🌅 10:13 PM");
    assert_eq!(model.moon_phase, "🌑 New Moon");
}

#[tokio::test]
async fn test_server_error_leaves_model_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/current"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut model = DashboardModel::new(TemperatureUnit::Fahrenheit, SpeedUnit::Mph);
    model.show_status("📍 Loading saved location...", "X");
    let before = model.clone();

    let err = service(&mock_server)
        .load(&mut model, &montreal())
        .await
        .unwrap_err();

    assert_eq!(model, before);
    assert!(matches!(err, DashboardError::Weather(_)));
    assert_eq!(
        AppError::from(err).user_message(),
        "Weather service unavailable. Please try again later."
    );
}

#[tokio::test]
async fn test_malformed_body_leaves_model_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let mut model = DashboardModel::new(TemperatureUnit::Celsius, SpeedUnit::Ms);
    let before = model.clone();

    let err = service(&mock_server)
        .load(&mut model, &montreal())
        .await
        .unwrap_err();

    assert_eq!(model, before);
    assert!(matches!(
        AppError::from(err),
        AppError::Weather(skyglass_core::WeatherError::InvalidResponse(_))
    ));
}
