//! Lookup service against a mocked Open-Meteo endpoint.

use std::time::Duration;

use chrono::Utc;
use weather_core::{
    Condition, Config, FailureKind, Icon, OpenMeteoProvider, WeatherLookupService, WeatherReading,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config(server_uri: &str) -> Config {
    let mut cfg = Config::default();
    cfg.upstream.endpoint = format!("{server_uri}/v1/forecast");
    cfg
}

fn service_with_timeout(server_uri: &str, timeout: Duration) -> WeatherLookupService {
    let cfg = test_config(server_uri);
    WeatherLookupService::new(
        Box::new(OpenMeteoProvider::from_config(&cfg)),
        cfg.location.name.clone(),
        timeout,
    )
}

fn forecast_body(temperature: f64, code: i64, wind: f64) -> serde_json::Value {
    serde_json::json!({
        "latitude": 13.7,
        "longitude": -89.2,
        "timezone": "America/El_Salvador",
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C",
            "weather_code": "wmo code",
            "wind_speed_10m": "km/h"
        },
        "current": {
            "time": "2026-10-19T10:00",
            "interval": 900,
            "temperature_2m": temperature,
            "weather_code": code,
            "wind_speed_10m": wind
        }
    })
}

fn assert_fallback(reading: &WeatherReading) {
    assert_eq!(reading.temperature, 28);
    assert_eq!(reading.condition, Condition::PartlyCloudy);
    assert_eq!(reading.icon, Icon::Sun);
    assert_eq!(reading.wind_speed, 10);
    assert_eq!(reading.location, "San Salvador");
}

// =============================================================================
// Success Path
// =============================================================================

#[tokio::test]
async fn sends_fixed_query_and_normalizes_reading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "13.6929"))
        .and(query_param("longitude", "-89.2182"))
        .and(query_param("current", "temperature_2m,weather_code,wind_speed_10m"))
        .and(query_param("timezone", "America/El_Salvador"))
        .and(header("user-agent", "Portfolio-Weather-Widget/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(27.6, 2, 9.4)))
        .expect(1)
        .mount(&server)
        .await;

    let started = Utc::now();
    let svc = WeatherLookupService::from_config(&test_config(&server.uri()));
    let reading = svc.get_current().await;

    assert_eq!(reading.temperature, 28);
    assert_eq!(reading.condition, Condition::PartlyCloudy);
    assert_eq!(reading.icon, Icon::Cloud);
    assert_eq!(reading.wind_speed, 9);
    assert_eq!(reading.location, "San Salvador");
    assert!(reading.last_updated >= started);
}

#[tokio::test]
async fn thunderstorm_code_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(23.2, 97, 18.0)))
        .mount(&server)
        .await;

    let svc = WeatherLookupService::from_config(&test_config(&server.uri()));
    let reading = svc.try_current().await.expect("well-formed response");

    assert_eq!(reading.condition, Condition::Thunderstorm);
    assert_eq!(reading.icon, Icon::CloudRain);
    assert_eq!(reading.temperature, 23);
    assert_eq!(reading.wind_speed, 18);
}

// =============================================================================
// Failure Paths
// =============================================================================

#[tokio::test]
async fn slow_upstream_times_out_to_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body(31.0, 0, 4.0))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let svc = service_with_timeout(&server.uri(), Duration::from_millis(200));

    let err = svc.try_current().await.unwrap_err();
    assert!(err.is_timeout());

    let started = Utc::now();
    let reading = svc.get_current().await;
    assert_fallback(&reading);
    assert!(reading.last_updated >= started);
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let svc = WeatherLookupService::from_config(&test_config(&server.uri()));

    let err = svc.try_current().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
    assert!(err.to_string().contains("500"));

    assert_fallback(&svc.get_current().await);
}

#[tokio::test]
async fn malformed_json_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let svc = WeatherLookupService::from_config(&test_config(&server.uri()));

    assert_eq!(svc.try_current().await.unwrap_err().kind(), FailureKind::Validation);
    assert_fallback(&svc.get_current().await);
}

#[tokio::test]
async fn missing_fields_fall_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": { "temperature_2m": 27.6, "wind_speed_10m": 9.4 },
            "current_units": { "temperature_2m": "°C", "wind_speed_10m": "km/h" }
        })))
        .mount(&server)
        .await;

    let svc = WeatherLookupService::from_config(&test_config(&server.uri()));

    assert_eq!(svc.try_current().await.unwrap_err().kind(), FailureKind::Validation);
    assert_fallback(&svc.get_current().await);
}

#[tokio::test]
async fn unreachable_upstream_falls_back() {
    // Nothing listens on port 1.
    let svc = WeatherLookupService::from_config(&test_config("http://127.0.0.1:1"));

    assert_eq!(svc.try_current().await.unwrap_err().kind(), FailureKind::Transport);
    assert_fallback(&svc.get_current().await);
}
