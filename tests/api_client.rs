use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use thermodash_lib::api::ApiClient;
use thermodash_lib::models::{HvacState, TimeRange};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn temperatures_sends_range_hours_and_keeps_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/temperatures")
                .query_param("hours", "48");
            then.status(200).json_body(json!([
                {"id": 2, "timestamp": "2024-01-05T10:05:00", "temperature_c": 20.1, "hvac_state": "HEATING"},
                {"id": 1, "timestamp": "2024-01-05T10:00:00", "temperature_c": 19.8, "hvac_state": null},
                {"id": 3, "timestamp": "2024-01-05T10:10:00", "humidity": 40.0}
            ]));
        })
        .await;

    let readings = client(&server)
        .temperatures(TimeRange::FortyEightHours)
        .await
        .unwrap();

    mock.assert_async().await;
    let ids: Vec<_> = readings.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(2), Some(1), Some(3)]);
    assert_eq!(readings[0].state(), HvacState::Heating);
    assert_eq!(readings[1].state(), HvacState::Inactive);
    assert_eq!(readings[2].temperature_c, None);
}

#[tokio::test]
async fn current_reports_not_found_as_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/current");
            then.status(404).json_body(json!({"error": "No data available"}));
        })
        .await;

    let err = client(&server).current().await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("/api/current"), "{message}");
    assert!(message.contains("404"), "{message}");
}

#[tokio::test]
async fn statistics_tolerates_null_aggregates() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/statistics")
                .query_param("hours", "6");
            then.status(200).json_body(json!({
                "avg_temperature": null,
                "min_temperature": 18.2,
                "max_temperature": null,
                "avg_humidity": 41.0,
                "period_hours": 6
            }));
        })
        .await;

    let stats = client(&server).statistics(TimeRange::SixHours).await.unwrap();
    assert_eq!(stats.avg_temperature, None);
    assert_eq!(stats.min_temperature, Some(18.2));
    assert_eq!(stats.period_hours, Some(6));
}

#[tokio::test]
async fn invalid_json_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/temperatures");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let err = client(&server)
        .temperatures(TimeRange::SixHours)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid JSON"));
}

#[tokio::test]
async fn health_reports_service() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200)
                .json_body(json!({"status": "healthy", "service": "house-temp-tracker"}));
        })
        .await;

    let health = client(&server).health().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.service.as_deref(), Some("house-temp-tracker"));
}
