//! Provider client + normalization pipeline against a mock HTTP server.

use mockito::Matcher;

use skycast_core::alerts::{AlertSeverity, HazardType};
use skycast_core::error::ProviderError;
use skycast_core::{normalize_payload, CanonicalCondition, ContinuityFiller, WeatherApiClient};

fn sample_body(days: usize) -> String {
    let forecastday: Vec<serde_json::Value> = (0..days)
        .map(|i| {
            serde_json::json!({
                "date": format!("2025-06-{:02}", 1 + i),
                "day": {
                    "maxtemp_c": 18.0 + i as f64,
                    "mintemp_c": 9.0,
                    "condition": { "text": "Patchy rain possible", "code": 1063 },
                    "daily_chance_of_rain": 70,
                    "uv": 3.0
                },
                "hour": (0..24).map(|h| serde_json::json!({
                    "time": format!("2025-06-{:02} {:02}:00", 1 + i, h),
                    "temp_c": 13.0,
                    "condition": { "text": "Overcast", "code": 1009 },
                    "chance_of_rain": 20
                })).collect::<Vec<_>>()
            })
        })
        .collect();

    serde_json::json!({
        "location": {
            "name": "Trondheim",
            "region": "Trøndelag",
            "country": "Norway",
            "localtime": "2025-06-01 09:15"
        },
        "current": {
            "temp_c": 11.0,
            "condition": { "text": "Overcast", "code": 1009 },
            "uv": 2.4,
            "humidity": 77,
            "wind_kph": 21.0,
            "air_quality": {
                "pm2_5": 6.2, "pm10": 10.8, "us-epa-index": 1
            }
        },
        "forecast": { "forecastday": forecastday },
        "alerts": {
            "alert": [{
                "headline": "Winter Storm Watch",
                "severity": "Minor",
                "desc": "Snow accumulating overnight",
                "expires": "2025-06-02T06:00:00"
            }]
        }
    })
    .to_string()
}

#[tokio::test]
async fn fetch_and_normalize_short_forecast() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/forecast.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Trondheim".into()),
            Matcher::UrlEncoded("days".into(), "7".into()),
            Matcher::UrlEncoded("aqi".into(), "yes".into()),
            Matcher::UrlEncoded("alerts".into(), "yes".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sample_body(3))
        .create_async()
        .await;

    let client = WeatherApiClient::new("test-key", server.url());
    let payload = client.fetch_forecast("Trondheim", 7).await.unwrap();
    mock.assert_async().await;

    let snapshot = normalize_payload(&payload, 7, &ContinuityFiller::with_seed(11)).unwrap();

    assert_eq!(snapshot.current.location, "Trondheim, Trøndelag");
    assert_eq!(snapshot.current.condition, CanonicalCondition::Cloudy);
    assert_eq!(snapshot.hourly.len(), 24);

    // Provider gave 3 days on this access tier; the window contract still
    // holds and the tail is synthetic.
    assert_eq!(snapshot.daily.len(), 7);
    assert!(snapshot.daily[..3].iter().all(|d| !d.synthetic));
    assert!(snapshot.daily[3..].iter().all(|d| d.synthetic));
    for pair in snapshot.daily.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
    }

    assert_eq!(snapshot.alerts.len(), 1);
    assert_eq!(snapshot.alerts[0].classification.hazard, HazardType::Snow);
    assert_eq!(
        snapshot.alerts[0].classification.severity,
        AlertSeverity::Minor
    );
}

#[tokio::test]
async fn non_success_status_maps_to_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/forecast.json")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("{\"error\":{\"message\":\"quota exceeded\"}}")
        .create_async()
        .await;

    let client = WeatherApiClient::new("bad-key", server.url());
    let err = client.fetch_forecast("Oslo", 7).await.unwrap_err();
    assert!(matches!(err, ProviderError::Status { status: 403 }));
}

#[tokio::test]
async fn undecodable_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/forecast.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = WeatherApiClient::new("k", server.url());
    let err = client.fetch_forecast("Oslo", 7).await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}
