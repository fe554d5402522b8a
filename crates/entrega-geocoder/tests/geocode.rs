//! Integration tests for `NominatimClient` using wiremock HTTP mocks.

use entrega_geocoder::{GeocoderError, NominatimClient};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url(base_url, 5, "entrega-test/0.1")
        .expect("client construction should not fail")
}

const QUERY: &str = "Rua Arcílio Federzoni, 971, Jardim Silva, Francisco Morato, SP, Brasil";

#[tokio::test]
async fn geocode_returns_first_match() {
    let server = MockServer::start().await;

    let body = json!([
        {
            "place_id": 1,
            "lat": "-23.4700",
            "lon": "-46.3400",
            "display_name": "Rua Arcílio Federzoni, Jardim Silva, Francisco Morato, SP, Brasil"
        },
        {
            "place_id": 2,
            "lat": "-10.0",
            "lon": "-50.0",
            "display_name": "somewhere else"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", QUERY))
        .and(query_param("format", "jsonv2"))
        .and(query_param("limit", "1"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let coords = client.geocode(QUERY).await.expect("should geocode");

    assert!((coords.latitude() - -23.47).abs() < 1e-9);
    assert!((coords.longitude() - -46.34).abs() < 1e-9);
    assert_eq!(
        coords.label(),
        Some("Rua Arcílio Federzoni, Jardim Silva, Francisco Morato, SP, Brasil")
    );
}

#[tokio::test]
async fn geocode_empty_result_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .geocode("Rua Inexistente, 000, Brasil")
        .await
        .unwrap_err();

    assert!(
        matches!(err, GeocoderError::NoMatch { ref query } if query == "Rua Inexistente, 000, Brasil"),
        "got: {err:?}"
    );
    assert!(err.is_not_found());
}

#[tokio::test]
async fn geocode_server_error_is_transient() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode(QUERY).await.unwrap_err();

    assert!(
        matches!(err, GeocoderError::UnexpectedStatus { status: 503, .. }),
        "got: {err:?}"
    );
    assert!(err.is_transient());
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn geocode_non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode(QUERY).await.unwrap_err();

    assert!(
        matches!(err, GeocoderError::Deserialize { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_unparsable_coordinates_are_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "", "lon": "-46.34", "display_name": "x" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode(QUERY).await.unwrap_err();

    assert!(matches!(err, GeocoderError::Malformed { .. }), "got: {err:?}");
}

#[tokio::test]
async fn geocode_respects_base_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nominatim/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "-23.5", "lon": "-46.6", "display_name": "São Paulo" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/nominatim", server.uri()));
    let coords = client.geocode("São Paulo, SP, Brasil").await.expect("match");
    assert_eq!(coords.label(), Some("São Paulo"));
}
