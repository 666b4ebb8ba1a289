//! End-to-end tests for the HTTP client against a local stub server.

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::*;
use crate::api::{MockBackend, fixtures};
use crate::domain::TripDays;

/// Serve a router on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ApiConfig::new(base_url).with_timeout(5)).unwrap()
}

/// Decode a raw query string into its pairs, keeping repeated keys.
fn query_pairs(raw: Option<String>) -> Vec<(String, String)> {
    let url = Url::parse(&format!("http://stub/?{}", raw.unwrap_or_default())).unwrap();
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

async fn stub_search(State(mock): State<MockBackend>, RawQuery(raw): RawQuery) -> impl IntoResponse {
    let pairs = query_pairs(raw);
    let get = |key: &str| -> Vec<String> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    };

    // Only the exact scenario query yields results, which pins the encoding.
    if get("destination") != ["Beijing"] || get("days") != ["3"] || get("preferences") != ["culture"]
    {
        return Json(Vec::<Attraction>::new());
    }

    Json(mock.attractions().to_vec())
}

async fn stub_detail(State(mock): State<MockBackend>, Path(id): Path<String>) -> impl IntoResponse {
    let Ok(id) = AttractionId::parse(&id) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    match mock.find(&id) {
        Some(a) => Json(a.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_itinerary(
    State(mock): State<MockBackend>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let ids: Vec<AttractionId> = body["selected_ids"]
        .as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(|v| v.as_str())
                .filter_map(|s| AttractionId::parse(s).ok())
                .collect()
        })
        .unwrap_or_default();
    let days = body["days"].as_i64().unwrap_or(0);
    let Ok(days) = TripDays::new(days) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    let request = ItineraryRequest::new(ids, days, vec![]);
    Json(mock.plan(&request)).into_response()
}

async fn healthy() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "message": "Travel API is running"}))
}

async fn stub_backend() -> (ApiClient, MockBackend) {
    let mock = MockBackend::new(fixtures::beijing());
    let router = Router::new()
        .route("/", get(healthy))
        .route("/attractions", get(stub_search))
        .route("/attractions/:id", get(stub_detail))
        .route("/itinerary", post(stub_itinerary))
        .with_state(mock.clone());
    let base = spawn(router).await;
    (client(&base), mock)
}

#[tokio::test]
async fn search_scenario_returns_named_tagged_attractions() {
    let (client, _) = stub_backend().await;
    let query = SearchQuery::new("Beijing", TripDays::new(3).unwrap(), vec!["culture".into()])
        .unwrap();

    let results = client.search(&query).await.unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|a| !a.name.is_empty()));
    assert!(results.iter().all(|a| !a.tags.is_empty()));
}

#[tokio::test]
async fn search_with_other_params_is_empty() {
    let (client, _) = stub_backend().await;
    let query = SearchQuery::new("Beijing", TripDays::new(1).unwrap(), vec![]).unwrap();

    assert!(client.search(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn detail_returns_full_record() {
    let (client, mock) = stub_backend().await;
    let expected = mock.attractions()[4].clone();

    let detail = client.attraction(&expected.id).await.unwrap();

    assert_eq!(detail, expected);
    assert!(!detail.address.is_empty());
    assert!(!detail.pros.is_empty());
    assert!(!detail.source_posts.is_empty());
}

#[tokio::test]
async fn detail_404_is_not_found() {
    let (client, _) = stub_backend().await;

    let result = client.attraction(&AttractionId::parse("missing").unwrap()).await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn detail_null_body_is_not_found() {
    let router = Router::new().route("/attractions/:id", get(|| async { "null" }));
    let client = client(&spawn(router).await);

    let result = client.attraction(&AttractionId::from(1)).await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn build_ten_over_three_days() {
    let (client, mock) = stub_backend().await;
    let ids: Vec<AttractionId> = mock.attractions()[..10]
        .iter()
        .map(|a| a.id.clone())
        .collect();
    let request = ItineraryRequest::new(ids, TripDays::new(3).unwrap(), vec!["culture".into()]);

    let entries = client.build_itinerary(&request).await.unwrap();

    assert_eq!(entries.len(), 10);
    assert!(entries.iter().all(|e| (1..=3).contains(&e.day.get())));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let router = Router::new().route("/attractions", get(|| async { "[{\"id\": 1}]" }));
    let client = client(&spawn(router).await);
    let query = SearchQuery::new("x", TripDays::default(), vec![]).unwrap();

    let result = client.search(&query).await;

    match result {
        Err(ApiError::Decode { body, .. }) => assert_eq!(body.as_deref(), Some("[{\"id\": 1}]")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_api_error() {
    let router = Router::new().route(
        "/itinerary",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = client(&spawn(router).await);
    let request = ItineraryRequest::new(vec![], TripDays::default(), vec![]);

    let result = client.build_itinerary(&request).await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client(&format!("http://{addr}"));

    let result = client.attraction(&AttractionId::from(1)).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn health_check() {
    let (client, _) = stub_backend().await;
    assert!(client.health().await.is_ok());
}
