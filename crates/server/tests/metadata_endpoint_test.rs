//! Boundary tests: status codes, headers, and response envelopes.
//!
//! Only direct-link lookups are exercised end to end here, since they
//! need no outward network call; provider HTTP behavior is covered by
//! the client and adapter test suites.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use server::{create_router, AppState, Config};
use tower::ServiceExt;

fn test_app(max_requests: u32) -> Router {
    let config = Config {
        port: 0,
        rate_limit_max_requests: max_requests,
        rate_limit_window: Duration::from_secs(60),
        youtube_api_key: None,
    };
    let (router, _api) = create_router(AppState::new(config));
    router
}

fn metadata_request(url: &str, client: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/metadata")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(
            serde_json::json!({ "url": url }).to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn direct_link_lookup_succeeds_with_quota_headers() {
    let app = test_app(10);

    let response = app
        .oneshot(metadata_request(
            "https://cdn.example.com/files/clip.mp4",
            "203.0.113.7",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-ratelimit-remaining"].to_str().unwrap(),
        "9"
    );
    assert!(response.headers().contains_key("x-ratelimit-reset"));

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["platform"], "direct");
    assert_eq!(body["data"]["isEmbeddable"], false);
    assert_eq!(body["data"]["duration"], "Unknown");
}

#[tokio::test]
async fn unsupported_url_is_a_400() {
    let app = test_app(10);

    let response = app
        .oneshot(metadata_request("not a url", "203.0.113.7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Unsupported video URL"));
}

#[tokio::test]
async fn blank_url_is_a_400() {
    let app = test_app(10);

    let response = app
        .oneshot(metadata_request("   ", "203.0.113.7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid URL provided");
}

#[tokio::test]
async fn exhausted_window_answers_429_with_reset_headers() {
    let app = test_app(1);

    let first = app
        .clone()
        .oneshot(metadata_request(
            "https://cdn.example.com/clip.mp4",
            "203.0.113.7",
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(metadata_request(
            "https://cdn.example.com/clip.mp4",
            "203.0.113.7",
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        second.headers()["x-ratelimit-remaining"].to_str().unwrap(),
        "0"
    );
    assert!(second.headers().contains_key("x-ratelimit-reset"));

    let body = body_json(second).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Rate limit"));

    // A different client still gets through.
    let other = app
        .oneshot(metadata_request(
            "https://cdn.example.com/clip.mp4",
            "198.51.100.2",
        ))
        .await
        .unwrap();
    assert_eq!(other.status(), StatusCode::OK);
}

#[tokio::test]
async fn youtube_without_credential_is_a_500() {
    let app = test_app(10);

    let response = app
        .oneshot(metadata_request(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "203.0.113.7",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("API key"));
}
