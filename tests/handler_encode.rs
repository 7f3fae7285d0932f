mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_encode_success() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": "http://example.com/" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["decodedUrl"], "http://example.com/");

    let code = json["encodedUrl"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );

    assert_eq!(state.link_service.link_count().await, 1);
}

#[tokio::test]
async fn test_encode_missing_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.post("/encode-url").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "u must put url");

    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_null_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "u must put url");
    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_empty_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.post("/encode-url").json(&json!({ "url": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_malformed_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "url malformed");

    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_rejects_url_with_newline() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": "http://example.com/a\nb" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "url malformed");

    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_rejects_url_with_tab() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": "http://exa\tmple.com/" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_hostless_url() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": "mailto:someone@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_encode_non_string_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/encode-url").json(&json!({ "url": 42 })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_encode_non_json_body() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/encode-url").text("http://example.com/").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_encode_does_not_normalize() {
    let server = common::create_test_server(common::create_test_state());

    let first = common::encode(&server, "http://example.com").await;
    let second = common::encode(&server, "http://example.com/").await;
    let third = common::encode(&server, "HTTP://EXAMPLE.COM/").await;

    assert_ne!(first, second);
    assert_ne!(second, third);

    let all = server.get("/all").await.json::<serde_json::Value>();
    assert_eq!(all[&first], "http://example.com");
    assert_eq!(all[&second], "http://example.com/");
    assert_eq!(all[&third], "HTTP://EXAMPLE.COM/");
}

#[tokio::test]
async fn test_encode_same_url_twice_creates_two_links() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let first = common::encode(&server, "https://example.com/page").await;
    let second = common::encode(&server, "https://example.com/page").await;

    assert_ne!(first, second);
    assert_eq!(state.link_service.link_count().await, 2);
}

#[tokio::test]
async fn test_encoded_ids_are_unique() {
    let server = common::create_test_server(common::create_test_state());

    let mut codes = HashSet::new();
    for i in 0..200 {
        let code = common::encode(&server, &format!("https://example.com/{i}")).await;
        assert!(codes.insert(code), "duplicate code issued");
    }

    assert_eq!(codes.len(), 200);
}

#[tokio::test]
async fn test_encode_generation_exhausted() {
    let state =
        common::create_test_state_with(Arc::new(common::FixedCodeGenerator("aaaaaa")), 10);
    let server = common::create_test_server(state.clone());

    let code = common::encode(&server, "https://example.com/first").await;
    assert_eq!(code, "aaaaaa");

    let response = server
        .post("/encode-url")
        .json(&json!({ "url": "https://example.com/second" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");

    // The existing link is untouched.
    assert_eq!(state.link_service.link_count().await, 1);
    assert_eq!(
        state.link_service.resolve("aaaaaa").await.unwrap(),
        "https://example.com/first"
    );
}
