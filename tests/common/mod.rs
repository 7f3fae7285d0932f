#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use tinylink::prelude::*;
use tinylink::routes::app_router;

/// Generator that always proposes the same code.
pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(RandomCodeGenerator::default()), 10)
}

pub fn create_test_state_with(generator: Arc<dyn CodeGenerator>, max_attempts: usize) -> AppState {
    let link_service = LinkService::new(
        Arc::new(InMemoryLinkRepository::new()),
        generator,
        max_attempts,
    );

    AppState::new(Arc::new(link_service), Arc::new(RequestMetrics::new()))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Encodes `url` through the API and returns the issued code.
pub async fn encode(server: &TestServer, url: &str) -> String {
    let response = server.post("/encode-url").json(&json!({ "url": url })).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    body["encodedUrl"].as_str().unwrap().to_string()
}
