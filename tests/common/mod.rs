//! Common test utilities and helpers.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use workbench::config::Config;
use workbench::services::EnvironmentService;
use workbench::{api, AppState};

/// Build a configuration from key/value pairs instead of the process environment.
pub fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).expect("Invalid test configuration")
}

/// Host facts used by every test app.
pub fn test_environment() -> EnvironmentService {
    EnvironmentService::with_facts("3.11.9", "Linux-6.1.0-x86_64", "lab-test")
}

/// Build the full application for the given variables.
pub fn build_app(pairs: &[(&str, &str)]) -> Router {
    api::app(AppState::with_environment(config_from(pairs), test_environment()))
}

/// Start an in-process test server for the given variables.
pub fn test_server(pairs: &[(&str, &str)]) -> TestServer {
    TestServer::new(build_app(pairs)).expect("Failed to start test server")
}

/// Extract JSON body from response
pub async fn extract_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// Create a GET request
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
