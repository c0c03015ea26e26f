//! Shared helpers for the integration tests
#![allow(dead_code)]

pub mod raw;
pub mod requests;
pub mod stub;

use reqres_suite::internal::config::EndpointConfig;
use reqres_suite::internal::requester::HttpRequester;
use reqres_suite::internal::schema::SchemaLoader;
use std::time::Duration;

/// The stub answers `delay=N` after N of these instead of N seconds
pub const STUB_DELAY_UNIT: Duration = Duration::from_millis(10);

pub fn schemas() -> SchemaLoader {
    SchemaLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/json_schemas"))
}

pub fn requester_for(base_url: &str) -> HttpRequester {
    HttpRequester::new(&EndpointConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..EndpointConfig::default()
    })
    .expect("Failed to build requester")
}

/// Stub server plus a requester pointed at it
pub async fn stub_env() -> (stub::StubServer, HttpRequester) {
    let server = stub::spawn(STUB_DELAY_UNIT).await;
    let requester = requester_for(&server.base_url);
    (server, requester)
}
