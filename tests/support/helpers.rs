// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryNewsRepo, StubNewsSource};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use news_aggregator::application::ports::{news_source::NewsSource, time::Clock};
use news_aggregator::application::services::ApplicationServices;
use news_aggregator::domain::news::NewsArticleRepository;
use news_aggregator::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn build_services(
    repo: Arc<InMemoryNewsRepo>,
    source: Arc<StubNewsSource>,
    clock: FixedClock,
) -> ApplicationServices {
    let repo: Arc<dyn NewsArticleRepository> = repo;
    let source: Arc<dyn NewsSource> = source;
    let clock: Arc<dyn Clock> = Arc::new(clock);
    ApplicationServices::new(repo, source, clock)
}

pub fn make_test_router(repo: Arc<InMemoryNewsRepo>, source: Arc<StubNewsSource>) -> axum::Router {
    let services = Arc::new(build_services(repo, source, FixedClock::default()));
    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Assert the status and return the JSON body.
pub async fn json_body(resp: Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&bytes)
    );
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
