//! Test helper utilities for site server integration tests

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use site_server::core::RouteRegistry;
use site_server::{FixedClock, WebServer, WebServerState};
use site_shared::SiteConfig;
use tower::ServiceExt;

use super::fixtures;

/// Server over the shipped registry with a fixed clock
pub fn create_test_server() -> WebServer<FixedClock> {
    create_test_server_with(fixtures::test_config())
}

pub fn create_test_server_with(config: SiteConfig) -> WebServer<FixedClock> {
    let state = WebServerState::new(
        "127.0.0.1:0".parse().unwrap(),
        config,
        RouteRegistry::site_default(),
    );
    WebServer::new(state, FixedClock::new(fixtures::fixed_instant()))
}

/// Drive one request through a fresh router in-process
pub async fn send(server: &WebServer<FixedClock>, request: Request<Body>) -> Response<Body> {
    server.build_router().oneshot(request).await.unwrap()
}

pub async fn get(server: &WebServer<FixedClock>, uri: &str) -> Response<Body> {
    send(server, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(server: &WebServer<FixedClock>, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(server, request).await
}

pub async fn post_json(server: &WebServer<FixedClock>, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(server, request).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Header value as text, panicking if absent
pub fn header_str<'a>(response: &'a Response<Body>, name: header::HeaderName) -> &'a str {
    response
        .headers()
        .get(&name)
        .unwrap_or_else(|| panic!("missing {name} header"))
        .to_str()
        .unwrap()
}
