//! Health check endpoint

use std::sync::atomic::Ordering;

use axum::{extract::State, response::Json};

use crate::traits::Clock;
use crate::types::HealthResponse;
use crate::webserver_impl::WebServer;

pub async fn health_check<C>(State(server): State<WebServer<C>>) -> Json<HealthResponse>
where
    C: Clock + 'static,
{
    let state = server.state();
    Json(HealthResponse {
        status: if state.is_running() { "healthy" } else { "stopping" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.get_uptime_seconds(),
        routes: state.registry.len(),
        page_views: state.page_views.load(Ordering::Relaxed),
        sitemap_requests: state.sitemap_requests.load(Ordering::Relaxed),
        integrations: state.integrations.iter().map(|i| i.name().to_string()).collect(),
    })
}
