//! Crawler endpoints: `/sitemap.xml` and `/robots.txt`

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use site_shared::{process_debug, ProcessId};

use crate::core::sitemap::{render_robots, SITEMAP_CACHE_CONTROL, SITEMAP_CONTENT_TYPE};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::Clock;
use crate::webserver_impl::WebServer;

/// Fresh sitemap per request, stamped with the server clock
pub async fn sitemap_xml<C>(State(server): State<WebServer<C>>) -> WebServerResult<Response>
where
    C: Clock + 'static,
{
    let state = server.state();
    state.record_sitemap_request();

    let body = state.render_sitemap(server.clock())?;
    process_debug!(ProcessId::current(), "🗺️ Rendered sitemap ({} bytes)", body.len());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, SITEMAP_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, SITEMAP_CACHE_CONTROL)
        .body(Body::from(body))
        .map_err(|e| WebServerError::ResponseError(e.to_string()))
}

pub async fn robots_txt<C>(State(server): State<WebServer<C>>) -> impl IntoResponse
where
    C: Clock + 'static,
{
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&server.state().config),
    )
}
