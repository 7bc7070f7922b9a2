//! HTML page handlers

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use site_shared::{process_debug, City, ProcessId};

use super::consent_banner;
use crate::traits::Clock;
use crate::webserver_impl::WebServer;

/// National landing page
pub async fn home<C>(State(server): State<WebServer<C>>, headers: HeaderMap) -> Html<String>
where
    C: Clock + 'static,
{
    let state = server.state();
    state.record_page_view();
    Html(state.render_landing(None, consent_banner(&headers).state()))
}

/// City landing page; aliases redirect to the canonical slug
pub async fn city_landing<C>(
    State(server): State<WebServer<C>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response
where
    C: Clock + 'static,
{
    let state = server.state();
    let consent = consent_banner(&headers).state();

    match slug.parse::<City>() {
        Ok(city) if city.slug() == slug => {
            state.record_page_view();
            Html(state.render_landing(Some(city), consent)).into_response()
        }
        Ok(city) => Redirect::permanent(&city.landing_path()).into_response(),
        Err(e) => {
            process_debug!(ProcessId::current(), "Unknown city requested: {}", e);
            let path = format!("/locations/{slug}");
            (StatusCode::NOT_FOUND, Html(state.render_not_found(&path, consent))).into_response()
        }
    }
}

/// Fallback: generic page for registered routes, 404 for everything else
pub async fn registered_page<C>(
    State(server): State<WebServer<C>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response
where
    C: Clock + 'static,
{
    let state = server.state();
    let consent = consent_banner(&headers).state();

    match state.render_registered(uri.path(), consent) {
        Ok(html) => {
            state.record_page_view();
            Html(html).into_response()
        }
        Err(e) => {
            process_debug!(ProcessId::current(), "{}", e);
            (e.status_code(), Html(state.render_not_found(uri.path(), consent))).into_response()
        }
    }
}
