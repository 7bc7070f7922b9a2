//! HTTP request handlers
//!
//! Every handler takes the `WebServer` as router state and is generic over
//! its clock.

pub mod api;
pub mod health;
pub mod pages;
pub mod sitemap;

use axum::http::{header, HeaderMap};

use crate::core::ui::ConsentBanner;
use crate::services::CookiePreferenceStore;

/// Consent banner backed by the request's `Cookie` header
pub(crate) fn consent_banner(headers: &HeaderMap) -> ConsentBanner<CookiePreferenceStore> {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    ConsentBanner::init(CookiePreferenceStore::from_header(cookie))
}
