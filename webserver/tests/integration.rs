//! Integration tests for the site server
//!
//! Each test drives the real router in-process with a fixed clock.

mod common;

use axum::http::{header, StatusCode};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::Value;

use common::*;

#[tokio::test]
async fn test_sitemap_headers() {
    let server = create_test_server();
    let response = get(&server, "/sitemap.xml").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, header::CONTENT_TYPE), "application/xml");
    assert_eq!(
        header_str(&response, header::CACHE_CONTROL),
        "public, max-age=86400, s-maxage=86400"
    );
}

#[tokio::test]
async fn test_sitemap_body_is_well_formed() {
    let server = create_test_server();
    let body = body_string(get(&server, "/sitemap.xml").await).await;

    assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    let mut reader = Reader::from_str(&body);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut root = None;
    let mut urls = 0;
    let mut lastmods = Vec::new();
    let mut in_lastmod = false;

    loop {
        match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                if root.is_none() {
                    root = Some(name.clone());
                }
                if name == "url" {
                    urls += 1;
                }
                in_lastmod = name == "lastmod";
            }
            Event::Text(e) if in_lastmod => lastmods.push(e.unescape().unwrap().into_owned()),
            Event::End(_) => in_lastmod = false,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    assert_eq!(root.as_deref(), Some("urlset"));
    assert_eq!(urls, server.state().registry.len());
    assert_eq!(lastmods.len(), urls);
    assert!(lastmods.iter().all(|l| l == FIXED_LASTMOD));
}

#[tokio::test]
async fn test_sitemap_is_fresh_per_request() {
    let server = create_test_server();
    let first = body_string(get(&server, "/sitemap.xml").await).await;
    let second = body_string(get(&server, "/sitemap.xml").await).await;

    assert_eq!(first, second);
    assert_eq!(
        server
            .state()
            .sitemap_requests
            .load(std::sync::atomic::Ordering::Relaxed),
        2
    );
}

#[tokio::test]
async fn test_robots_txt() {
    let server = create_test_server();
    let response = get(&server, "/robots.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, header::CONTENT_TYPE).starts_with("text/plain"));
    let body = body_string(response).await;
    assert!(body.contains("Sitemap: https://northbeam.ai/sitemap.xml"));
}

#[tokio::test]
async fn test_home_page() {
    let server = create_test_server();
    let response = get(&server, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, header::CONTENT_TYPE).starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains(r#"<link rel="canonical" href="https://northbeam.ai/">"#));
    assert_eq!(body.matches(r#"<script type="application/ld+json">"#).count(), 5);
    assert!(body.contains(r#""@type":"Brand""#));
    assert!(!body.contains("local-office"));
}

#[tokio::test]
async fn test_city_pages() {
    let server = create_test_server();

    for (slug, name) in [("boston", "Boston"), ("nyc", "New York City"), ("miami", "Miami")] {
        let response = get(&server, &format!("/locations/{slug}")).await;
        assert_eq!(response.status(), StatusCode::OK, "{slug}");

        let body = body_string(response).await;
        assert!(body.contains(&format!("AI Consulting in {name}")), "{slug}");
        assert!(body.contains(r#""@type":"LocalBusiness""#), "{slug}");
        assert_eq!(body.matches(r#"<script type="application/ld+json">"#).count(), 4);
    }
}

#[tokio::test]
async fn test_unknown_city_is_not_found() {
    let server = create_test_server();
    let response = get(&server, "/locations/paris").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_city_alias_redirects_to_canonical_slug() {
    let server = create_test_server();
    let response = get(&server, "/locations/new-york").await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(header_str(&response, header::LOCATION), "/locations/nyc");
}

#[tokio::test]
async fn test_registered_routes_render_generic_pages() {
    let server = create_test_server();

    for path in ["/about", "/services/ai-strategy", "/industries/healthcare", "/resources/guides"] {
        let response = get(&server, path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    let response = get(&server, "/definitely/not/here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_consent_banner_follows_cookie() {
    let server = create_test_server();

    let fresh = body_string(get(&server, "/").await).await;
    assert!(fresh.contains("consent-banner"));

    let accepted = body_string(get_with_cookie(&server, "/", "cookie-consent=accepted").await).await;
    assert!(!accepted.contains("consent-banner"));

    let declined = body_string(get_with_cookie(&server, "/locations/boston", "cookie-consent=declined").await).await;
    assert!(!declined.contains("consent-banner"));

    let garbage = body_string(get_with_cookie(&server, "/", "cookie-consent=maybe").await).await;
    assert!(garbage.contains("consent-banner"));
}

#[tokio::test]
async fn test_consent_round_trip() {
    let server = create_test_server();

    let response = post_json(&server, "/api/consent", r#"{"consent":"accepted"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = header_str(&response, header::SET_COOKIE).to_string();
    assert!(set_cookie.starts_with("cookie-consent=accepted;"));
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["consent"], "accepted");
    assert_eq!(body["banner_visible"], false);

    // the browser sends the cookie back on the next request
    let cookie = set_cookie.split(';').next().unwrap();
    let response = get_with_cookie(&server, "/api/consent", cookie).await;
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["consent"], "accepted");

    let page = body_string(get_with_cookie(&server, "/", cookie).await).await;
    assert!(!page.contains("consent-banner"));
}

#[tokio::test]
async fn test_consent_without_cookie_is_unset() {
    let server = create_test_server();
    let response = get(&server, "/api/consent").await;
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(body["consent"], "unset");
    assert_eq!(body["banner_visible"], true);
}

#[tokio::test]
async fn test_consent_rejects_unset_choice() {
    let server = create_test_server();
    let response = post_json(&server, "/api/consent", r#"{"consent":"unset"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_schema_api() {
    let server = create_test_server();

    let response = get(&server, "/api/schema?city=miami").await;
    assert_eq!(response.status(), StatusCode::OK);
    let schemas: Vec<Value> = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(schemas.iter().all(|s| s["@context"] == "https://schema.org"));

    let serialized = serde_json::to_string(&schemas).unwrap();
    assert!(serialized.contains("Miami"));
    assert!(!serialized.contains("Boston"));

    let national: Vec<Value> =
        serde_json::from_str(&body_string(get(&server, "/api/schema").await).await).unwrap();
    assert!(national.iter().any(|s| s["@type"] == "Brand"));

    let response = get(&server, "/api/schema?city=paris").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_integrations_render_one_script_each() {
    let server = create_test_server_with(config_with_integrations());
    let body = body_string(get(&server, "/").await).await;

    for name in ["tag-manager", "analytics", "pixel", "linkedin-insight", "heatmap"] {
        assert_eq!(
            body.matches(&format!(r#"data-integration="{name}""#)).count(),
            1,
            "{name}"
        );
    }
}

#[tokio::test]
async fn test_missing_or_malformed_integrations_render_nothing() {
    let plain = body_string(get(&create_test_server(), "/").await).await;
    assert!(!plain.contains("data-integration"));

    let server = create_test_server_with(config_with_malformed_integrations());
    let body = body_string(get(&server, "/").await).await;
    assert!(!body.contains("data-integration"));
    assert!(server.state().integrations.is_empty());
}

#[tokio::test]
async fn test_health_reports_counts() {
    let server = create_test_server_with(config_with_integrations());
    get(&server, "/").await;
    get(&server, "/locations/boston").await;
    get(&server, "/sitemap.xml").await;

    let response = get(&server, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["page_views"], 2);
    assert_eq!(body["sitemap_requests"], 1);
    assert_eq!(body["routes"], server.state().registry.len());
    assert_eq!(body["integrations"].as_array().unwrap().len(), 5);
}
