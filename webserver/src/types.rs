//! Request and response bodies for the JSON API

use serde::{Deserialize, Serialize};

use crate::core::ui::ConsentState;

/// `POST /api/consent` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentRequest {
    pub consent: ConsentState,
}

/// Current consent choice as seen by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentResponse {
    pub consent: ConsentState,
    pub banner_visible: bool,
}

/// `GET /api/schema` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaQuery {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub routes: usize,
    pub page_views: u64,
    pub sitemap_requests: u64,
    pub integrations: Vec<String>,
}
