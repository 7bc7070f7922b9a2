//! JSON API handlers

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use site_shared::{process_info, City, ProcessId};

use super::consent_banner;
use crate::core::ui::ConsentState;
use crate::error::{WebServerError, WebServerResult};
use crate::traits::Clock;
use crate::types::{ConsentRequest, ConsentResponse, SchemaQuery};
use crate::webserver_impl::WebServer;

/// JSON-LD objects for a page - /api/schema?city=
pub async fn schema<C>(
    State(server): State<WebServer<C>>,
    Query(query): Query<SchemaQuery>,
) -> WebServerResult<Json<Vec<Value>>>
where
    C: Clock + 'static,
{
    let city = query.city.as_deref().map(str::parse::<City>).transpose()?;
    Ok(Json(server.state().schemas.page_schemas(city)))
}

/// Current consent choice - GET /api/consent
pub async fn get_consent(headers: HeaderMap) -> Json<ConsentResponse> {
    let banner = consent_banner(&headers);
    Json(ConsentResponse {
        consent: banner.state(),
        banner_visible: banner.is_visible(),
    })
}

/// Record a consent choice - POST /api/consent
pub async fn post_consent(headers: HeaderMap, Json(request): Json<ConsentRequest>) -> WebServerResult<Response> {
    let mut banner = consent_banner(&headers);
    match request.consent {
        ConsentState::Accepted => banner.accept(),
        ConsentState::Declined => banner.decline(),
        ConsentState::Unset => {
            return Err(WebServerError::InvalidRequest {
                details: "consent must be \"accepted\" or \"declined\"".to_string(),
            })
        }
    }
    process_info!(ProcessId::current(), "🍪 Consent recorded: {:?}", banner.state());

    let mut response = Json(ConsentResponse {
        consent: banner.state(),
        banner_visible: banner.is_visible(),
    })
    .into_response();

    for cookie in banner.store().set_cookie_headers() {
        let value = HeaderValue::from_str(cookie).map_err(|e| WebServerError::ResponseError(e.to_string()))?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    Ok(response)
}
