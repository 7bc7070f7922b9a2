//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use site_shared::{process_error, ProcessId, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Page not found: {path}")]
    PageNotFound { path: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Sitemap serialization failed: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Response building error: {0}")]
    ResponseError(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Sitemap is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::PageNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            WebServerError::SharedError(SharedError::InvalidCity { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            process_error!(ProcessId::current(), "❌ Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WebServerError::PageNotFound { path: "/nope".into() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebServerError::InvalidRequest { details: "bad".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebServerError::from(SharedError::InvalidCity { input: "paris".into() }).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebServerError::config("bad port").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_utf8_converts_to_server_error() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = WebServerError::from(err);

        assert!(matches!(err, WebServerError::Utf8(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
