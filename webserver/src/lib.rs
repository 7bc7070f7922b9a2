//! Site server library
//!
//! Serves the multi-city consulting site: landing pages rendered from one
//! template, the sitemap, robots.txt, JSON-LD structured data and the consent
//! API.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{Clock, PreferenceStore};

// Re-export service implementations
pub use services::{CookiePreferenceStore, FixedClock, MemoryPreferenceStore, SiteExporter, SystemClock};
