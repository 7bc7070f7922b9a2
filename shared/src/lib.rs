//! Shared types for the consulting site
//!
//! Holds the data model (routes, cities, content records), site configuration,
//! error types and logging setup used by the server and the static exporter.

pub mod config;
pub mod content;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{IntegrationIds, SiteConfig};
pub use errors::*;
pub use types::*;
