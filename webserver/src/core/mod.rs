//! Core site logic
//!
//! Pure functions and state machines with no I/O dependencies

pub mod integrations;
pub mod page;
pub mod routes;
pub mod schema;
pub mod sitemap;
pub mod ui;

// Re-export commonly used types
pub use integrations::{resolve_integrations, Integration};
pub use page::{ContentPage, LandingPage, Section};
pub use routes::RouteRegistry;
pub use schema::SchemaAssembler;
pub use sitemap::{render_robots, render_sitemap};
pub use ui::{ConsentBanner, ConsentState, FloatingCta, LoadingVariant, MobileMenu, VideoPlaceholder};
