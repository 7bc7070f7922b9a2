//! Webserver state management
//!
//! Everything here is built once at startup and shared read-only through an
//! `Arc`; only the request counters change afterwards.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use site_shared::{process_warn, City, ProcessId, SiteConfig};

use crate::core::integrations::{resolve_integrations, Integration};
use crate::core::page::{ContentPage, LandingPage};
use crate::core::routes::RouteRegistry;
use crate::core::schema::SchemaAssembler;
use crate::core::sitemap::render_sitemap;
use crate::core::ui::{ConsentState, LoadingVariant};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::Clock;
use crate::web::components::{self, PageContext};

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    // Server configuration
    pub bind_address: SocketAddr,
    pub static_dir: Option<PathBuf>,

    // Site configuration, resolved once
    pub config: SiteConfig,
    pub registry: RouteRegistry,
    pub schemas: SchemaAssembler,
    pub integrations: Vec<Integration>,
    pub loading_variant: LoadingVariant,

    // Server state
    pub is_running: AtomicBool,
    pub page_views: AtomicU64,
    pub sitemap_requests: AtomicU64,
    pub server_start_time: Instant,
}

/// Parse `host:port` into a socket address
pub fn parse_bind_address(host: &str, port: u16) -> WebServerResult<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address {host}:{port}: {e}")))
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr, config: SiteConfig, registry: RouteRegistry) -> Self {
        let duplicates = registry.duplicate_paths();
        if !duplicates.is_empty() {
            process_warn!(
                ProcessId::current(),
                "⚠️ Route registry lists {} path(s) more than once: {:?}",
                duplicates.len(),
                duplicates
            );
        }

        let integrations = resolve_integrations(&config.integrations);
        let loading_variant = LoadingVariant::from_config(config.loading_variant.as_deref());
        let schemas = SchemaAssembler::new(&config);

        Self {
            bind_address,
            static_dir: None,
            config,
            registry,
            schemas,
            integrations,
            loading_variant,
            is_running: AtomicBool::new(true),
            page_views: AtomicU64::new(0),
            sitemap_requests: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Set running state
    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    pub fn record_page_view(&self) {
        self.page_views.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sitemap_request(&self) {
        self.sitemap_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn page_context(&self, consent: ConsentState) -> PageContext<'_> {
        PageContext {
            config: &self.config,
            integrations: &self.integrations,
            consent,
            loading: self.loading_variant,
        }
    }

    /// Landing page HTML for a city, or the national page for `None`
    pub fn render_landing(&self, city: Option<City>, consent: ConsentState) -> String {
        let page = LandingPage::for_city(city);
        let schemas = self.schemas.page_schemas(city);
        components::render_landing(&page, &schemas, &self.page_context(consent))
    }

    /// Generic page for a registered path
    pub fn render_registered(&self, path: &str, consent: ConsentState) -> WebServerResult<String> {
        let category = self
            .registry
            .category_of(path)
            .ok_or_else(|| WebServerError::PageNotFound { path: path.to_string() })?;
        let page = ContentPage::new(path, category);
        let schemas = [self.schemas.organization()];
        Ok(components::render_content_page(
            &page,
            &schemas,
            &self.page_context(consent),
        ))
    }

    pub fn render_not_found(&self, path: &str, consent: ConsentState) -> String {
        components::render_not_found(path, &self.page_context(consent))
    }

    /// Sitemap document stamped with the clock's current time
    pub fn render_sitemap(&self, clock: &dyn Clock) -> WebServerResult<String> {
        let routes = self.registry.build_route_list(clock);
        render_sitemap(&self.config, &routes)
    }
}
