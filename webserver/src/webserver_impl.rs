//! Main webserver implementation
//!
//! This module contains the WebServer struct that wires state and the
//! injected clock into the axum router.

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use site_shared::{logging, process_info, ProcessId};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::core::sitemap::SITEMAP_PATH;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::Clock;
use crate::web::handlers::{api, health, pages, sitemap};

/// Main webserver struct with dependency injection
pub struct WebServer<C: Clock> {
    state: Arc<WebServerState>,
    clock: Arc<C>,
}

// Derived Clone would require `C: Clone`
impl<C: Clock> Clone for WebServer<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock + 'static> WebServer<C> {
    pub fn new(state: WebServerState, clock: C) -> Self {
        Self {
            state: Arc::new(state),
            clock: Arc::new(clock),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            // Pages
            .route("/", get(pages::home::<C>))
            .route("/locations/:city", get(pages::city_landing::<C>))
            // Crawlers
            .route(SITEMAP_PATH, get(sitemap::sitemap_xml::<C>))
            .route("/robots.txt", get(sitemap::robots_txt::<C>))
            // API routes
            .route("/api/schema", get(api::schema::<C>))
            .route("/api/consent", get(api::get_consent).post(api::post_consent))
            // Health check
            .route("/health", get(health::health_check::<C>))
            .fallback(pages::registered_page::<C>);

        if let Some(static_dir) = &self.state.static_dir {
            router = router.nest_service("/static", ServeDir::new(static_dir));
        }

        router
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).into_inner())
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        logging::log_startup(
            ProcessId::current(),
            &format!("Site listening on http://{} ({} routes)", bind_address, self.state.registry.len()),
        );
        process_info!(
            ProcessId::current(),
            "🗺️ Sitemap available at {}",
            self.state.config.absolute(SITEMAP_PATH)
        );

        let state = Arc::clone(&self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                state.set_running(false);
            })
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
