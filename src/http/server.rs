//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the content service client and application state
//! - Create Axum Router with all handlers and the static asset fallback
//! - Wire up middleware (request ID, tracing)
//! - Serve on a listener until shutdown is signalled

use axum::{body::Body, http::Request, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::directory::{DirectoryClient, DirectoryResult};
use crate::http::request::{make_request_span, MakeRequestUuidV4};
use crate::routing::{self, AppState, SiteScope};
use crate::views::{HtmlRenderer, Renderer};

/// HTTP server for the squad page site.
pub struct SiteServer {
    router: Router,
    config: SiteConfig,
}

impl SiteServer {
    /// Create a server rendering with the built-in HTML renderer.
    pub fn new(config: SiteConfig) -> DirectoryResult<Self> {
        let renderer = Arc::new(HtmlRenderer::from_listings(&config.listings));
        Self::with_renderer(config, renderer)
    }

    /// Create a server rendering through `renderer`.
    pub fn with_renderer(config: SiteConfig, renderer: Arc<dyn Renderer>) -> DirectoryResult<Self> {
        let directory = DirectoryClient::new(&config.directory.base_url)?;
        let state = AppState::new(directory, renderer, SiteScope::from_config(&config));

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                make_request_span(request)
            }))
            .layer(PropagateRequestIdLayer::x_request_id());

        routing::router(state, &config.listings)
            .fallback_service(ServeDir::new(&config.assets.public_dir))
            .layer(middleware)
    }

    /// Router with all middleware, for serving or driving directly in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until a value arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            listings = self.config.listings.len(),
            content_service = %self.config.directory.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
