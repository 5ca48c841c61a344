//! Route table and request handlers.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → listing.rs  (GET on every configured listing path)
//!     → student.rs  (GET /student/{id})
//!     → messages.rs (GET/POST /berichten)
//!     → index POST  (no-op, 303 back to /)
//!     → ServeDir fallback for static assets
//! ```
//!
//! # Design Decisions
//! - Listing routes are data: one handler factory, one `ListingConfig` per path
//! - Every handler is one-shot: build queries, call the content service, render
//! - Upstream failures are not recovered; they become a generic 500

pub mod listing;
pub mod messages;
pub mod student;

use axum::{response::Redirect, routing::{get, post}, Router};
use std::sync::Arc;

use crate::config::{ListingConfig, SiteConfig};
use crate::directory::{DirectoryClient, Query};
use crate::http::response::AppError;
use crate::views::{Renderer, Template, ViewModel};

/// Tribe, cohort and message tag every outbound query is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteScope {
    pub tribe: String,
    pub cohort: String,
    pub message_scope: String,
}

impl SiteScope {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            tribe: config.directory.tribe.clone(),
            cohort: config.directory.cohort.clone(),
            message_scope: config.messages.scope.clone(),
        }
    }

    /// Squads of this tribe and cohort.
    pub fn squad_query(&self) -> Query {
        Query::new()
            .filter(&["cohort"], &self.cohort)
            .filter(&["tribe", "name"], &self.tribe)
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryClient,
    pub renderer: Arc<dyn Renderer>,
    pub scope: Arc<SiteScope>,
}

impl AppState {
    pub fn new(directory: DirectoryClient, renderer: Arc<dyn Renderer>, scope: SiteScope) -> Self {
        Self {
            directory,
            renderer,
            scope: Arc::new(scope),
        }
    }

    /// Render `template` with `model` into an HTML response body.
    pub fn render(
        &self,
        template: Template,
        model: &ViewModel,
    ) -> Result<axum::response::Html<String>, AppError> {
        Ok(axum::response::Html(self.renderer.render(template, model)?))
    }
}

/// Build the site router: listing routes, detail, messages and the index form.
pub fn router(state: AppState, listings: &[ListingConfig]) -> Router {
    let mut router = Router::new();
    for config in listings {
        router = router.route(&config.path, listing::listing_route(config.clone()));
    }

    router
        .route("/", post(accept_index_form))
        .route("/student/{id}", get(student::show_student))
        .route(
            "/berichten",
            get(messages::list_messages).post(messages::post_message),
        )
        .with_state(state)
}

/// Form posts to the index are accepted and dropped; nothing is stored.
async fn accept_index_form() -> Redirect {
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squad_query() {
        let scope = SiteScope::from_config(&SiteConfig::default());
        let query = scope.squad_query();

        assert_eq!(query.get("filter[cohort]"), Some("2526"));
        assert_eq!(query.get("filter[tribe][name]"), Some("FDND Jaar 1"));
        assert_eq!(query.get("sort"), None);
        assert_eq!(scope.message_scope, "Jaar 1 / Team Bliss");
    }
}
