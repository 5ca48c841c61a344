//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::directory::Sort;

/// Root configuration for the squad page site.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// External content service and the tribe/cohort every listing is scoped to.
    pub directory: DirectoryConfig,

    /// Message board settings.
    pub messages: MessagesConfig,

    /// Static asset settings.
    pub assets: AssetsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Listing routes, one entry per registered path.
    pub listings: Vec<ListingConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            directory: DirectoryConfig::default(),
            messages: MessagesConfig::default(),
            assets: AssetsConfig::default(),
            observability: ObservabilityConfig::default(),
            listings: default_listings(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind.
    pub host: String,

    /// TCP port. Overridden by the `PORT` environment variable.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Content service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Base URL of the content service (items live under `/items/<resource>`).
    pub base_url: String,

    /// Tribe name every person and squad query is restricted to.
    pub tribe: String,

    /// Cohort every person and squad query is restricted to.
    pub cohort: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fdnd.directus.app".to_string(),
            tribe: "FDND Jaar 1".to_string(),
            cohort: "2526".to_string(),
        }
    }
}

/// Message board configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Value of the `for` field used to read and write messages.
    /// The message collection is shared, so this tag is what keeps ours apart.
    pub scope: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            scope: "Jaar 1 / Team Bliss".to_string(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served for any path no route claims.
    pub public_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// A listing route: a path rendering the person overview with a given
/// sort order, optionally narrowed to one squad.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Path the listing is mounted on (e.g. "/Z-A").
    pub path: String,

    /// Sort expression sent to the content service ("name", "-name", "birthdate").
    pub sort: Sort,

    /// Squad name to narrow the listing to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squad: Option<String>,
}

impl ListingConfig {
    fn new(path: &str, sort: Sort, squad: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            sort,
            squad: squad.map(str::to_string),
        }
    }
}

fn default_listings() -> Vec<ListingConfig> {
    vec![
        ListingConfig::new("/", Sort::ascending("name"), None),
        ListingConfig::new("/Z-A", Sort::descending("name"), None),
        // The sort selector script navigates to the lowercase form.
        ListingConfig::new("/z-a", Sort::descending("name"), None),
        ListingConfig::new("/1I", Sort::ascending("name"), Some("1I")),
        ListingConfig::new("/1J", Sort::ascending("name"), Some("1J")),
        ListingConfig::new("/birthdate", Sort::ascending("birthdate"), None),
    ]
}
