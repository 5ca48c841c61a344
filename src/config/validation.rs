//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the content service URL is usable
//! - Check the listing route table is well-formed and collision free
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;

/// Paths owned by fixed routes.
const RESERVED_PATHS: &[&str] = &["/berichten"];
const RESERVED_PREFIXES: &[&str] = &["/student/"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("directory.base_url '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("listing path '{0}' must start with '/' and contain no captures or wildcards")]
    InvalidListingPath(String),

    #[error("listing path '{0}' is registered more than once")]
    DuplicateListingPath(String),

    #[error("listing path '{0}' collides with a built-in route")]
    ReservedListingPath(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.directory.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(
            config.directory.base_url.clone(),
        )),
    }

    let required = [
        ("directory.tribe", &config.directory.tribe),
        ("directory.cohort", &config.directory.cohort),
        ("messages.scope", &config.messages.scope),
        ("assets.public_dir", &config.assets.public_dir),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptyField(name));
        }
    }

    let mut seen = HashSet::new();
    for listing in &config.listings {
        let path = listing.path.as_str();
        if !is_literal_route(path) {
            errors.push(ValidationError::InvalidListingPath(path.to_string()));
            continue;
        }
        if RESERVED_PATHS.contains(&path) || RESERVED_PREFIXES.iter().any(|p| path.starts_with(p)) {
            errors.push(ValidationError::ReservedListingPath(path.to_string()));
        }
        if !seen.insert(path) {
            errors.push(ValidationError::DuplicateListingPath(path.to_string()));
        }
        if matches!(&listing.squad, Some(squad) if squad.trim().is_empty()) {
            errors.push(ValidationError::EmptyField("listings.squad"));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A path the router mounts verbatim: rooted, no `{capture}`, and no segment
/// in the legacy `:param` / `*wildcard` syntax the router refuses at startup.
fn is_literal_route(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains(['{', '}'])
        && !path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
}
