//! Squad page: a server-rendered overview of the students, squads and
//! messages held by an external content service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                     SQUAD PAGE                          Content service
//!                  ┌───────────────────────────────────────────┐
//!   GET /Z-A ─────▶│ http (request id, trace) → routing        │
//!                  │        listing / student / messages       │
//!                  │                  │                        │
//!                  │                  ▼                        │
//!                  │   directory: Query → DirectoryClient ─────┼────▶ /items/person
//!                  │                  │                        │      /items/squad
//!                  │                  ▼                        │      /items/messages
//!   HTML ◀─────────│   views: ViewModel → Renderer             │
//!                  │                                           │
//!   /scripts.js ◀──│   ServeDir(public/)                       │
//!                  └───────────────────────────────────────────┘
//! ```
//!
//! Nothing is stored locally: every request re-reads the content service.

pub mod config;
pub mod directory;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::SiteConfig;
pub use http::SiteServer;
pub use lifecycle::Shutdown;
