//! Content service subsystem.
//!
//! # Data Flow
//! ```text
//! Route handler
//!     → query.rs (sort / fields / filter[...] parameters)
//!     → client.rs (GET or POST against <base>/items/<resource>)
//!     → types.rs (unwrap the { data } envelope)
//!     → Route handler (view-model)
//! ```
//!
//! Records are fetched fresh on every call; nothing is cached here. Handlers
//! read records as `serde_json::Value` so whatever the service returns
//! reaches the view-model unchanged.

pub mod client;
pub mod query;
pub mod types;

pub use client::DirectoryClient;
pub use query::{Query, Sort};
pub use types::{DirectoryError, DirectoryResult, NewMessage};

/// Collection holding student records.
pub const PERSON: &str = "person";
/// Collection holding squads.
pub const SQUAD: &str = "squad";
/// Collection holding message board posts.
pub const MESSAGES: &str = "messages";
