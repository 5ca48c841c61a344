//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Route handlers, content service client:
//!     → logging.rs (structured log events, request spans via tower-http)
//!     → metrics.rs (outbound call counters and latency)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
