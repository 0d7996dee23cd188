//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! JSONP service produces:
//!     → tracing events (per-request decision, drain failures)
//!     → metrics.rs (outcome counters, rewritten body sizes)
//!
//! Consumers:
//!     → whatever tracing subscriber the host application installs
//!     → whatever metrics recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder
//! - Metrics are no-ops until a recorder is installed

pub mod metrics;
