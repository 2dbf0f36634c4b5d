//! Metric names for courier.
//!
//! Library crates only record through the `metrics` facade; installing a
//! recorder (Prometheus or otherwise) is left to the host process.
//!
//! ```rust,ignore
//! use courier_metrics::{counter, labels, messaging, tool_results};
//!
//! counter!(tool_results::SANITIZED_TOTAL).increment(1);
//! counter!(messaging::SENDS_EXTRACTED_TOTAL, labels::PROVIDER => "slack").increment(1);
//! ```

mod definitions;

pub use definitions::*;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};
