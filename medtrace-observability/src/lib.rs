//! # medtrace-observability
//!
//! Structured logging for the risk engine: subscriber setup driven by
//! `MEDTRACE_LOG` or [`ObservabilityConfig`](medtrace_core::config::ObservabilityConfig),
//! and one event function per aggregation so log fields stay consistent.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
