//! ## spejare-telemetry::logging
//! Structured logging with tracing.
//!
//! Diagnostics go to stderr: stdout is reserved for the per-frame capture
//! lines, so log output must not be interleaved with it.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }
}
