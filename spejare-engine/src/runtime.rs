//! Live-mode orchestration: wire the pcap source, the interrupt handler and
//! the session together on a blocking worker.

use tokio::task::spawn_blocking;
use tracing::{debug, info, instrument};

use spejare_capture::LiveCapture;
use spejare_config::SpejareConfig;
use spejare_telemetry::MetricsRecorder;

use crate::error::SessionError;
use crate::lifecycle::{install_interrupt_handler, ShutdownFlag};
use crate::session::{CaptureSession, SessionReport};

/// Capture invocation parameters from the command line.
#[derive(Debug, Clone, Default)]
pub struct LiveOptions {
    /// Capture device; the backend picks a default when absent.
    pub interface: Option<String>,
    /// Filter expression, passed to the backend opaquely.
    pub filter: Option<String>,
    /// Frame limit; 0 means unlimited.
    pub count: u64,
}

/// Runs a live capture to completion. pcap pulls are blocking, so the
/// session runs on a blocking worker while the interrupt handler lives on
/// the async runtime.
#[instrument(skip_all, fields(interface = opts.interface.as_deref().unwrap_or("<default>")))]
pub async fn run_live(
    opts: LiveOptions,
    config: SpejareConfig,
    metrics: MetricsRecorder,
) -> Result<SessionReport, SessionError> {
    debug!(capture = ?config.capture, "starting live capture");

    let source = LiveCapture::open(
        opts.interface.as_deref(),
        opts.filter.as_deref(),
        config.capture.snaplen,
        config.capture.promiscuous,
        config.capture.poll_timeout_ms,
    )?;

    let shutdown = ShutdownFlag::new();
    install_interrupt_handler(shutdown.clone());

    let session = CaptureSession::new(source, std::io::stdout(), opts.count, shutdown, metrics);
    let report = spawn_blocking(move || session.run()).await??;

    info!(frames = report.frames_processed, "live capture finished");
    Ok(report)
}
