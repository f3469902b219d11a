//! The capture session: the single run loop of the sniffer.

use std::io::Write;

use tracing::{debug, error, info, trace};

use spejare_capture::FrameSource;
use spejare_core::{Decoder, EventFormatter};
use spejare_telemetry::MetricsRecorder;

use crate::error::SessionError;
use crate::lifecycle::ShutdownFlag;

/// Session lifecycle states. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopping,
    Stopped,
}

/// Final accounting of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Frames pulled and reported before the stop condition, incremented
    /// exactly once per observed frame whether or not any layer matched.
    pub frames_processed: u64,
}

/// Owns the run loop: pull frame, decode, format, emit, repeat until the
/// frame limit is reached or a stop is requested. The stop flag and the
/// limit are checked once per frame boundary; an in-flight frame always
/// completes.
pub struct CaptureSession<S, W> {
    source: S,
    sink: W,
    decoder: Decoder,
    formatter: EventFormatter,
    shutdown: ShutdownFlag,
    metrics: MetricsRecorder,
    /// 0 means unlimited.
    limit: u64,
    frames_processed: u64,
    state: SessionState,
}

impl<S: FrameSource, W: Write> CaptureSession<S, W> {
    pub fn new(
        source: S,
        sink: W,
        limit: u64,
        shutdown: ShutdownFlag,
        metrics: MetricsRecorder,
    ) -> Self {
        Self {
            source,
            sink,
            decoder: Decoder::new(),
            formatter: EventFormatter::new(),
            shutdown,
            metrics,
            limit,
            frames_processed: 0,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the session to completion and reports the final frame count.
    /// Consumes the session; no further operations are valid afterwards.
    pub fn run(mut self) -> Result<SessionReport, SessionError> {
        writeln!(self.sink, "{}", self.formatter.banner())?;
        debug!(limit = self.limit, "capture session running");

        while self.state == SessionState::Running {
            if self.shutdown.is_set() {
                debug!("stop requested, leaving run loop");
                self.state = SessionState::Stopping;
                break;
            }

            match self.source.next_frame() {
                Ok(Some(raw)) => {
                    self.frames_processed += 1;
                    self.metrics.inc_frames();

                    let frame = self.decoder.decode(&raw);
                    trace!(
                        frames = self.frames_processed,
                        len = frame.raw_length,
                        "frame classified"
                    );
                    writeln!(self.sink, "{}", self.formatter.format(&frame))?;

                    if self.limit != 0 && self.frames_processed >= self.limit {
                        debug!(limit = self.limit, "frame limit reached");
                        self.state = SessionState::Stopping;
                    }
                }
                // Empty poll window; loop back and re-check the stop flag.
                Ok(None) => continue,
                Err(e) => {
                    error!(error = %e, "frame source failed, aborting capture");
                    self.state = SessionState::Stopped;
                    return Err(e.into());
                }
            }
        }

        self.source.halt();
        self.state = SessionState::Stopped;
        info!(frames = self.frames_processed, "capture session stopped");

        Ok(SessionReport {
            frames_processed: self.frames_processed,
        })
    }
}
