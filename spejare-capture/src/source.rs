//! The frame source contract consumed by the capture session.

use thiserror::Error;

use crate::frame::RawFrame;

/// Errors raised by a frame source. All variants are fatal to the session;
/// recoverable conditions (an empty poll window) are `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No capture device with the requested name exists.
    #[error("capture device '{name}' not found")]
    DeviceNotFound { name: String },

    /// No interface was given and the platform offers no default device.
    #[error("no default capture device available")]
    NoDefaultDevice,

    /// Opening the capture handle failed (missing permissions, device gone).
    #[error("failed to open capture on '{interface}': {source}")]
    Open {
        interface: String,
        source: pcap::Error,
    },

    /// The supplied filter expression was rejected by the capture backend.
    #[error("failed to install filter '{filter}': {source}")]
    Filter {
        filter: String,
        source: pcap::Error,
    },

    /// The device failed mid-capture.
    #[error("capture failed: {0}")]
    Capture(#[from] pcap::Error),
}

/// A blocking supplier of raw frames.
///
/// `next_frame` returns `Ok(Some(frame))` for a delivered frame and
/// `Ok(None)` when a poll window elapsed without one; the caller re-checks
/// its stop conditions between polls, which is what makes cancellation of
/// the blocking pull cooperative.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>, SourceError>;

    /// Asks the source to stop delivering frames. Called once when the
    /// session leaves its running state.
    fn halt(&mut self) {}
}
