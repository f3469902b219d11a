//! # spejare-engine
//!
//! The capture run loop: pulls frames from a source, classifies and reports
//! them, and enforces the termination policy (frame limit or interrupt).

pub mod error;
pub mod lifecycle;
pub mod runtime;
pub mod session;

pub use error::SessionError;
pub use lifecycle::{install_interrupt_handler, ShutdownFlag};
pub use runtime::{run_live, LiveOptions};
pub use session::{CaptureSession, SessionReport, SessionState};
