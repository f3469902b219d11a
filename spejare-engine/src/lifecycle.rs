//! Cooperative shutdown: an interrupt handler that only sets a flag.
//!
//! The handler never touches decoder or formatter state and never terminates
//! the process; the session observes the flag at frame boundaries, so an
//! in-flight decode always completes before the stop takes effect.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

/// A set-once stop flag shared between the interrupt handler and the
/// capture session. Requesting a stop never blocks and is never cleared.
#[derive(Clone, Debug, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag. Returns true only for the call that actually set it,
    /// so repeated interrupts stay idempotent.
    pub fn request_stop(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Installs the process interrupt handler. The first delivery sets the flag
/// and logs once; later deliveries only ensure the flag stays set.
pub fn install_interrupt_handler(flag: ShutdownFlag) {
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "unable to listen for interrupt signal");
                return;
            }
            if flag.request_stop() {
                info!("stopping packet capture");
            }
        }
    });
}
