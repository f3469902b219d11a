//! Packet capture parameters for the live source.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Capture configuration handed to the pcap source.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CaptureConfig {
    /// Run the interface in promiscuous mode?
    #[serde(default = "default_promiscuous")]
    pub promiscuous: bool,

    /// Snap length: bytes kept per captured frame.
    #[serde(default = "default_snaplen")]
    #[validate(range(min = 256, max = 1048576))]
    pub snaplen: usize,

    /// Read timeout of the capture handle in milliseconds. This bounds how
    /// long a stop request can go unobserved on a silent network.
    #[serde(default = "default_poll_timeout_ms")]
    #[validate(range(min = 1, max = 5000))]
    pub poll_timeout_ms: u32,
}

fn default_promiscuous() -> bool {
    true
}

fn default_snaplen() -> usize {
    65535
}

fn default_poll_timeout_ms() -> u32 {
    1000
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            promiscuous: default_promiscuous(),
            snaplen: default_snaplen(),
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}
