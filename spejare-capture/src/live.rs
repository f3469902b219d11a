//! Live capture over pcap.

use pcap::{Active, Capture, Device};
use tracing::{debug, info};

use crate::frame::RawFrame;
use crate::source::{FrameSource, SourceError};

/// A pcap-backed frame source for a live network interface.
///
/// The capture handle is opened with a read timeout so that `next_frame`
/// returns at least once per poll window even on a silent network; the
/// session uses those empty polls to observe its stop flag.
pub struct LiveCapture {
    capture: Capture<Active>,
    halted: bool,
}

impl LiveCapture {
    /// Opens a capture on `interface`, or on the platform default device
    /// when no interface is given. `filter` is handed to the backend
    /// verbatim; Spejare does not parse or validate filter expressions.
    pub fn open(
        interface: Option<&str>,
        filter: Option<&str>,
        snaplen: usize,
        promiscuous: bool,
        poll_timeout_ms: u32,
    ) -> Result<Self, SourceError> {
        let device = match interface {
            Some(name) => Device::list()?
                .into_iter()
                .find(|d| d.name == name)
                .ok_or_else(|| SourceError::DeviceNotFound { name: name.into() })?,
            None => Device::lookup()?.ok_or(SourceError::NoDefaultDevice)?,
        };
        let name = device.name.clone();
        info!(interface = %name, promiscuous, snaplen, "opening live capture");

        let mut capture = Capture::from_device(device)
            .map_err(|source| SourceError::Open {
                interface: name.clone(),
                source,
            })?
            .promisc(promiscuous)
            .snaplen(snaplen as i32)
            .timeout(poll_timeout_ms as i32)
            .open()
            .map_err(|source| SourceError::Open {
                interface: name.clone(),
                source,
            })?;

        if let Some(expr) = filter {
            debug!(filter = %expr, "installing capture filter");
            capture
                .filter(expr, true)
                .map_err(|source| SourceError::Filter {
                    filter: expr.into(),
                    source,
                })?;
        }

        Ok(Self {
            capture,
            halted: false,
        })
    }
}

impl FrameSource for LiveCapture {
    fn next_frame(&mut self) -> Result<Option<RawFrame>, SourceError> {
        if self.halted {
            return Ok(None);
        }
        match self.capture.next_packet() {
            Ok(packet) => Ok(Some(RawFrame::new(packet.data.to_vec()))),
            // No frame within the poll window; let the caller re-check its
            // stop conditions.
            Err(pcap::Error::TimeoutExpired) => Ok(None),
            Err(e) => Err(SourceError::Capture(e)),
        }
    }

    fn halt(&mut self) {
        self.halted = true;
    }
}
