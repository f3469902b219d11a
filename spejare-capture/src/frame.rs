//! A raw captured frame plus its capture metadata.

use bytes::Bytes;
use chrono::{DateTime, Local};

/// One captured unit of raw network data. Owned by a single iteration of the
/// capture session; cloning shares the underlying buffer.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Arrival time, local clock. The reporter only uses millisecond
    /// precision.
    pub timestamp: DateTime<Local>,
    /// The frame bytes as captured (up to the snap length).
    pub data: Bytes,
}

impl RawFrame {
    /// Creates a frame stamped with the current local time.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            timestamp: Local::now(),
            data: Bytes::from(data),
        }
    }

    /// Creates a frame with an explicit timestamp.
    pub fn with_timestamp(timestamp: DateTime<Local>, data: Vec<u8>) -> Self {
        Self {
            timestamp,
            data: Bytes::from(data),
        }
    }

    /// Total byte length of the frame as captured.
    pub fn raw_length(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_length_tracks_data() {
        let frame = RawFrame::new(vec![0u8; 64]);
        assert_eq!(frame.raw_length(), 64);
    }
}
