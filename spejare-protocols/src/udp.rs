//! ## spejare-protocols::udp
//! UDP header parser.

use thiserror::Error;

/// UDP-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UdpParseError {
    /// The datagram is too short to contain a UDP header.
    #[error("Insufficient data to parse UDP header")]
    InsufficientData,
    /// The length field is smaller than the header itself.
    #[error("Malformed UDP length field")]
    MalformedLength,
}

/// A UDP datagram with a zero-copy payload slice.
#[derive(Debug, Copy, Clone)]
pub struct UdpDatagram<'a> {
    /// Source port.
    pub src_port: u16,
    /// Destination port.
    pub dst_port: u16,
    /// Payload bytes, bounded by the length field.
    pub payload: &'a [u8],
}

/// A simple UDP parser. Checksums are not verified.
#[derive(Default, Debug, Copy, Clone)]
pub struct UdpParser;

impl UdpParser {
    /// Creates a new UDP parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a UDP datagram from a raw byte slice.
    pub fn parse<'a>(&self, data: &'a [u8]) -> Result<UdpDatagram<'a>, UdpParseError> {
        if data.len() < 8 {
            return Err(UdpParseError::InsufficientData);
        }

        let src_port = u16::from_be_bytes([data[0], data[1]]);
        let dst_port = u16::from_be_bytes([data[2], data[3]]);
        let length = u16::from_be_bytes([data[4], data[5]]) as usize;
        if length < 8 {
            return Err(UdpParseError::MalformedLength);
        }

        let end = length.min(data.len());

        Ok(UdpDatagram {
            src_port,
            dst_port,
            payload: &data[8..end],
        })
    }
}
