//! ## spejare-protocols::ethernet
//! Fixed-offset Ethernet II header parser.

use thiserror::Error;

/// EtherType for IPv4 payloads.
pub const ETHERTYPE_IPV4: u16 = 0x0800;

/// Ethernet-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EthernetParseError {
    /// The frame is too short to contain an Ethernet II header.
    #[error("Insufficient data to parse Ethernet header")]
    InsufficientData,
}

/// An Ethernet II frame with a zero-copy payload slice.
#[derive(Debug, Copy, Clone)]
pub struct EthernetFrame<'a> {
    /// Destination MAC address.
    pub dst: [u8; 6],
    /// Source MAC address.
    pub src: [u8; 6],
    /// EtherType of the encapsulated payload.
    pub ethertype: u16,
    /// Everything after the 14-byte header.
    pub payload: &'a [u8],
}

/// A simple Ethernet II parser.
#[derive(Default, Debug, Copy, Clone)]
pub struct EthernetParser;

impl EthernetParser {
    /// Creates a new Ethernet parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses an Ethernet II frame from a raw byte slice.
    pub fn parse<'a>(&self, data: &'a [u8]) -> Result<EthernetFrame<'a>, EthernetParseError> {
        if data.len() < 14 {
            return Err(EthernetParseError::InsufficientData);
        }

        let mut dst = [0u8; 6];
        let mut src = [0u8; 6];
        dst.copy_from_slice(&data[0..6]);
        src.copy_from_slice(&data[6..12]);
        let ethertype = u16::from_be_bytes([data[12], data[13]]);

        Ok(EthernetFrame {
            dst,
            src,
            ethertype,
            payload: &data[14..],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ipv4_frame() {
        let mut frame = vec![
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // dst
            0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, // src
            0x08, 0x00, // IPv4
        ];
        frame.extend_from_slice(b"payload");

        let eth = EthernetParser::new().parse(&frame).unwrap();
        assert_eq!(eth.ethertype, ETHERTYPE_IPV4);
        assert_eq!(eth.dst, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert_eq!(eth.payload, b"payload");
    }

    #[test]
    fn rejects_short_frame() {
        let frame = [0u8; 13];
        let result = EthernetParser::new().parse(&frame);
        assert_eq!(result.unwrap_err(), EthernetParseError::InsufficientData);
    }
}
