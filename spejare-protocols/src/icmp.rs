//! ## spejare-protocols::icmp
//! Minimal ICMP header parser; the classifier only needs type and code.

use thiserror::Error;

/// ICMP-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum IcmpParseError {
    /// The packet is too short to contain an ICMP header.
    #[error("Insufficient data to parse ICMP header")]
    InsufficientData,
}

/// An ICMP packet header.
#[derive(Debug, Copy, Clone)]
pub struct IcmpPacket {
    /// Message type (8 = echo request, 0 = echo reply, ...).
    pub icmp_type: u8,
    /// Message code.
    pub code: u8,
}

/// A simple ICMP parser.
#[derive(Default, Debug, Copy, Clone)]
pub struct IcmpParser;

impl IcmpParser {
    /// Creates a new ICMP parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses an ICMP header from a raw byte slice.
    pub fn parse(&self, data: &[u8]) -> Result<IcmpPacket, IcmpParseError> {
        if data.len() < 4 {
            return Err(IcmpParseError::InsufficientData);
        }

        Ok(IcmpPacket {
            icmp_type: data[0],
            code: data[1],
        })
    }
}
