//! ## spejare-protocols::ipv4
//! IPv4 header parser with total-length bounded payloads.

use std::net::Ipv4Addr;

use thiserror::Error;

/// IP protocol number for ICMP.
pub const IP_PROTO_ICMP: u8 = 1;
/// IP protocol number for TCP.
pub const IP_PROTO_TCP: u8 = 6;
/// IP protocol number for UDP.
pub const IP_PROTO_UDP: u8 = 17;

/// IPv4-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Ipv4ParseError {
    /// The packet is too short to contain an IPv4 header.
    #[error("Insufficient data to parse IPv4 header")]
    InsufficientData,
    /// The version field is not 4.
    #[error("Invalid IP version")]
    InvalidVersion,
    /// The IHL field points outside the packet.
    #[error("Invalid IPv4 header length")]
    InvalidHeaderLength,
}

/// An IPv4 packet with a zero-copy payload slice.
#[derive(Debug, Copy, Clone)]
pub struct Ipv4Packet<'a> {
    /// Source address.
    pub src: Ipv4Addr,
    /// Destination address.
    pub dst: Ipv4Addr,
    /// Protocol number of the encapsulated payload.
    pub protocol: u8,
    /// Payload bytes, bounded by the total-length field. Link-layer padding
    /// past total-length is excluded.
    pub payload: &'a [u8],
}

/// A simple IPv4 parser. Checksums are not verified (best-effort decoding).
#[derive(Default, Debug, Copy, Clone)]
pub struct Ipv4Parser;

impl Ipv4Parser {
    /// Creates a new IPv4 parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses an IPv4 packet from a raw byte slice.
    pub fn parse<'a>(&self, data: &'a [u8]) -> Result<Ipv4Packet<'a>, Ipv4ParseError> {
        if data.len() < 20 {
            return Err(Ipv4ParseError::InsufficientData);
        }

        let version = data[0] >> 4;
        if version != 4 {
            return Err(Ipv4ParseError::InvalidVersion);
        }

        let header_len = ((data[0] & 0x0F) as usize) * 4;
        if header_len < 20 || header_len > data.len() {
            return Err(Ipv4ParseError::InvalidHeaderLength);
        }

        let total_len = u16::from_be_bytes([data[2], data[3]]) as usize;
        let protocol = data[9];
        let src = Ipv4Addr::new(data[12], data[13], data[14], data[15]);
        let dst = Ipv4Addr::new(data[16], data[17], data[18], data[19]);

        // A snaplen-truncated capture can report more bytes than were kept;
        // padded Ethernet frames can carry more bytes than total-length.
        let end = total_len.clamp(header_len, data.len());

        Ok(Ipv4Packet {
            src,
            dst,
            protocol,
            payload: &data[header_len..end],
        })
    }
}
