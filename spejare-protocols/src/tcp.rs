//! ## spejare-protocols::tcp
//! TCP header parser with symbolic flag rendering.

use thiserror::Error;

/// TCP flag bits as carried in byte 13 of the header.
pub mod flags {
    pub const FIN: u8 = 0x01;
    pub const SYN: u8 = 0x02;
    pub const RST: u8 = 0x04;
    pub const PSH: u8 = 0x08;
    pub const ACK: u8 = 0x10;
    pub const URG: u8 = 0x20;
}

/// Rendering order for the symbolic flag string: FIN, SYN, RST, PSH, ACK,
/// URG, so SYN+ACK comes out as "SA".
const FLAG_SYMBOLS: [(u8, char); 6] = [
    (flags::FIN, 'F'),
    (flags::SYN, 'S'),
    (flags::RST, 'R'),
    (flags::PSH, 'P'),
    (flags::ACK, 'A'),
    (flags::URG, 'U'),
];

/// TCP-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TcpParseError {
    /// The segment is too short to contain a TCP header.
    #[error("Insufficient data to parse TCP header")]
    InsufficientData,
    /// The data-offset field is out of range.
    #[error("Invalid TCP data offset")]
    InvalidDataOffset,
}

/// A TCP segment with a zero-copy payload slice.
#[derive(Debug, Copy, Clone)]
pub struct TcpSegment<'a> {
    /// Source port.
    pub src_port: u16,
    /// Destination port.
    pub dst_port: u16,
    /// Flag bits (FIN/SYN/RST/PSH/ACK/URG).
    pub flags: u8,
    /// Payload after the header and options.
    pub payload: &'a [u8],
}

impl TcpSegment<'_> {
    /// Renders the set flag bits as a short symbolic string, e.g. "S" for a
    /// bare SYN or "SA" for SYN+ACK.
    pub fn flag_string(&self) -> String {
        FLAG_SYMBOLS
            .iter()
            .filter(|(bit, _)| self.flags & bit != 0)
            .map(|(_, symbol)| symbol)
            .collect()
    }
}

/// A simple TCP parser. Options are skipped, not interpreted.
#[derive(Default, Debug, Copy, Clone)]
pub struct TcpParser;

impl TcpParser {
    /// Creates a new TCP parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a TCP segment from a raw byte slice.
    pub fn parse<'a>(&self, data: &'a [u8]) -> Result<TcpSegment<'a>, TcpParseError> {
        if data.len() < 20 {
            return Err(TcpParseError::InsufficientData);
        }

        let src_port = u16::from_be_bytes([data[0], data[1]]);
        let dst_port = u16::from_be_bytes([data[2], data[3]]);

        let data_offset = ((data[12] >> 4) as usize) * 4;
        if data_offset < 20 || data_offset > data.len() {
            return Err(TcpParseError::InvalidDataOffset);
        }

        let flags = data[13] & 0x3F;

        Ok(TcpSegment {
            src_port,
            dst_port,
            flags,
            payload: &data[data_offset..],
        })
    }
}
