//! ## spejare-protocols::dns
//! DNS message parser used for classification and reporting.
//!
//! Detection is by header pattern, not port number: the counts and opcode
//! must look plausible before anything is reported. Name decoding is
//! label-by-label; compression pointers are treated as a parse failure and
//! the whole message is omitted by the caller.

use std::net::{Ipv4Addr, Ipv6Addr};

use thiserror::Error;

/// Resource-record types the reporter can render.
const RR_TYPE_A: u16 = 1;
const RR_TYPE_NS: u16 = 2;
const RR_TYPE_CNAME: u16 = 5;
const RR_TYPE_PTR: u16 = 12;
const RR_TYPE_TXT: u16 = 16;
const RR_TYPE_AAAA: u16 = 28;

/// DNS-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DnsParseError {
    /// The payload is too short to contain a DNS header.
    #[error("Insufficient data to parse DNS header")]
    InsufficientData,
    /// The header fields do not look like DNS.
    #[error("Header does not match the DNS pattern")]
    NotDns,
    /// A name uses message compression, which this parser does not follow.
    #[error("Compressed DNS name")]
    CompressedName,
    /// A name has an out-of-bounds, oversized or non-ASCII label.
    #[error("Malformed DNS name")]
    MalformedName,
    /// A resource record is truncated or its rdata cannot be rendered.
    #[error("Malformed DNS resource record")]
    MalformedRecord,
}

/// What a DNS message contributed to the report: the first question name, or
/// (only when no question section exists) the first answer's rendered rdata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    Query(String),
    Response(String),
}

/// A best-effort DNS parser.
#[derive(Default, Debug, Copy, Clone)]
pub struct DnsParser;

impl DnsParser {
    /// Creates a new DNS parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a DNS message from a UDP payload.
    ///
    /// A question record takes priority over answers: a standard response
    /// still carries its question section and is reported as a query.
    pub fn parse(&self, data: &[u8]) -> Result<DnsRecord, DnsParseError> {
        if data.len() < 12 {
            return Err(DnsParseError::InsufficientData);
        }

        let flags = u16::from_be_bytes([data[2], data[3]]);
        let opcode = (flags >> 11) & 0x0F;
        // Opcode 0-2 (query, iquery, status) and a zero Z bit.
        if opcode > 2 || (flags >> 6) & 0x01 != 0 {
            return Err(DnsParseError::NotDns);
        }

        let qdcount = u16::from_be_bytes([data[4], data[5]]);
        let ancount = u16::from_be_bytes([data[6], data[7]]);
        let nscount = u16::from_be_bytes([data[8], data[9]]);
        let arcount = u16::from_be_bytes([data[10], data[11]]);
        if qdcount == 0 && ancount == 0 {
            return Err(DnsParseError::NotDns);
        }
        if qdcount > 8 || ancount > 32 || nscount > 32 || arcount > 32 {
            return Err(DnsParseError::NotDns);
        }

        let body = &data[12..];
        if qdcount > 0 {
            let (name, _) = decode_name(body)?;
            Ok(DnsRecord::Query(name))
        } else {
            Ok(DnsRecord::Response(first_answer(body)?))
        }
    }
}

/// Decodes and renders the rdata of the first resource record in `body`.
fn first_answer(body: &[u8]) -> Result<String, DnsParseError> {
    let (_owner, rest) = decode_name(body)?;
    // TYPE, CLASS, TTL, RDLENGTH.
    if rest.len() < 10 {
        return Err(DnsParseError::MalformedRecord);
    }
    let rr_type = u16::from_be_bytes([rest[0], rest[1]]);
    let rdlength = u16::from_be_bytes([rest[8], rest[9]]) as usize;
    let rdata = rest
        .get(10..10 + rdlength)
        .ok_or(DnsParseError::MalformedRecord)?;
    render_rdata(rr_type, rdata)
}

fn render_rdata(rr_type: u16, rdata: &[u8]) -> Result<String, DnsParseError> {
    match rr_type {
        RR_TYPE_A if rdata.len() == 4 => {
            Ok(Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]).to_string())
        }
        RR_TYPE_AAAA if rdata.len() == 16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(rdata);
            Ok(Ipv6Addr::from(octets).to_string())
        }
        RR_TYPE_NS | RR_TYPE_CNAME | RR_TYPE_PTR => decode_name(rdata).map(|(name, _)| name),
        RR_TYPE_TXT => {
            // Character string: one length byte, then text.
            let len = *rdata.first().ok_or(DnsParseError::MalformedRecord)? as usize;
            let text = rdata.get(1..1 + len).ok_or(DnsParseError::MalformedRecord)?;
            std::str::from_utf8(text)
                .map(str::to_owned)
                .map_err(|_| DnsParseError::MalformedRecord)
        }
        _ => Err(DnsParseError::MalformedRecord),
    }
}

/// Decodes a label-sequence name, returning the dotted name (no trailing
/// dot) and the bytes following the terminating zero label.
fn decode_name(data: &[u8]) -> Result<(String, &[u8]), DnsParseError> {
    let mut name = String::new();
    let mut pos = 0;

    loop {
        let len = *data.get(pos).ok_or(DnsParseError::MalformedName)? as usize;
        if len == 0 {
            return Ok((name, &data[pos + 1..]));
        }
        if len & 0xC0 != 0 {
            return Err(DnsParseError::CompressedName);
        }
        let label = data
            .get(pos + 1..pos + 1 + len)
            .ok_or(DnsParseError::MalformedName)?;
        let label = std::str::from_utf8(label).map_err(|_| DnsParseError::MalformedName)?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(label);
        if name.len() > 253 {
            return Err(DnsParseError::MalformedName);
        }
        pos += 1 + len;
    }
}
