//! # Spejare Protocol Parsers
//!
//! Per-layer packet parsers for the capture pipeline: Ethernet, IPv4, TCP,
//! UDP, ICMP, DNS and HTTP. Each parser is independent and best-effort; a
//! failed parse of one layer never prevents other layers of the same frame
//! from being inspected.

pub mod dns;
pub mod ethernet;
pub mod http;
pub mod icmp;
pub mod ipv4;
pub mod tcp;
pub mod udp;

pub use dns::{DnsParseError, DnsParser, DnsRecord};
pub use ethernet::{EthernetFrame, EthernetParseError, EthernetParser, ETHERTYPE_IPV4};
pub use http::{HttpMessage, HttpParseError, HttpParser};
pub use icmp::{IcmpPacket, IcmpParseError, IcmpParser};
pub use ipv4::{Ipv4Packet, Ipv4ParseError, Ipv4Parser, IP_PROTO_ICMP, IP_PROTO_TCP, IP_PROTO_UDP};
pub use tcp::{TcpParseError, TcpParser, TcpSegment};
pub use udp::{UdpDatagram, UdpParseError, UdpParser};
