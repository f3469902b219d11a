//! The decoded frame model.

use std::fmt;
use std::net::Ipv4Addr;

use chrono::{DateTime, Local};

/// A protocol layer positively identified within a frame. Absence of a tag
/// means "not detected", not "absent from the wire".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerTag {
    Ip,
    Tcp,
    Udp,
    Icmp,
    Dns,
    HttpRequest,
    HttpResponse,
}

impl LayerTag {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of layer tags detected for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerSet(u8);

impl LayerSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, tag: LayerTag) {
        self.0 |= tag.bit();
    }

    pub const fn contains(self, tag: LayerTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Transport-level summary tag. Strict precedence: TCP > UDP > ICMP > OTHER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportProto {
    Tcp,
    Udp,
    Icmp,
    Other,
}

impl TransportProto {
    pub const fn as_str(self) -> &'static str {
        match self {
            TransportProto::Tcp => "TCP",
            TransportProto::Udp => "UDP",
            TransportProto::Icmp => "ICMP",
            TransportProto::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransportProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Network-layer addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpInfo {
    pub src: Ipv4Addr,
    pub dst: Ipv4Addr,
}

/// Transport-layer endpoints plus the rendered flag string ("SA", "F", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpInfo {
    pub src_port: u16,
    pub dst_port: u16,
    pub flags: String,
}

/// DNS report detail; query takes priority over response data when a
/// message carries both sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsDetail {
    Query(String),
    Response(String),
}

/// HTTP report detail; request and response are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpDetail {
    Request {
        host: Option<String>,
        path: String,
    },
    Response {
        status: String,
    },
}

/// One decoded frame: capture metadata, the detected layer set, and the
/// per-layer fields the reporter needs. Detail fields are populated only
/// when the corresponding tag is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub timestamp: DateTime<Local>,
    pub raw_length: usize,
    pub layers: LayerSet,
    pub ip: Option<IpInfo>,
    pub tcp: Option<TcpInfo>,
    pub dns: Option<DnsDetail>,
    pub http: Option<HttpDetail>,
}

impl Frame {
    /// A frame with no layers detected yet.
    pub fn new(timestamp: DateTime<Local>, raw_length: usize) -> Self {
        Self {
            timestamp,
            raw_length,
            layers: LayerSet::empty(),
            ip: None,
            tcp: None,
            dns: None,
            http: None,
        }
    }

    /// Transport-level classification under strict precedence
    /// TCP > UDP > ICMP > OTHER. Higher-layer matches (DNS, HTTP) never
    /// replace the transport tag.
    pub fn transport(&self) -> TransportProto {
        if self.layers.contains(LayerTag::Tcp) {
            TransportProto::Tcp
        } else if self.layers.contains(LayerTag::Udp) {
            TransportProto::Udp
        } else if self.layers.contains(LayerTag::Icmp) {
            TransportProto::Icmp
        } else {
            TransportProto::Other
        }
    }
}
