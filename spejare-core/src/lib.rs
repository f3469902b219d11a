//! # spejare-core
//!
//! Frame classification core: the decoded frame model, the layer decoder
//! and the line formatter. Everything here is pure; capture I/O lives in
//! `spejare-capture` and loop control in `spejare-engine`.

pub mod decode;
pub mod format;
pub mod frame;

pub use decode::Decoder;
pub use format::EventFormatter;
pub use frame::{DnsDetail, Frame, HttpDetail, IpInfo, LayerSet, LayerTag, TcpInfo, TransportProto};
