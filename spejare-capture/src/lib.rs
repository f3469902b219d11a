//! # spejare-capture
//!
//! Frame acquisition for Spejare. Defines the `FrameSource` contract the
//! capture session pulls from and the pcap-backed live implementation.

pub mod frame;
pub mod live;
pub mod source;

pub use frame::RawFrame;
pub use live::LiveCapture;
pub use source::{FrameSource, SourceError};
