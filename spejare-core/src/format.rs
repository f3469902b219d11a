//! One-line event rendering.
//!
//! The formatter is a pure function of the decoded frame: the same frame
//! always renders to byte-identical output.

use crate::frame::{DnsDetail, Frame, HttpDetail};

/// Millisecond-precision local timestamp, e.g. `2026-08-29 14:03:07.123`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Column widths shared by the banner and the data lines.
const TIME_WIDTH: usize = 26;
const PROTO_WIDTH: usize = 6;

/// Separator between the fixed fields and between detail segments.
const SEP: &str = "  ";

/// Renders decoded frames as single report lines.
#[derive(Default, Debug, Copy, Clone)]
pub struct EventFormatter;

impl EventFormatter {
    /// Creates a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// The capture header emitted once before the first frame.
    pub fn banner(&self) -> String {
        format!(
            "Starting packet capture...\nPress Ctrl+C to stop\n\n\
             {:<TIME_WIDTH$}{SEP}{:<PROTO_WIDTH$}{SEP}{}\n{}",
            "Time",
            "Proto",
            "Info",
            "-".repeat(80)
        )
    }

    /// The summary line reported after the session stops.
    pub fn summary(&self, frames_processed: u64) -> String {
        format!("\nCaptured {frames_processed} packets.")
    }

    /// Formats one frame: fixed-width timestamp and transport tag, the raw
    /// length, then detail segments in DNS, HTTP, TCP, IP order. Absent
    /// categories are omitted entirely.
    pub fn format(&self, frame: &Frame) -> String {
        let timestamp = frame.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let mut line = format!(
            "{timestamp:<TIME_WIDTH$}{SEP}{:<PROTO_WIDTH$}{SEP}len={}",
            frame.transport(),
            frame.raw_length
        );

        let mut details: Vec<String> = Vec::new();

        match &frame.dns {
            Some(DnsDetail::Query(name)) => details.push(format!("DNS Query: {name}")),
            Some(DnsDetail::Response(data)) => details.push(format!("DNS Response: {data}")),
            None => {}
        }

        match &frame.http {
            Some(HttpDetail::Request { host, path }) => details.push(format!(
                "HTTP Request: {}{}",
                host.as_deref().unwrap_or("Unknown Host"),
                path
            )),
            Some(HttpDetail::Response { status }) => {
                details.push(format!("HTTP Response: Status {status}"))
            }
            None => {}
        }

        if let (Some(tcp), Some(ip)) = (&frame.tcp, &frame.ip) {
            details.push(format!(
                "TCP {}:{} -> {}:{} [{}]",
                ip.src, tcp.src_port, ip.dst, tcp.dst_port, tcp.flags
            ));
        }

        if let Some(ip) = &frame.ip {
            details.push(format!("IP {} -> {}", ip.src, ip.dst));
        }

        for detail in details {
            line.push_str(SEP);
            line.push_str(&detail);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{IpInfo, LayerTag, TcpInfo};
    use chrono::{Duration, Local, TimeZone};

    fn test_timestamp() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 45).unwrap() + Duration::milliseconds(123)
    }

    fn base_frame() -> Frame {
        Frame::new(test_timestamp(), 74)
    }

    #[test]
    fn other_frame_renders_prefix_only() {
        let line = EventFormatter::new().format(&base_frame());
        assert_eq!(line, "2024-03-05 14:30:45.123     OTHER   len=74");
    }

    #[test]
    fn tcp_syn_ack_detail() {
        let mut frame = base_frame();
        frame.layers.insert(LayerTag::Ip);
        frame.layers.insert(LayerTag::Tcp);
        frame.ip = Some(IpInfo {
            src: "10.0.0.1".parse().unwrap(),
            dst: "10.0.0.2".parse().unwrap(),
        });
        frame.tcp = Some(TcpInfo {
            src_port: 443,
            dst_port: 51000,
            flags: "SA".into(),
        });

        let line = EventFormatter::new().format(&frame);
        assert!(line.contains("TCP 10.0.0.1:443 -> 10.0.0.2:51000 [SA]"));
        assert!(line.ends_with("IP 10.0.0.1 -> 10.0.0.2"));
    }

    #[test]
    fn dns_query_detail() {
        let mut frame = base_frame();
        frame.layers.insert(LayerTag::Ip);
        frame.layers.insert(LayerTag::Udp);
        frame.layers.insert(LayerTag::Dns);
        frame.ip = Some(IpInfo {
            src: "192.168.1.2".parse().unwrap(),
            dst: "8.8.8.8".parse().unwrap(),
        });
        frame.dns = Some(DnsDetail::Query("example.com".into()));

        let line = EventFormatter::new().format(&frame);
        assert!(line.contains("UDP"));
        assert!(line.contains("DNS Query: example.com"));
        // DNS detail comes before the IP detail.
        let dns_at = line.find("DNS Query").unwrap();
        let ip_at = line.find("IP 192.168.1.2").unwrap();
        assert!(dns_at < ip_at);
    }

    #[test]
    fn http_request_without_host_uses_sentinel() {
        let mut frame = base_frame();
        frame.layers.insert(LayerTag::Ip);
        frame.layers.insert(LayerTag::Tcp);
        frame.layers.insert(LayerTag::HttpRequest);
        frame.ip = Some(IpInfo {
            src: "10.0.0.1".parse().unwrap(),
            dst: "10.0.0.2".parse().unwrap(),
        });
        frame.tcp = Some(TcpInfo {
            src_port: 51000,
            dst_port: 80,
            flags: "PA".into(),
        });
        frame.http = Some(HttpDetail::Request {
            host: None,
            path: "/".into(),
        });

        let line = EventFormatter::new().format(&frame);
        assert!(line.contains("HTTP Request: Unknown Host/"));
    }

    #[test]
    fn http_response_detail() {
        let mut frame = base_frame();
        frame.layers.insert(LayerTag::Tcp);
        frame.http = Some(HttpDetail::Response {
            status: "404".into(),
        });

        let line = EventFormatter::new().format(&frame);
        assert!(line.contains("HTTP Response: Status 404"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let mut frame = base_frame();
        frame.layers.insert(LayerTag::Ip);
        frame.ip = Some(IpInfo {
            src: "10.0.0.1".parse().unwrap(),
            dst: "10.0.0.2".parse().unwrap(),
        });

        let formatter = EventFormatter::new();
        assert_eq!(formatter.format(&frame), formatter.format(&frame));
    }

    #[test]
    fn banner_columns_match_data_line_widths() {
        let banner = EventFormatter::new().banner();
        let header = banner
            .lines()
            .find(|l| l.starts_with("Time"))
            .unwrap()
            .to_string();
        assert_eq!(header.find("Proto"), Some(28));
        assert_eq!(header.find("Info"), Some(36));

        let line = EventFormatter::new().format(&base_frame());
        assert_eq!(line.find("OTHER"), Some(28));
        assert_eq!(line.find("len="), Some(36));
    }

    #[test]
    fn summary_reports_count() {
        assert_eq!(EventFormatter::new().summary(5), "\nCaptured 5 packets.");
    }
}
