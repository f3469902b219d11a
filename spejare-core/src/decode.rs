//! Layer decoding: raw frame bytes in, classified `Frame` out.
//!
//! Every layer is detected independently and best-effort. A parse failure
//! in one layer omits that layer's tag and fields and never aborts the
//! frame or the session.

use spejare_capture::RawFrame;
use spejare_protocols::{
    DnsParser, DnsRecord, EthernetParser, HttpMessage, HttpParser, IcmpParser, Ipv4Parser,
    TcpParser, UdpParser, ETHERTYPE_IPV4, IP_PROTO_ICMP, IP_PROTO_TCP, IP_PROTO_UDP,
};

use crate::frame::{DnsDetail, Frame, HttpDetail, IpInfo, LayerTag, TcpInfo};

/// Composes the per-protocol parsers into a frame classifier.
#[derive(Default, Debug, Copy, Clone)]
pub struct Decoder {
    ethernet: EthernetParser,
    ipv4: Ipv4Parser,
    tcp: TcpParser,
    udp: UdpParser,
    icmp: IcmpParser,
    dns: DnsParser,
    http: HttpParser,
}

impl Decoder {
    /// Creates a new decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes one captured frame. Never fails; frames that match nothing
    /// come back with an empty layer set.
    pub fn decode(&self, raw: &RawFrame) -> Frame {
        let mut frame = Frame::new(raw.timestamp, raw.raw_length());

        let Ok(eth) = self.ethernet.parse(&raw.data) else {
            return frame;
        };
        if eth.ethertype != ETHERTYPE_IPV4 {
            return frame;
        }
        let Ok(ip) = self.ipv4.parse(eth.payload) else {
            return frame;
        };

        frame.layers.insert(LayerTag::Ip);
        frame.ip = Some(IpInfo {
            src: ip.src,
            dst: ip.dst,
        });

        match ip.protocol {
            IP_PROTO_TCP => self.decode_tcp(ip.payload, &mut frame),
            IP_PROTO_UDP => self.decode_udp(ip.payload, &mut frame),
            IP_PROTO_ICMP => {
                if self.icmp.parse(ip.payload).is_ok() {
                    frame.layers.insert(LayerTag::Icmp);
                }
            }
            _ => {}
        }

        frame
    }

    fn decode_tcp(&self, data: &[u8], frame: &mut Frame) {
        let Ok(tcp) = self.tcp.parse(data) else {
            return;
        };
        frame.layers.insert(LayerTag::Tcp);
        frame.tcp = Some(TcpInfo {
            src_port: tcp.src_port,
            dst_port: tcp.dst_port,
            flags: tcp.flag_string(),
        });

        if tcp.payload.is_empty() {
            return;
        }
        match self.http.parse(tcp.payload) {
            Ok(HttpMessage::Request { path, host, .. }) => {
                frame.layers.insert(LayerTag::HttpRequest);
                frame.http = Some(HttpDetail::Request {
                    host: host.map(str::to_owned),
                    path: if path.is_empty() {
                        "/".to_owned()
                    } else {
                        path.to_owned()
                    },
                });
            }
            Ok(HttpMessage::Response { status }) => {
                frame.layers.insert(LayerTag::HttpResponse);
                frame.http = Some(HttpDetail::Response {
                    status: status.to_owned(),
                });
            }
            Err(_) => {}
        }
    }

    fn decode_udp(&self, data: &[u8], frame: &mut Frame) {
        let Ok(udp) = self.udp.parse(data) else {
            return;
        };
        frame.layers.insert(LayerTag::Udp);

        // Header-pattern detection, not port matching: the tag is set only
        // when the payload parses and something could be extracted.
        match self.dns.parse(udp.payload) {
            Ok(DnsRecord::Query(name)) => {
                frame.layers.insert(LayerTag::Dns);
                frame.dns = Some(DnsDetail::Query(name));
            }
            Ok(DnsRecord::Response(data)) => {
                frame.layers.insert(LayerTag::Dns);
                frame.dns = Some(DnsDetail::Response(data));
            }
            Err(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::TransportProto;
    use spejare_protocols::tcp::flags;

    // Byte-level builders for synthetic frames.

    fn ethernet(ethertype: u16, payload: &[u8]) -> Vec<u8> {
        let mut frame = vec![0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB];
        frame.extend_from_slice(&ethertype.to_be_bytes());
        frame.extend_from_slice(payload);
        frame
    }

    fn ipv4(protocol: u8, src: [u8; 4], dst: [u8; 4], payload: &[u8]) -> Vec<u8> {
        let total_len = (20 + payload.len()) as u16;
        let mut packet = vec![0x45, 0x00];
        packet.extend_from_slice(&total_len.to_be_bytes());
        packet.extend_from_slice(&[0x00, 0x00, 0x40, 0x00, 0x40, protocol, 0x00, 0x00]);
        packet.extend_from_slice(&src);
        packet.extend_from_slice(&dst);
        packet.extend_from_slice(payload);
        packet
    }

    fn tcp(src_port: u16, dst_port: u16, flag_bits: u8, payload: &[u8]) -> Vec<u8> {
        let mut segment = Vec::new();
        segment.extend_from_slice(&src_port.to_be_bytes());
        segment.extend_from_slice(&dst_port.to_be_bytes());
        segment.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 0, 0x50, flag_bits, 0xFF, 0xFF, 0, 0, 0, 0]);
        segment.extend_from_slice(payload);
        segment
    }

    fn udp(src_port: u16, dst_port: u16, payload: &[u8]) -> Vec<u8> {
        let length = (8 + payload.len()) as u16;
        let mut datagram = Vec::new();
        datagram.extend_from_slice(&src_port.to_be_bytes());
        datagram.extend_from_slice(&dst_port.to_be_bytes());
        datagram.extend_from_slice(&length.to_be_bytes());
        datagram.extend_from_slice(&[0, 0]);
        datagram.extend_from_slice(payload);
        datagram
    }

    fn dns_query(name: &str) -> Vec<u8> {
        let mut message = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        for label in name.split('.') {
            message.push(label.len() as u8);
            message.extend_from_slice(label.as_bytes());
        }
        message.push(0);
        message.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        message
    }

    fn raw(data: Vec<u8>) -> RawFrame {
        RawFrame::new(data)
    }

    #[test]
    fn unrecognized_frame_has_empty_layers() {
        let frame = Decoder::new().decode(&raw(ethernet(0x0806, &[0u8; 28]))); // ARP
        assert!(frame.layers.is_empty());
        assert_eq!(frame.transport(), TransportProto::Other);
        assert!(frame.ip.is_none());
    }

    #[test]
    fn decodes_tcp_syn_ack() {
        let segment = tcp(443, 51000, flags::SYN | flags::ACK, b"");
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(6, [10, 0, 0, 1], [10, 0, 0, 2], &segment),
        )));

        assert!(frame.layers.contains(LayerTag::Ip));
        assert!(frame.layers.contains(LayerTag::Tcp));
        assert_eq!(frame.transport(), TransportProto::Tcp);
        let tcp = frame.tcp.unwrap();
        assert_eq!((tcp.src_port, tcp.dst_port), (443, 51000));
        assert_eq!(tcp.flags, "SA");
    }

    #[test]
    fn decodes_dns_query_over_udp() {
        let datagram = udp(5353, 53, &dns_query("example.com"));
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(17, [192, 168, 1, 2], [8, 8, 8, 8], &datagram),
        )));

        assert!(frame.layers.contains(LayerTag::Udp));
        assert!(frame.layers.contains(LayerTag::Dns));
        assert_eq!(frame.transport(), TransportProto::Udp);
        assert_eq!(frame.dns, Some(DnsDetail::Query("example.com".into())));
    }

    #[test]
    fn malformed_dns_keeps_lower_layers() {
        let mut message = dns_query("example.com");
        message[12] = 0xC0; // compression pointer, which the parser rejects
        let datagram = udp(5353, 53, &message);
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(17, [192, 168, 1, 2], [8, 8, 8, 8], &datagram),
        )));

        assert!(frame.layers.contains(LayerTag::Ip));
        assert!(frame.layers.contains(LayerTag::Udp));
        assert!(!frame.layers.contains(LayerTag::Dns));
        assert!(frame.dns.is_none());
    }

    #[test]
    fn decodes_http_request_over_tcp() {
        let payload = b"GET /search HTTP/1.1\r\nHost: example.org\r\n\r\n";
        let segment = tcp(51000, 80, flags::PSH | flags::ACK, payload);
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(6, [10, 0, 0, 1], [10, 0, 0, 2], &segment),
        )));

        assert!(frame.layers.contains(LayerTag::HttpRequest));
        assert!(!frame.layers.contains(LayerTag::HttpResponse));
        assert_eq!(frame.transport(), TransportProto::Tcp);
        assert_eq!(
            frame.http,
            Some(HttpDetail::Request {
                host: Some("example.org".into()),
                path: "/search".into(),
            })
        );
    }

    #[test]
    fn decodes_http_response_over_tcp() {
        let payload = b"HTTP/1.1 301 Moved Permanently\r\nLocation: /new\r\n\r\n";
        let segment = tcp(80, 51000, flags::PSH | flags::ACK, payload);
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(6, [10, 0, 0, 2], [10, 0, 0, 1], &segment),
        )));

        assert!(frame.layers.contains(LayerTag::HttpResponse));
        assert_eq!(
            frame.http,
            Some(HttpDetail::Response {
                status: "301".into()
            })
        );
    }

    #[test]
    fn non_http_tcp_payload_keeps_tcp_layer() {
        let segment = tcp(22, 51000, flags::PSH | flags::ACK, b"SSH-2.0-OpenSSH_9.6\r\n");
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(6, [10, 0, 0, 2], [10, 0, 0, 1], &segment),
        )));

        assert!(frame.layers.contains(LayerTag::Tcp));
        assert!(frame.http.is_none());
    }

    #[test]
    fn decodes_icmp_echo() {
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(1, [10, 0, 0, 1], [10, 0, 0, 2], &[8, 0, 0xF7, 0xFF]),
        )));

        assert!(frame.layers.contains(LayerTag::Icmp));
        assert_eq!(frame.transport(), TransportProto::Icmp);
    }

    #[test]
    fn truncated_transport_header_keeps_ip_layer() {
        let frame = Decoder::new().decode(&raw(ethernet(
            0x0800,
            &ipv4(6, [10, 0, 0, 1], [10, 0, 0, 2], &[0x01, 0xBB]),
        )));

        assert!(frame.layers.contains(LayerTag::Ip));
        assert!(!frame.layers.contains(LayerTag::Tcp));
        assert_eq!(frame.transport(), TransportProto::Other);
        assert!(frame.ip.is_some());
    }
}
