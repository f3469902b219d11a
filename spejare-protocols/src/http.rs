//! ## spejare-protocols::http
//! HTTP/1.x start-line parser for request/response classification.
//!
//! Only the start line and the Host header matter for reporting; bodies and
//! chunked transfer encoding are out of scope.

use thiserror::Error;

/// Request methods the classifier recognizes on the start line.
const METHODS: [&str; 9] = [
    "GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH", "TRACE", "CONNECT",
];

/// HTTP-specific errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HttpParseError {
    /// The payload does not start with an HTTP request or status line.
    #[error("Payload does not match an HTTP message")]
    NotHttp,
}

/// An HTTP message classified from a TCP payload. Request and response are
/// mutually exclusive per frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMessage<'a> {
    Request {
        method: &'a str,
        path: &'a str,
        /// Host header value, when one was present.
        host: Option<&'a str>,
    },
    Response {
        /// Three-digit status code as text.
        status: &'a str,
    },
}

/// A start-line HTTP parser.
#[derive(Default, Debug, Copy, Clone)]
pub struct HttpParser;

impl HttpParser {
    /// Creates a new HTTP parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a request or status line from a TCP payload.
    pub fn parse<'a>(&self, data: &'a [u8]) -> Result<HttpMessage<'a>, HttpParseError> {
        // Only the header block needs to be text; the body may be binary.
        let head_end = find_subslice(data, b"\r\n\r\n").unwrap_or(data.len());
        let head = std::str::from_utf8(&data[..head_end]).map_err(|_| HttpParseError::NotHttp)?;

        let mut lines = head.split("\r\n");
        let start_line = lines.next().ok_or(HttpParseError::NotHttp)?;

        if start_line.starts_with("HTTP/") {
            let status = start_line
                .split_whitespace()
                .nth(1)
                .ok_or(HttpParseError::NotHttp)?;
            if status.len() != 3 || !status.bytes().all(|b| b.is_ascii_digit()) {
                return Err(HttpParseError::NotHttp);
            }
            return Ok(HttpMessage::Response { status });
        }

        let mut parts = start_line.split(' ');
        let method = parts.next().ok_or(HttpParseError::NotHttp)?;
        let path = parts.next().ok_or(HttpParseError::NotHttp)?;
        let version = parts.next().ok_or(HttpParseError::NotHttp)?;
        if !METHODS.contains(&method) || !version.starts_with("HTTP/") {
            return Err(HttpParseError::NotHttp);
        }

        let host = lines.find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case("Host").then(|| value.trim())
        });

        Ok(HttpMessage::Request { method, path, host })
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
