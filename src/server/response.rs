//! HTTP response types and utilities.

/// Value of the `Server` header sent with every response.
pub const SERVER_NAME: &str = concat!("static-httpd/", env!("CARGO_PKG_VERSION"));

/// HTTP status codes with the reason phrases this server sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    MovedPermanently = 301,
    NotFound = 404,
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    ///
    /// These are part of the wire contract; 404 is deliberately
    /// `Page Not Found` rather than the RFC wording.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::NotFound => "Page Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    /// Get the numeric status code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

/// Represents an HTTP response.
///
/// Headers keep their insertion order, which is observable on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, in the order they are sent
    pub headers: Vec<(String, String)>,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: vec![("Server".to_string(), SERVER_NAME.to_string())],
            body: Vec::new(),
        }
    }

    /// Set the response body with a string.
    ///
    /// `Content-length` is the UTF-8 byte length, not the character count.
    pub fn with_body_string(mut self, body: impl Into<String>) -> Self {
        let body_string = body.into();
        self.body = body_string.into_bytes();
        let content_length = self.body.len().to_string();
        self.with_header("Content-length", content_length)
    }

    /// Add or replace a header.
    ///
    /// A replaced header keeps its original position. Names are matched
    /// exactly, so `Content-type` and `Content-Type` are distinct.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(existing, _)| *existing == name) {
            Some(header) => header.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Get a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// The status line, without the trailing CRLF.
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}", self.status.as_u16(), self.status.reason_phrase())
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(self.status_line().as_bytes());
        bytes.extend_from_slice(b"\r\n");

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        bytes.extend_from_slice(&self.body);

        bytes
    }
}
