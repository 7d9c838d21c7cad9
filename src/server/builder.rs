//! Turning a request outcome into a response.

use crate::server::response::{HttpResponse, StatusCode};

/// Body sent with every 405.
pub const METHOD_NOT_ALLOWED_BODY: &str = "<p1>405 - Method Not Allowed</p1>";

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &str = "<p1>Oops, wrong page! We don't have it!</p1>";

/// What the handler decided to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Serve a file's contents.
    Ok { body: String, mime_type: String },
    /// Redirect to a client-visible path (starting with `/`).
    Redirect { location: String },
    /// Nothing to serve.
    NotFound,
    /// The method is not GET.
    MethodNotAllowed,
}

/// Builds the fixed response for each [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBuilder {
    /// `http://host:port`, prefixed to redirect locations
    authority: String,
}

impl ResponseBuilder {
    /// Create a builder that redirects to `http://{host}:{port}`.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            authority: format!("http://{host}:{port}"),
        }
    }

    /// Build the response for `outcome`.
    pub fn build(&self, outcome: Outcome) -> HttpResponse {
        match outcome {
            Outcome::Ok { body, mime_type } => HttpResponse::new(StatusCode::Ok)
                .with_body_string(body)
                .with_content_type(mime_type),
            Outcome::Redirect { location } => HttpResponse::new(StatusCode::MovedPermanently)
                .with_header("Location", format!("{}{location}", self.authority))
                .with_header("Connection", "close"),
            Outcome::NotFound => HttpResponse::new(StatusCode::NotFound)
                .with_body_string(NOT_FOUND_BODY)
                .with_header("Content-type", "text/html"),
            Outcome::MethodNotAllowed => HttpResponse::new(StatusCode::MethodNotAllowed)
                .with_header("Allow", "GET")
                .with_body_string(METHOD_NOT_ALLOWED_BODY)
                .with_content_type("text/html"),
        }
    }
}
