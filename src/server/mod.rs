//! HTTP server implementation for static-httpd.
//!
//! This module holds the request handler that ties parsing, path resolution
//! and response building together, plus the tokio transport that feeds it
//! one read per connection.

mod response;
mod builder;
mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode, SERVER_NAME};
pub use builder::{Outcome, ResponseBuilder, METHOD_NOT_ALLOWED_BODY, NOT_FOUND_BODY};
pub use config::ServerConfig;
pub use error::{Error, ReadFailure};
pub use handler::RequestHandler;
pub use http_server::HttpServer;
