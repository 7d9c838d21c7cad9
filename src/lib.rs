//! A minimal HTTP/1.1 responder for static files.
//!
//! Every connection gets a single read. The first whitespace-delimited token
//! is the method, the second the target path. Only `GET` is answered with
//! content; targets are resolved below a document root and anything that
//! escapes it is reported as missing.
//!
//! # Responses
//!
//! - `200 OK` with the file contents for an existing file of known type
//! - `301 Moved Permanently` for a directory requested without a trailing slash
//! - `404 Page Not Found` for anything missing, outside the root, of unknown
//!   type, or unreadable
//! - `405 Method Not Allowed` for any method other than `GET`
//!
//! An empty request gets no response at all.
//!
//! # Examples
//!
//! ```no_run
//! use static_httpd::{GuessMime, OsFileSystem, RequestHandler, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let handler = RequestHandler::from_config(&config, OsFileSystem, GuessMime).unwrap();
//!
//! if let Some(response) = handler.handle(b"GET /index.html HTTP/1.1\r\n\r\n") {
//!     println!("{}", response.status_line());
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the resolver module
pub mod resolver;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, Method, Request};
pub use resolver::{
    DocumentRoot, FileSystem, GuessMime, MimeLookup, OsFileSystem, PathResolver, ResolvedTarget,
};
pub use server::{
    Error as ServerError, HttpResponse, HttpServer, Outcome, RequestHandler, ResponseBuilder,
    ServerConfig, StatusCode,
};
