//! Request parser module.
//!
//! Turns the raw bytes of a single read into a [`Request`]: the first
//! whitespace-delimited token is the method, the second is the target path,
//! and everything after that is ignored.

mod request;
mod method;
mod error;

// Re-export public items
pub use request::Request;
pub use method::{Method, ALLOWED_METHODS};
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
