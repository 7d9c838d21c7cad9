//! Error types for the request parser.

use thiserror::Error;

/// Errors that can occur while interpreting a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The request contained no tokens at all.
    #[error("Empty request")]
    EmptyRequest,

    /// The method token is not a known HTTP method.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
}
