//! Request parsing and representation.

use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;

/// A request as read off the wire.
///
/// Only the first two whitespace-delimited tokens are kept. Either field may
/// be empty: an empty `method` means the input had no tokens at all, an empty
/// `target` means the method token stood alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token, exactly as received
    pub method: String,
    /// The target path token, exactly as received
    pub target: String,
}

impl Request {
    /// Create a new request from its two tokens.
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
        }
    }

    /// Check that the request carried at least a method token.
    ///
    /// # Returns
    ///
    /// `Err(Error::EmptyRequest)` if there were no tokens
    pub fn validate(&self) -> Result<(), Error> {
        if self.method.is_empty() {
            return Err(Error::EmptyRequest);
        }
        Ok(())
    }

    /// Returns true if the request carried at least a method token.
    ///
    /// Invalid requests get no response at all.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Parse the method token into a known [`Method`].
    ///
    /// # Returns
    ///
    /// The method, or `Error::InvalidMethod` for anything unrecognised
    pub fn parsed_method(&self) -> Result<Method, Error> {
        Method::from_str(&self.method)
    }

    /// Returns true if the method token names an allowed method.
    pub fn is_method_allowed(&self) -> bool {
        self.parsed_method().is_ok_and(|method| method.is_allowed())
    }
}

/// Parse a request from the bytes of a single read.
///
/// The input is split on ASCII whitespace. This never fails: malformed input
/// yields a request whose fields are empty, which [`Request::is_valid`] and
/// the path resolver deal with downstream. Tokens that are not valid UTF-8
/// are decoded lossily.
///
/// # Arguments
///
/// * `input` - The raw bytes received from the client
pub fn parse_request(input: &[u8]) -> Request {
    let mut tokens = input
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned());

    let method = tokens.next().unwrap_or_default();
    let target = tokens.next().unwrap_or_default();

    Request { method, target }
}
