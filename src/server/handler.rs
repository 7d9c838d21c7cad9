//! Per-request orchestration: parse, check the method, resolve, read, respond.

use std::path::Path;

use log::{debug, error, warn};

use crate::parser::{parse_request, Request};
use crate::resolver::{DocumentRoot, FileSystem, MimeLookup, PathResolver, ResolvedTarget};
use crate::server::builder::{Outcome, ResponseBuilder};
use crate::server::config::ServerConfig;
use crate::server::error::{Error, ReadFailure};
use crate::server::response::HttpResponse;

/// Answers one request at a time.
///
/// Holds no mutable state, so the same handler can serve any number of
/// requests, and an unchanged document root yields identical responses.
pub struct RequestHandler<F, M> {
    resolver: PathResolver<F, M>,
    responses: ResponseBuilder,
}

impl<F: FileSystem, M: MimeLookup> RequestHandler<F, M> {
    /// Create a handler from its parts.
    pub fn new(resolver: PathResolver<F, M>, responses: ResponseBuilder) -> Self {
        Self {
            resolver,
            responses,
        }
    }

    /// Create a handler for `config`, opening its document root through `fs`.
    pub fn from_config(config: &ServerConfig, fs: F, mime: M) -> Result<Self, Error> {
        let root = DocumentRoot::open(&config.document_root, &fs)?;
        Ok(Self::new(
            PathResolver::new(root, fs, mime),
            ResponseBuilder::new(&config.host, config.port),
        ))
    }

    /// Handle the raw bytes of one read.
    ///
    /// # Returns
    ///
    /// `None` if the input held no tokens; nothing is sent back in that case.
    pub fn handle(&self, raw: &[u8]) -> Option<HttpResponse> {
        let request = parse_request(raw);
        if let Err(e) = request.validate() {
            debug!("Dropping request: {e}");
            return None;
        }
        Some(self.respond(&request))
    }

    /// Build the response for a valid request.
    pub fn respond(&self, request: &Request) -> HttpResponse {
        let response = self.responses.build(self.outcome(request));
        debug!(
            "{method} {target} -> {status}",
            method = request.method,
            target = request.target,
            status = response.status.as_u16()
        );
        response
    }

    fn outcome(&self, request: &Request) -> Outcome {
        if !request.is_method_allowed() {
            return Outcome::MethodNotAllowed;
        }

        match self.resolver.resolve(&request.target) {
            ResolvedTarget::File { path, mime_type } => match self.read(&path) {
                Ok(body) => Outcome::Ok { body, mime_type },
                Err(failure) if failure.is_expected() => {
                    warn!("{failure}");
                    Outcome::NotFound
                }
                Err(failure) => {
                    error!("{failure}");
                    Outcome::NotFound
                }
            },
            ResolvedTarget::Directory { location, .. } => Outcome::Redirect { location },
            ResolvedTarget::OutsideRoot { path } => {
                warn!(
                    "{target} resolves outside the document root: {path}",
                    target = request.target,
                    path = path.display()
                );
                Outcome::NotFound
            }
            ResolvedTarget::NotFound => Outcome::NotFound,
        }
    }

    fn read(&self, path: &Path) -> Result<String, ReadFailure> {
        self.resolver
            .file_system()
            .read_to_string(path)
            .map_err(|e| ReadFailure::classify(path.to_path_buf(), e))
    }
}
