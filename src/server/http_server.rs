//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tokio::signal;
use log::{debug, info, warn, error};

use crate::resolver::{FileSystem, GuessMime, MimeLookup, OsFileSystem};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::RequestHandler;

/// Pause after a failed `accept` before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// How long shutdown waits for in-flight connections.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP server.
pub struct HttpServer<F = OsFileSystem, M = GuessMime> {
    /// The server configuration.
    pub config: ServerConfig,
    /// The handler every connection is answered with.
    pub handler: Arc<RequestHandler<F, M>>,
}

impl HttpServer {
    /// Create a server for `config` serving from the real file system.
    ///
    /// # Errors
    ///
    /// Fails if the document root cannot be opened.
    pub fn new(config: ServerConfig) -> Result<Self, Error> {
        let handler = RequestHandler::from_config(&config, OsFileSystem, GuessMime)?;
        Ok(Self::with_handler(config, handler))
    }
}

impl<F, M> HttpServer<F, M>
where
    F: FileSystem + Send + Sync + 'static,
    M: MimeLookup + Send + Sync + 'static,
{
    /// Create a server around an existing handler.
    pub fn with_handler(config: ServerConfig, handler: RequestHandler<F, M>) -> Self {
        Self {
            config,
            handler: Arc::new(handler),
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        info!("Server listening on http://{addr}", addr = self.config.bind_addr());
        Ok(listener)
    }

    /// Spawn a task answering a new connection.
    fn handle_new_connection(
        &self,
        mut socket: TcpStream,
        addr: SocketAddr,
        tasks: &mut JoinSet<()>,
    ) {
        debug!("Connection from {addr}");
        let handler = self.handler.clone();
        let read_buffer_size = self.config.read_buffer_size;

        tasks.spawn(async move {
            if let Err(e) = Self::handle_connection(&mut socket, handler, read_buffer_size).await {
                warn!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.setup_listener().await?;

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                res = &mut shutdown => {
                    match res {
                        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
                        Err(e) => error!("Error listening for Ctrl+C, shutting down: {e}"),
                    }
                    break;
                }

                // Reap finished connections
                Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = res {
                        error!("Connection task failed: {e}");
                    }
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => self.handle_new_connection(socket, addr, &mut tasks),
                        Err(e) => handle_accept_error(e).await,
                    }
                }
            }
        }

        perform_shutdown(&mut tasks, SHUTDOWN_TIMEOUT).await;

        Ok(())
    }

    /// Handle a single connection.
    ///
    /// Takes exactly one read of at most `read_buffer_size` bytes, writes at
    /// most one response, then shuts the stream down. File access happens on
    /// the blocking pool.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        handler: Arc<RequestHandler<F, M>>,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        buf.truncate(n);

        let response = tokio::task::spawn_blocking(move || handler.handle(&buf))
            .await
            .map_err(|e| Error::InternalError(e.to_string()))?;

        if let Some(response) = response {
            socket.write_all(&response.to_bytes()).await?;
        }
        socket.shutdown().await?;

        Ok(())
    }
}

/// Log a failed `accept` and back off before the next one.
///
/// Accept errors are per-connection (aborted handshakes, descriptor
/// exhaustion), so the listener keeps running.
pub(crate) async fn handle_accept_error(e: std::io::Error) {
    error!("Error accepting connection: {e}");
    tokio::time::sleep(ACCEPT_BACKOFF).await;
}

/// Wait up to `timeout` for in-flight connections to finish.
///
/// # Returns
///
/// The number of connections still running at the deadline. They are
/// aborted.
pub(crate) async fn perform_shutdown(tasks: &mut JoinSet<()>, timeout: Duration) -> usize {
    info!("Waiting for {len} active connections to complete...", len = tasks.len());
    let drained = tokio::time::timeout(timeout, async {
        while let Some(res) = tasks.join_next().await {
            if let Err(e) = res {
                error!("Task failed during shutdown: {e}");
            }
        }
    }).await;

    let abandoned = match drained {
        Ok(()) => 0,
        Err(_) => {
            let abandoned = tasks.len();
            warn!("Shutdown timed out after {timeout:?}, abandoning {abandoned} connections");
            tasks.abort_all();
            abandoned
        }
    };

    info!("Server shutdown complete");
    abandoned
}
