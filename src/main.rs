//! Serve static files from a document root.
//!
//! Usage: `static-httpd [config.json]`. Without a config file the server
//! listens on 127.0.0.1:8080 and serves `./www`.

use log::info;
use static_httpd::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            info!("Loading config from {path}", path = path.to_string_lossy());
            ServerConfig::from_json_file(path)?
        }
        None => ServerConfig::default(),
    };

    let server = HttpServer::new(config)?;
    server.start().await?;

    Ok(())
}
