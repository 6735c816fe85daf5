mod config;
mod service;

use bible_citations_rs::Citations;
use config::Config;
use futures::Future;
use hyper::Server;
use service::{SearchService, ServiceError};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), ServiceError> {
    let config = Config::from_env()?;
    let server = Server::try_bind(&config.listen_addr)
        .map_err(|e| ServiceError::Server(e.to_string()))?
        .serve(SearchService::new(Citations::default()))
        .map_err(|e| tracing::error!(error = %e, "server error"));

    tracing::info!(addr = %config.listen_addr, "listening");
    hyper::rt::run(server);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "failed to start");
        std::process::exit(1);
    }
}
