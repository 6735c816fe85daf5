use std::env;
use std::net::SocketAddr;

use crate::service::ServiceError;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Service settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    /// `LISTEN_ADDR`, falling back to `DEFAULT_ADDR`.
    pub fn from_env() -> Result<Config, ServiceError> {
        Config::with_addr(env::var("LISTEN_ADDR").ok().as_deref())
    }

    fn with_addr(addr: Option<&str>) -> Result<Config, ServiceError> {
        let addr = addr.map(str::trim).filter(|a| !a.is_empty()).unwrap_or(DEFAULT_ADDR);
        addr.parse()
            .map(|listen_addr| Config { listen_addr })
            .map_err(|_| ServiceError::BadAddress(addr.to_string()))
    }
}
