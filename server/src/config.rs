use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATASET: &str = "data/users.csv";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub message: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got `{raw}`"))?,
            Err(_) => DEFAULT_PORT,
        };
        let dataset_path = std::env::var("DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET));
        let message =
            std::env::var("DATASET_MESSAGE").unwrap_or_else(|_| "Hello from the backend!".into());

        Ok(Self {
            host,
            port,
            dataset_path,
            message,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 4000,
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            message: String::new(),
        };
        assert_eq!(config.bind_addr().unwrap().port(), 4000);
    }

    #[test]
    fn bad_host_is_an_error() {
        let config = Config {
            host: "not a host".into(),
            port: 1,
            dataset_path: PathBuf::new(),
            message: String::new(),
        };
        assert!(config.bind_addr().is_err());
    }
}
