//! Configuration for the Lector proxy server

use serde::Deserialize;
use std::env;

use crate::catalog::{DEFAULT_CATALOG_BASE_URL, DEFAULT_CONTENT_BASE_URL};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the public book catalog lives.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
}

/// Where the EPUB files themselves live.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            catalog: CatalogConfig {
                base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            },
            content: ContentConfig {
                base_url: DEFAULT_CONTENT_BASE_URL.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from the environment; every value has a default.
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3001".to_string())
                    .parse()
                    .unwrap_or(3001),
            },
            catalog: CatalogConfig {
                base_url: env::var("CATALOG_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string()),
            },
            content: ContentConfig {
                base_url: env::var("CONTENT_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_CONTENT_BASE_URL.to_string()),
            },
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
