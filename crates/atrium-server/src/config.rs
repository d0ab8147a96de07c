use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Server configuration, loadable from a TOML file with every field
/// optional (missing fields take the defaults below).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Seed the in-memory store with the sample site content at startup.
    pub seed_sample_content: bool,
    /// Serve 301s for legacy paths before routing.
    pub enable_redirects: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".parse().unwrap(),
            seed_sample_content: true,
            enable_redirects: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ApiResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&raw).map_err(|e| ApiError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert!(c.seed_sample_content);
        assert!(c.enable_redirects);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: ServerConfig = toml::from_str(r#"bind_addr = "0.0.0.0:8080""#).unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(c.seed_sample_content);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let c: ServerConfig = toml::from_str("").unwrap();
        assert!(c.enable_redirects);
    }
}
