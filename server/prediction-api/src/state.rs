//! Shared application state and server configuration.

use prediction_engine::Engine;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub struct AppState {
  pub engine: Engine,
}

impl AppState {
  pub fn new(engine: Engine) -> Self {
    Self { engine }
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new(Engine::with_defaults())
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{var} must be a valid {expected}, got {value:?}")]
  Invalid {
    var: &'static str,
    expected: &'static str,
    value: String,
  },
}

/// Listen address, read from HOST and PORT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: IpAddr,
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 5005,
    }
  }
}

impl ServerConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|k| std::env::var(k).ok())
  }

  /// Build from an arbitrary variable lookup; unset variables keep defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let mut cfg = Self::default();
    if let Some(v) = lookup("HOST") {
      cfg.host = v.parse().map_err(|_| ConfigError::Invalid {
        var: "HOST",
        expected: "IP address",
        value: v.clone(),
      })?;
    }
    if let Some(v) = lookup("PORT") {
      cfg.port = v.parse().map_err(|_| ConfigError::Invalid {
        var: "PORT",
        expected: "u16",
        value: v.clone(),
      })?;
    }
    Ok(cfg)
  }

  pub fn addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}
