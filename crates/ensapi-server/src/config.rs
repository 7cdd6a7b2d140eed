//! # Configuration
//!
//! Server settings read from the environment at startup.
//!
//! | Variable        | Default   | Meaning                         |
//! |-----------------|-----------|---------------------------------|
//! | `PORT`          | `3000`    | TCP port to listen on           |
//! | `ENS_NAMESPACE` | `mainnet` | ENS namespace this instance serves |

use std::fmt;
use std::str::FromStr;

use ensapi_routes::responses::PublicConfig;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("unknown ENS namespace {0:?} (expected mainnet, sepolia, holesky or ens-test-env)")]
    UnknownNamespace(String),
}

/// ENS deployment an instance serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Namespace {
    #[default]
    Mainnet,
    Sepolia,
    Holesky,
    EnsTestEnv,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Holesky => "holesky",
            Self::EnsTestEnv => "ens-test-env",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "holesky" => Ok(Self::Holesky),
            "ens-test-env" => Ok(Self::EnsTestEnv),
            other => Err(ConfigError::UnknownNamespace(other.to_string())),
        }
    }
}

/// Settings of one server instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub namespace: Namespace,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            namespace: Namespace::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset variables take their
    /// defaults; set but malformed ones are errors.
    /// Port 0 is rejected since the served document advertises the
    /// configured port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(port) = lookup("PORT") {
            config.port = match port.parse() {
                Ok(0) | Err(_) => return Err(ConfigError::InvalidPort(port)),
                Ok(n) => n,
            };
        }
        if let Some(namespace) = lookup("ENS_NAMESPACE") {
            config.namespace = namespace.parse()?;
        }
        Ok(config)
    }

    pub fn public_config(&self) -> PublicConfig {
        PublicConfig {
            version: self.version.clone(),
            namespace: self.namespace.to_string(),
        }
    }
}
