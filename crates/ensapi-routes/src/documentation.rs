//! # Document Metadata
//!
//! Top-level fields of the generated OpenAPI document: info block, servers
//! and tag definitions.

use crate::descriptor::ApiGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub url: String,
    pub description: String,
}

impl ServerInfo {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Metadata for the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDocumentation {
    pub title: String,
    pub version: String,
    pub description: String,
    pub servers: Vec<ServerInfo>,
    /// Groups rendered as tag definitions, in order.
    pub tags: Vec<ApiGroup>,
}

impl ApiDocumentation {
    /// Metadata for the published document: the public deployments only.
    pub fn published() -> Self {
        Self {
            title: "ENSApi APIs".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "APIs for ENS resolution, navigating the ENS nameforest, and metadata about an ENSNode".to_string(),
            servers: vec![
                ServerInfo::new("https://api.alpha.ensnode.io", "ENSNode Alpha (Mainnet)"),
                ServerInfo::new(
                    "https://api.alpha-sepolia.ensnode.io",
                    "ENSNode Alpha (Sepolia Testnet)",
                ),
            ],
            tags: ApiGroup::ALL.to_vec(),
        }
    }

    /// Metadata served by a running instance: the published servers plus the
    /// local listener.
    pub fn local(port: u16) -> Self {
        let mut docs = Self::published();
        docs.servers.push(ServerInfo::new(
            format!("http://localhost:{port}"),
            "Local Development",
        ));
        docs
    }
}
