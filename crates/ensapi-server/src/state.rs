//! # Application State
//!
//! Immutable values shared by every handler: configuration, the route
//! registry, and the OpenAPI document generated from that registry when the
//! state is built.

use std::sync::Arc;

use ensapi_routes::openapi;
use ensapi_routes::{ApiDocumentation, RouteRegistry, SpecError};
use utoipa::openapi::OpenApi;

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registry: Arc<RouteRegistry>,
    pub openapi: Arc<OpenApi>,
}

impl AppState {
    /// Build the state, generating the served OpenAPI document from
    /// `registry`. Fails if the document cannot be generated.
    pub fn new(config: AppConfig, registry: RouteRegistry) -> Result<Self, SpecError> {
        let docs = ApiDocumentation::local(config.port);
        let document = openapi::generate(&registry, &docs)?;
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            openapi: Arc::new(document),
        })
    }
}
