//! # Meta Group
//!
//! Routes (mounted under `/api`):
//! - GET /config: Public configuration of this instance
//! - GET /indexing-status: Indexing status of the backing indexer

use axum::extract::State;
use axum::{Json, Router};
use ensapi_routes::responses::{IndexingStatus, IndexingStatusResponse, PublicConfig};
use ensapi_routes::{ApiGroup, RouteRegistry};

use super::bind;
use crate::state::AppState;

pub fn router(registry: &RouteRegistry) -> Router<AppState> {
    let prefix = ApiGroup::Meta.prefix();
    Router::new()
        .merge(bind(prefix, &registry.config, get_config))
        .merge(bind(prefix, &registry.indexing_status, get_indexing_status))
}

async fn get_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(state.config.public_config())
}

/// No indexer is attached, so the status is always reported healthy.
async fn get_indexing_status() -> Json<IndexingStatusResponse> {
    Json(IndexingStatusResponse {
        status: IndexingStatus::Ok,
    })
}
