//! # Resolution Group
//!
//! Routes (mounted under `/api/resolve`):
//! - GET /records/{name}: Records of an ENS name
//! - GET /primary-name/{address}/{chainId}: Primary name of an address on a chain
//!
//! Handlers are placeholders: they receive fully validated input and answer
//! with empty results. No resolution is performed.

use axum::{Json, Router};
use ensapi_routes::responses::{PrimaryNameResponse, RecordsResponse, ResolvedRecords};
use ensapi_routes::rules::{AccelerationQuery, PrimaryNamePath, RecordsPath, RecordsQuery};
use ensapi_routes::{ApiGroup, RouteRegistry};

use super::bind;
use crate::extractors::Validated;
use crate::state::AppState;

pub fn router(registry: &RouteRegistry) -> Router<AppState> {
    let prefix = ApiGroup::Resolution.prefix();
    Router::new()
        .merge(bind(prefix, &registry.resolve_records, resolve_records))
        .merge(bind(
            prefix,
            &registry.resolve_primary_name,
            resolve_primary_name,
        ))
}

async fn resolve_records(
    Validated(path): Validated<RecordsPath>,
    Validated(query): Validated<RecordsQuery>,
) -> Json<RecordsResponse> {
    tracing::debug!(
        name = %path.name,
        selection = ?query.selection,
        trace = query.trace,
        accelerate = query.accelerate,
        "resolve records"
    );
    Json(RecordsResponse {
        records: ResolvedRecords::default(),
        acceleration_requested: false,
        acceleration_attempted: false,
    })
}

async fn resolve_primary_name(
    Validated(path): Validated<PrimaryNamePath>,
    Validated(flags): Validated<AccelerationQuery>,
) -> Json<PrimaryNameResponse> {
    tracing::debug!(
        address = %path.address,
        chain_id = %path.chain_id,
        trace = flags.trace,
        accelerate = flags.accelerate,
        "resolve primary name"
    );
    Json(PrimaryNameResponse {
        name: None,
        acceleration_requested: false,
        acceleration_attempted: false,
    })
}
