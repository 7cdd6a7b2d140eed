//! # Explore Group
//!
//! Routes (mounted under `/api`):
//! - GET /name-tokens: Tokens of a name, by `domainId` or `name`

use axum::{Json, Router};
use ensapi_routes::responses::NameTokensResponse;
use ensapi_routes::rules::NameTokensQuery;
use ensapi_routes::{ApiGroup, RouteRegistry};

use super::bind;
use crate::extractors::Validated;
use crate::state::AppState;

pub fn router(registry: &RouteRegistry) -> Router<AppState> {
    bind(ApiGroup::Explore.prefix(), &registry.name_tokens, get_name_tokens)
}

/// Without a token index every lookup yields an empty list.
async fn get_name_tokens(Validated(query): Validated<NameTokensQuery>) -> Json<NameTokensResponse> {
    tracing::debug!(?query, "name tokens lookup");
    Json(NameTokensResponse::default())
}
