//! # OpenAPI Endpoint
//!
//! Serves the document generated from the route registry when the state was
//! built. It is the same document `generate-openapi` writes at build time,
//! apart from the extra local server entry.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::OpenApi;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json(State(state): State<AppState>) -> Json<OpenApi> {
    Json(state.openapi.as_ref().clone())
}
