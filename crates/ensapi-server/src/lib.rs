//! # ensapi-server: Axum Server for ENSApi
//!
//! Binds runtime handlers to the route definitions in `ensapi-routes` and
//! serves them, together with the OpenAPI document generated from the same
//! definitions.
//!
//! ## API Surface
//!
//! | Prefix          | Module               | Group      |
//! |-----------------|----------------------|------------|
//! | `/api`          | [`routes::meta`]     | Meta       |
//! | `/api/resolve`  | [`routes::resolve`]  | Resolution |
//! | `/api`          | [`routes::explore`]  | Explore    |
//! | `/openapi.json` | [`openapi`]          | -          |
//!
//! ## Request Pipeline
//!
//! ```text
//! TraceLayer → path validation → query validation → Handler
//! ```
//!
//! Validation layers come from the rules attached to each route definition;
//! a rejected request never reaches its handler.
//!
//! ## Crate Policy
//!
//! - Handlers here are placeholders: resolution and indexing are out of
//!   scope and every handler returns a fixed, schema-conformant literal.
//! - All errors map to `{message, details?}` bodies via [`AppError`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use ensapi_routes::MOUNT_ORDER;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the application: every group router at its mount prefix, the
/// OpenAPI endpoint, a JSON 404 fallback, and request tracing.
pub fn app(state: AppState) -> Router {
    let api = MOUNT_ORDER
        .iter()
        .fold(Router::new(), |router, &group| {
            router.merge(routes::router(group, &state.registry))
        });

    api.merge(openapi::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
