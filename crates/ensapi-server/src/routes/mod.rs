//! # Route Binder
//!
//! Attaches runtime handlers to the route definitions of the registry. A
//! bound route is mounted at the group prefix plus the descriptor path, with
//! the definition's method, and wrapped in one validation layer per rule:
//!
//! ```text
//! request → path rule → query rule → handler
//! ```
//!
//! Group routers are merged rather than nested, because Meta and Explore
//! share the `/api` prefix.

pub mod explore;
pub mod meta;
pub mod resolve;

use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::routing::{on, MethodFilter};
use axum::Router;
use ensapi_routes::{ApiGroup, Method, RouteDefinition, RouteRegistry};

use crate::extractors::validate;
use crate::state::AppState;

/// Router for one API group, with every route already prefixed.
pub fn router(group: ApiGroup, registry: &RouteRegistry) -> Router<AppState> {
    match group {
        ApiGroup::Meta => meta::router(registry),
        ApiGroup::Resolution => resolve::router(registry),
        ApiGroup::Explore => explore::router(registry),
    }
}

/// Bind `handler` to `definition` under `prefix`.
///
/// The route's method and path come from the descriptor, never from the
/// caller, and the validation layers come from the definition's rules.
pub fn bind<P, Q, H, T>(
    prefix: &str,
    definition: &RouteDefinition<P, Q>,
    handler: H,
) -> Router<AppState>
where
    P: Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
    H: Handler<T, AppState>,
    T: 'static,
{
    let descriptor = &definition.descriptor;
    let mut route = on(method_filter(descriptor.method), handler);
    // Layers wrap outward: the last one added runs first.
    if let Some(rule) = definition.query {
        route = route.layer(from_fn_with_state(rule, validate::<Q>));
    }
    if let Some(rule) = definition.params {
        route = route.layer(from_fn_with_state(rule, validate::<P>));
    }

    let path = format!("{prefix}{}", descriptor.path);
    tracing::trace!(method = %descriptor.method, %path, "binding route");
    Router::new().route(&path, route)
}

fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
    }
}
