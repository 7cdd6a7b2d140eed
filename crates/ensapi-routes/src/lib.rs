//! # ensapi-routes: Route Definitions for ENSApi
//!
//! Everything the OpenAPI document says about the API, declared once and
//! without any runtime dependency: endpoint descriptors, the validation rules
//! that apply to path and query parameters, and the response schemas.
//!
//! ## Consumers
//!
//! The same [`RouteRegistry`] value is read by two independent walkers:
//!
//! 1. `ensapi-server` binds a handler to each [`RouteDefinition`] and enforces
//!    its rules on live requests.
//! 2. [`openapi::generate`] serializes the descriptors into an OpenAPI
//!    document, without a listener and without ever calling a handler.
//!
//! Because the server enforces the very rule objects the generator documents,
//! the published parameters and the enforced validation cannot drift apart.
//!
//! ## Crate Policy
//!
//! - Depends only on `ensapi-core`, `utoipa` and serialization crates. It must
//!   never depend on the web framework, the async runtime or `ensapi-server`.
//! - No global state: the registry is an ordinary value passed by reference.

pub mod definitions;
pub mod descriptor;
pub mod documentation;
pub mod error;
pub mod openapi;
pub mod responses;
pub mod rules;

pub use definitions::{MountedEndpoint, RouteDefinition, RouteRegistry, MOUNT_ORDER};
pub use descriptor::{ApiGroup, EndpointDescriptor, Method, ParamSpec, ResponseSpec};
pub use documentation::{ApiDocumentation, ServerInfo};
pub use error::SpecError;
pub use rules::{RawFields, Target, ValidationRule};
