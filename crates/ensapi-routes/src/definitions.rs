//! # Route Registry
//!
//! The single source of truth for the ENSApi surface. Each endpoint is a
//! [`RouteDefinition`]: its descriptor plus the validation rules for its path
//! and query. The [`RouteRegistry`] holds all of them and the mount table.
//!
//! | Group      | Prefix         | Endpoints                                    |
//! |------------|----------------|----------------------------------------------|
//! | Meta       | `/api`         | `/config`, `/indexing-status`                |
//! | Resolution | `/api/resolve` | `/records/{name}`, `/primary-name/{address}/{chainId}` |
//! | Explore    | `/api`         | `/name-tokens`                               |

use crate::descriptor::{ApiGroup, EndpointDescriptor, ResponseSpec};
use crate::responses::{
    ErrorResponse, IndexingStatusResponse, NameTokensResponse, PrimaryNameResponse, PublicConfig,
    RecordsResponse,
};
use crate::rules::{
    self, AccelerationQuery, NameTokensQuery, PrimaryNamePath, RecordsPath, RecordsQuery,
    ValidationRule,
};

/// Order in which groups are mounted. Path spaces do not overlap, so the
/// order only fixes the order of paths in the generated document.
pub const MOUNT_ORDER: [ApiGroup; 3] = [ApiGroup::Meta, ApiGroup::Resolution, ApiGroup::Explore];

/// An endpoint descriptor paired with the rules enforced on its requests.
///
/// `P` is the parsed path, `Q` the parsed query. Attaching a rule also
/// documents its fields as parameters on the descriptor.
#[derive(Debug, Clone)]
pub struct RouteDefinition<P = (), Q = ()> {
    pub descriptor: EndpointDescriptor,
    pub params: Option<ValidationRule<P>>,
    pub query: Option<ValidationRule<Q>>,
}

impl<P, Q> RouteDefinition<P, Q> {
    pub fn new(descriptor: EndpointDescriptor) -> Self {
        Self {
            descriptor,
            params: None,
            query: None,
        }
    }

    pub fn with_params(mut self, rule: ValidationRule<P>) -> Self {
        self.descriptor.document_fields(rule.target(), rule.fields());
        self.params = Some(rule);
        self
    }

    pub fn with_query(mut self, rule: ValidationRule<Q>) -> Self {
        self.descriptor.document_fields(rule.target(), rule.fields());
        self.query = Some(rule);
        self
    }
}

/// An endpoint with its group prefix applied.
#[derive(Debug, Clone, Copy)]
pub struct MountedEndpoint<'a> {
    pub prefix: &'static str,
    pub descriptor: &'a EndpointDescriptor,
}

impl MountedEndpoint<'_> {
    pub fn full_path(&self) -> String {
        format!("{}{}", self.prefix, self.descriptor.path)
    }
}

/// All route definitions of the API. Built once at startup and shared by
/// reference; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    pub config: RouteDefinition,
    pub indexing_status: RouteDefinition,
    pub resolve_records: RouteDefinition<RecordsPath, RecordsQuery>,
    pub resolve_primary_name: RouteDefinition<PrimaryNamePath, AccelerationQuery>,
    pub name_tokens: RouteDefinition<(), NameTokensQuery>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self {
            config: config_route(),
            indexing_status: indexing_status_route(),
            resolve_records: resolve_records_route(),
            resolve_primary_name: resolve_primary_name_route(),
            name_tokens: name_tokens_route(),
        }
    }

    /// Descriptors of one group, in declaration order.
    pub fn group(&self, group: ApiGroup) -> Vec<&EndpointDescriptor> {
        match group {
            ApiGroup::Meta => vec![&self.config.descriptor, &self.indexing_status.descriptor],
            ApiGroup::Resolution => vec![
                &self.resolve_records.descriptor,
                &self.resolve_primary_name.descriptor,
            ],
            ApiGroup::Explore => vec![&self.name_tokens.descriptor],
        }
    }

    /// Every endpoint with its mount prefix, in mount order.
    pub fn endpoints(&self) -> Vec<MountedEndpoint<'_>> {
        MOUNT_ORDER
            .iter()
            .flat_map(|&group| {
                self.group(group)
                    .into_iter()
                    .map(move |descriptor| MountedEndpoint {
                        prefix: group.prefix(),
                        descriptor,
                    })
            })
            .collect()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Resolution API (/api/resolve) ───────────────────────────────────

fn resolve_records_route() -> RouteDefinition<RecordsPath, RecordsQuery> {
    RouteDefinition::new(
        EndpointDescriptor::get("/records/{name}", ApiGroup::Resolution)
            .operation_id("resolveRecords")
            .summary("Resolve ENS Records")
            .description("Resolves ENS records for a given name")
            .response(ResponseSpec::json::<RecordsResponse>(
                200,
                "Successfully resolved records",
            ))
            .response(ResponseSpec::json::<ErrorResponse>(400, "Invalid input")),
    )
    .with_params(rules::records_path())
    .with_query(rules::records_query())
}

fn resolve_primary_name_route() -> RouteDefinition<PrimaryNamePath, AccelerationQuery> {
    RouteDefinition::new(
        EndpointDescriptor::get("/primary-name/{address}/{chainId}", ApiGroup::Resolution)
            .operation_id("resolvePrimaryName")
            .summary("Resolve Primary Name")
            .description("Resolves a primary name for a given address and chainId")
            .response(ResponseSpec::json::<PrimaryNameResponse>(
                200,
                "Successfully resolved name",
            ))
            .response(ResponseSpec::json::<ErrorResponse>(400, "Invalid input")),
    )
    .with_params(rules::primary_name_path())
    .with_query(rules::acceleration_query())
}

// ── Meta API (/api) ─────────────────────────────────────────────────

fn config_route() -> RouteDefinition {
    RouteDefinition::new(
        EndpointDescriptor::get("/config", ApiGroup::Meta)
            .operation_id("getConfig")
            .summary("Get ENSApi Public Config")
            .description("Gets the public config of the ENSApi instance")
            .response(ResponseSpec::json::<PublicConfig>(
                200,
                "Successfully retrieved ENSApi public config",
            )),
    )
}

fn indexing_status_route() -> RouteDefinition {
    RouteDefinition::new(
        EndpointDescriptor::get("/indexing-status", ApiGroup::Meta)
            .operation_id("getIndexingStatus")
            .summary("Get ENSIndexer Indexing Status")
            .description(
                "Returns the indexing status snapshot most recently captured from ENSIndexer",
            )
            .response(ResponseSpec::json::<IndexingStatusResponse>(
                200,
                "Successfully retrieved indexing status",
            ))
            .response(ResponseSpec::json::<IndexingStatusResponse>(
                503,
                "Indexing status snapshot unavailable",
            )),
    )
}

// ── Explore API (/api/name-tokens) ──────────────────────────────────

fn name_tokens_route() -> RouteDefinition<(), NameTokensQuery> {
    RouteDefinition::new(
        EndpointDescriptor::get("/name-tokens", ApiGroup::Explore)
            .operation_id("getNameTokens")
            .summary("Get Name Tokens")
            .description("Returns name tokens for the requested identifier (domainId or name)")
            .response(ResponseSpec::json::<NameTokensResponse>(200, "Name tokens known"))
            .response(ResponseSpec::json::<ErrorResponse>(400, "Invalid input"))
            .response(ResponseSpec::json::<NameTokensResponse>(
                404,
                "Name tokens not indexed",
            ))
            .response(ResponseSpec::json::<ErrorResponse>(503, "Service unavailable")),
    )
    .with_query(rules::name_tokens_query())
}
