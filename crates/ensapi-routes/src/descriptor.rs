//! # Endpoint Descriptors
//!
//! Immutable documentation records for one endpoint: method, path template,
//! group, summary, declared parameters and declared responses. Descriptors
//! carry no handler; they are read by the server binder and the OpenAPI
//! generator alike.

use std::borrow::Cow;
use std::fmt;

use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::rules::{FieldSpec, Target};

/// HTTP method of an endpoint. The API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API group an endpoint belongs to. Doubles as the OpenAPI tag and decides
/// the URL prefix the group is mounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiGroup {
    Resolution,
    Meta,
    Explore,
}

impl ApiGroup {
    /// Tag order in the generated document.
    pub const ALL: [ApiGroup; 3] = [Self::Resolution, Self::Meta, Self::Explore];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Resolution => "Resolution",
            Self::Meta => "Meta",
            Self::Explore => "Explore",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Resolution => "APIs for resolving ENS names and addresses",
            Self::Meta => "APIs for indexing status, configuration, and realtime monitoring",
            Self::Explore => "APIs for exploring the indexed state of ENS",
        }
    }

    /// URL prefix the group's routes are mounted under.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Resolution => "/api/resolve",
            Self::Meta | Self::Explore => "/api",
        }
    }
}

/// A documented request parameter, derived from a validation rule field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub location: Target,
    pub field: &'static FieldSpec,
}

/// Schema of a JSON response body, taken from a `ToSchema` type.
#[derive(Clone, Copy)]
pub struct ResponseBody {
    pub name: fn() -> Cow<'static, str>,
    pub schema: fn() -> RefOr<Schema>,
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResponseBody").field(&(self.name)()).finish()
    }
}

/// One declared response of an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSpec {
    pub status: u16,
    pub description: &'static str,
    pub body: Option<ResponseBody>,
}

impl ResponseSpec {
    /// A response with an `application/json` body described by `T`.
    pub fn json<T: ToSchema>(status: u16, description: &'static str) -> Self {
        Self {
            status,
            description,
            body: Some(ResponseBody {
                name: <T as ToSchema>::name,
                schema: <T as PartialSchema>::schema,
            }),
        }
    }

    /// A response documented by description only.
    pub fn empty(status: u16, description: &'static str) -> Self {
        Self {
            status,
            description,
            body: None,
        }
    }

    pub fn body_name(&self) -> Option<Cow<'static, str>> {
        self.body.map(|body| (body.name)())
    }
}

/// Documentation record for one endpoint, relative to its group prefix.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    pub method: Method,
    /// Path template with `{placeholder}` segments, relative to the group prefix.
    pub path: &'static str,
    pub group: ApiGroup,
    pub operation_id: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParamSpec>,
    pub responses: Vec<ResponseSpec>,
}

impl EndpointDescriptor {
    pub fn new(method: Method, path: &'static str, group: ApiGroup) -> Self {
        Self {
            method,
            path,
            group,
            operation_id: "",
            summary: "",
            description: "",
            parameters: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn get(path: &'static str, group: ApiGroup) -> Self {
        Self::new(Method::Get, path, group)
    }

    pub fn operation_id(mut self, operation_id: &'static str) -> Self {
        self.operation_id = operation_id;
        self
    }

    pub fn summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn response(mut self, response: ResponseSpec) -> Self {
        self.responses.push(response);
        self
    }

    pub(crate) fn document_fields(&mut self, location: Target, fields: &'static [FieldSpec]) {
        self.parameters
            .extend(fields.iter().map(|field| ParamSpec { location, field }));
    }

    /// Names of the `{placeholder}` segments in the path, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .collect()
    }

    pub fn parameters_in(&self, location: Target) -> impl Iterator<Item = &ParamSpec> {
        self.parameters
            .iter()
            .filter(move |param| param.location == location)
    }

    pub fn status_codes(&self) -> Vec<u16> {
        self.responses.iter().map(|r| r.status).collect()
    }
}
