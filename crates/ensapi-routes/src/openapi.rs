//! # OpenAPI Document Generation
//!
//! Builds the OpenAPI 3.1 document from a [`RouteRegistry`] alone: no router,
//! no listener, no handler is ever constructed or called. Paths appear in
//! mount order, so the same registry always renders byte-identical output.
//!
//! Every descriptor is checked before it is rendered; a single bad
//! descriptor fails the whole generation.

use std::collections::BTreeSet;

use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn,
};
use utoipa::openapi::schema::{ObjectBuilder, Type};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    ContentBuilder, InfoBuilder, OpenApi, OpenApiBuilder, PathItem, PathsBuilder, RefOr,
    Required, Response, ResponseBuilder, Schema, ServerBuilder,
};

use crate::definitions::{MountedEndpoint, RouteRegistry};
use crate::descriptor::{EndpointDescriptor, Method, ParamSpec, ResponseSpec};
use crate::documentation::ApiDocumentation;
use crate::error::SpecError;
use crate::rules::{FieldKind, Target};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Output encoding of a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    PrettyJson,
    CompactJson,
    Yaml,
}

/// Generate the OpenAPI document for every endpoint in `registry`.
pub fn generate(registry: &RouteRegistry, docs: &ApiDocumentation) -> Result<OpenApi, SpecError> {
    let mut paths = PathsBuilder::new();
    let mut seen = BTreeSet::new();

    for endpoint in registry.endpoints() {
        let full_path = endpoint.full_path();
        check_endpoint(&endpoint, &full_path)?;

        let method = endpoint.descriptor.method;
        if !seen.insert((method, full_path.clone())) {
            return Err(SpecError::DuplicateOperation {
                method,
                path: full_path,
            });
        }

        tracing::debug!(method = %method, path = %full_path, "documenting endpoint");
        paths = paths.path(
            full_path,
            PathItem::new(http_method(method), operation(endpoint.descriptor)),
        );
    }

    let info = InfoBuilder::new()
        .title(docs.title.clone())
        .version(docs.version.clone())
        .description(Some(docs.description.clone()))
        .build();
    let servers = docs.servers.iter().map(|server| {
        ServerBuilder::new()
            .url(server.url.clone())
            .description(Some(server.description.clone()))
            .build()
    });
    let tags = docs.tags.iter().map(|group| {
        TagBuilder::new()
            .name(group.tag())
            .description(Some(group.description()))
            .build()
    });

    Ok(OpenApiBuilder::new()
        .info(info)
        .servers(Some(servers.collect::<Vec<_>>()))
        .paths(paths.build())
        .tags(Some(tags.collect::<Vec<_>>()))
        .build())
}

/// Serialize a generated document. JSON output ends with a newline.
pub fn render(doc: &OpenApi, format: Format) -> Result<String, SpecError> {
    let rendered = match format {
        Format::PrettyJson => serde_json::to_string_pretty(doc)? + "\n",
        Format::CompactJson => serde_json::to_string(doc)? + "\n",
        Format::Yaml => serde_yaml::to_string(doc)?,
    };
    Ok(rendered)
}

fn check_endpoint(endpoint: &MountedEndpoint<'_>, full_path: &str) -> Result<(), SpecError> {
    let descriptor = endpoint.descriptor;
    let method = descriptor.method;

    let placeholders = descriptor.placeholders();
    let declared: Vec<&str> = descriptor
        .parameters_in(Target::Path)
        .map(|param| param.field.name)
        .collect();

    if let Some(missing) = placeholders.iter().find(|p| !declared.contains(*p)) {
        return Err(SpecError::UndeclaredPlaceholder {
            method,
            path: full_path.to_string(),
            placeholder: missing.to_string(),
        });
    }
    if let Some(unused) = declared.iter().find(|d| !placeholders.contains(*d)) {
        return Err(SpecError::UnusedPathParameter {
            method,
            path: full_path.to_string(),
            name: unused.to_string(),
        });
    }

    if descriptor.responses.is_empty() {
        return Err(SpecError::NoResponses {
            method,
            path: full_path.to_string(),
        });
    }
    if let Some(bad) = descriptor
        .responses
        .iter()
        .find(|r| !(100..=599).contains(&r.status))
    {
        return Err(SpecError::InvalidStatus {
            method,
            path: full_path.to_string(),
            status: bad.status,
        });
    }
    Ok(())
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::Get,
    }
}

fn operation(descriptor: &EndpointDescriptor) -> Operation {
    let mut builder = OperationBuilder::new()
        .tags(Some(vec![descriptor.group.tag().to_string()]))
        .summary(Some(descriptor.summary))
        .description(Some(descriptor.description))
        .operation_id(Some(descriptor.operation_id));

    for param in &descriptor.parameters {
        builder = builder.parameter(parameter(param));
    }
    for spec in &descriptor.responses {
        builder = builder.response(spec.status.to_string(), response(spec));
    }
    builder.build()
}

fn parameter(param: &ParamSpec) -> Parameter {
    let field = param.field;
    let location = match param.location {
        Target::Path => ParameterIn::Path,
        Target::Query => ParameterIn::Query,
    };
    // Path parameters are always required in OpenAPI.
    let required = field.required || param.location == Target::Path;

    ParameterBuilder::new()
        .name(field.name)
        .parameter_in(location)
        .required(if required {
            Required::True
        } else {
            Required::False
        })
        .description(Some(field.description))
        .schema(Some(field_schema(field.kind, field.default)))
        .build()
}

fn field_schema(kind: FieldKind, default: Option<&'static str>) -> RefOr<Schema> {
    let builder = ObjectBuilder::new()
        .schema_type(Type::String)
        .default(default.map(serde_json::Value::from));

    let builder = match kind {
        FieldKind::BoolString => builder.enum_values(Some(["true", "false"])),
        FieldKind::Name => builder.min_length(Some(1)).pattern(Some(r"\.")),
        FieldKind::Address => builder.pattern(Some("^0[xX][0-9a-fA-F]{40}$")),
        FieldKind::ChainId => builder.pattern(Some("^[0-9]+$")),
        FieldKind::List => builder.pattern(Some("^[^,]+(,[^,]+)*$")),
        FieldKind::Text => builder,
    };
    RefOr::T(Schema::Object(builder.build()))
}

fn response(spec: &ResponseSpec) -> Response {
    let builder = ResponseBuilder::new().description(spec.description);
    match spec.body {
        Some(body) => builder
            .content(
                JSON_CONTENT_TYPE,
                ContentBuilder::new().schema(Some((body.schema)())).build(),
            )
            .build(),
        None => builder.build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ApiGroup, EndpointDescriptor};

    fn published() -> serde_json::Value {
        let doc = generate(&RouteRegistry::new(), &ApiDocumentation::published()).unwrap();
        serde_json::to_value(&doc).unwrap()
    }

    #[test]
    fn contains_exactly_the_registry_endpoints_in_mount_order() {
        let doc = generate(&RouteRegistry::new(), &ApiDocumentation::published()).unwrap();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "/api/config",
                "/api/indexing-status",
                "/api/resolve/records/{name}",
                "/api/resolve/primary-name/{address}/{chainId}",
                "/api/name-tokens",
            ]
        );
    }

    #[test]
    fn declared_response_codes_are_rendered() {
        let json = published();
        let registry = RouteRegistry::new();
        for endpoint in registry.endpoints() {
            let responses = &json["paths"][endpoint.full_path()]["get"]["responses"];
            let mut rendered: Vec<u16> = responses
                .as_object()
                .unwrap()
                .keys()
                .map(|code| code.parse().unwrap())
                .collect();
            let mut declared = endpoint.descriptor.status_codes();
            rendered.sort_unstable();
            declared.sort_unstable();
            assert_eq!(rendered, declared, "{}", endpoint.full_path());
        }
    }

    #[test]
    fn operations_carry_summary_and_tag() {
        let json = published();
        let op = &json["paths"]["/api/resolve/records/{name}"]["get"];
        assert_eq!(op["summary"], "Resolve ENS Records");
        assert_eq!(op["tags"], serde_json::json!(["Resolution"]));
        assert_eq!(op["operationId"], "resolveRecords");
    }

    #[test]
    fn parameters_document_location_and_default() {
        let json = published();
        let params = json["paths"]["/api/resolve/primary-name/{address}/{chainId}"]["get"]
            ["parameters"]
            .as_array()
            .unwrap()
            .clone();
        let address = params.iter().find(|p| p["name"] == "address").unwrap();
        assert_eq!(address["in"], "path");
        assert_eq!(address["required"], true);
        let accelerate = params.iter().find(|p| p["name"] == "accelerate").unwrap();
        assert_eq!(accelerate["in"], "query");
        assert_eq!(accelerate["schema"]["default"], "false");
        assert_eq!(accelerate["schema"]["enum"], serde_json::json!(["true", "false"]));
    }

    #[test]
    fn document_metadata_is_rendered() {
        let json = published();
        assert_eq!(json["info"]["title"], "ENSApi APIs");
        assert_eq!(json["servers"].as_array().unwrap().len(), 2);
        let tags: Vec<&str> = json["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["Resolution", "Meta", "Explore"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let registry = RouteRegistry::new();
        let docs = ApiDocumentation::published();
        let a = render(&generate(&registry, &docs).unwrap(), Format::PrettyJson).unwrap();
        let b = render(&generate(&registry, &docs).unwrap(), Format::PrettyJson).unwrap();
        assert_eq!(a, b);
        assert!(a.ends_with("}\n"));
    }

    #[test]
    fn yaml_rendering_round_trips_paths() {
        let doc = generate(&RouteRegistry::new(), &ApiDocumentation::published()).unwrap();
        let yaml = render(&doc, Format::Yaml).unwrap();
        let parsed: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["paths"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn undeclared_placeholder_fails_generation() {
        let mut registry = RouteRegistry::new();
        registry.config.descriptor = EndpointDescriptor::get("/config/{section}", ApiGroup::Meta)
            .response(ResponseSpec::empty(200, "ok"));
        let err = generate(&registry, &ApiDocumentation::published()).unwrap_err();
        assert!(matches!(err, SpecError::UndeclaredPlaceholder { ref placeholder, .. } if placeholder == "section"));
    }

    #[test]
    fn unused_path_parameter_fails_generation() {
        let mut registry = RouteRegistry::new();
        registry.resolve_records.descriptor.path = "/records";
        let err = generate(&registry, &ApiDocumentation::published()).unwrap_err();
        assert!(matches!(err, SpecError::UnusedPathParameter { ref name, .. } if name == "name"));
    }

    #[test]
    fn duplicate_operation_fails_generation() {
        let mut registry = RouteRegistry::new();
        registry.indexing_status.descriptor.path = "/config";
        let err = generate(&registry, &ApiDocumentation::published()).unwrap_err();
        assert!(matches!(err, SpecError::DuplicateOperation { .. }));
    }

    #[test]
    fn missing_or_invalid_responses_fail_generation() {
        let mut registry = RouteRegistry::new();
        registry.config.descriptor.responses.clear();
        assert!(matches!(
            generate(&registry, &ApiDocumentation::published()),
            Err(SpecError::NoResponses { .. })
        ));

        let mut registry = RouteRegistry::new();
        registry.config.descriptor.responses[0].status = 42;
        assert!(matches!(
            generate(&registry, &ApiDocumentation::published()),
            Err(SpecError::InvalidStatus { status: 42, .. })
        ));
    }
}
