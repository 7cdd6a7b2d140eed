//! # Request Validation Rules
//!
//! A [`ValidationRule`] binds a parse function to one part of the request
//! (path parameters or query string) together with the field documentation
//! the OpenAPI generator renders. The server runs `validate`; the generator
//! reads `fields`. Both come from the same value.
//!
//! Composite rules follow two explicit stages, `validate` then `transform`,
//! chained with `Result::and_then`.

use std::collections::BTreeMap;

use ensapi_core::{
    parse_address, parse_bool, parse_chain_id, parse_name, Address, ChainId, EnsName,
    FieldErrors, RawSelection, SchemaError, Selection, SelectionParams,
};

/// Request part a rule validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Path,
    Query,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "param",
            Self::Query => "query",
        }
    }
}

/// Value shape of a documented field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `"true"` or `"false"`.
    BoolString,
    /// An ENS name such as `vitalik.eth`.
    Name,
    /// `0x` followed by 40 hex characters.
    Address,
    /// Decimal digits.
    ChainId,
    /// Comma-separated non-empty values.
    List,
    /// Free-form text.
    Text,
}

/// Documentation of one request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

/// Raw string fields of one request part, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields(BTreeMap<String, String>);

impl RawFields {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn required(&self, field: &str) -> Result<&str, SchemaError> {
        self.get(field).ok_or_else(|| SchemaError::new("Required"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A parse function bound to a request part, plus its field documentation.
pub struct ValidationRule<T> {
    target: Target,
    fields: &'static [FieldSpec],
    validate: fn(&RawFields) -> Result<T, FieldErrors>,
}

impl<T> Clone for ValidationRule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValidationRule<T> {}

impl<T> std::fmt::Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("target", &self.target)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl<T> ValidationRule<T> {
    pub const fn new(
        target: Target,
        fields: &'static [FieldSpec],
        validate: fn(&RawFields) -> Result<T, FieldErrors>,
    ) -> Self {
        Self {
            target,
            fields,
            validate,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn apply(&self, raw: &RawFields) -> Result<T, FieldErrors> {
        (self.validate)(raw)
    }
}

// ── Parsed request values ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsPath {
    pub name: EnsName,
}

/// Records query after per-field validation, before the selection is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsQueryParams {
    pub selection: SelectionParams,
    pub flags: AccelerationQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsQuery {
    pub selection: Selection,
    pub trace: bool,
    pub accelerate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryNamePath {
    pub address: Address,
    pub chain_id: ChainId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccelerationQuery {
    pub trace: bool,
    pub accelerate: bool,
}

/// Identifier to look name tokens up by. Exactly one is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTokensQuery {
    DomainId(String),
    Name(EnsName),
}

// ── Field documentation ─────────────────────────────────────────────

const TRACE: FieldSpec = FieldSpec::optional(
    "trace",
    FieldKind::BoolString,
    "Include a resolution trace in the response",
)
.with_default("false");

const ACCELERATE: FieldSpec = FieldSpec::optional(
    "accelerate",
    FieldKind::BoolString,
    "Attempt accelerated resolution from indexed data",
)
.with_default("false");

pub static RECORDS_PATH_FIELDS: [FieldSpec; 1] = [FieldSpec::required(
    "name",
    FieldKind::Name,
    "ENS name to resolve records for",
)];

pub static RECORDS_QUERY_FIELDS: [FieldSpec; 5] = [
    FieldSpec::optional("name", FieldKind::BoolString, "Whether to resolve the name record"),
    FieldSpec::optional(
        "addresses",
        FieldKind::List,
        "Comma-separated coin types of the address records to resolve",
    ),
    FieldSpec::optional(
        "texts",
        FieldKind::List,
        "Comma-separated keys of the text records to resolve",
    ),
    TRACE,
    ACCELERATE,
];

pub static PRIMARY_NAME_PATH_FIELDS: [FieldSpec; 2] = [
    FieldSpec::required("address", FieldKind::Address, "Address to resolve the primary name of"),
    FieldSpec::required("chainId", FieldKind::ChainId, "Chain id the primary name is set on"),
];

pub static ACCELERATION_QUERY_FIELDS: [FieldSpec; 2] = [TRACE, ACCELERATE];

pub static NAME_TOKENS_QUERY_FIELDS: [FieldSpec; 2] = [
    FieldSpec::optional("domainId", FieldKind::Text, "Domain node hash identifier"),
    FieldSpec::optional("name", FieldKind::Name, "ENS name to look up tokens for"),
];

// ── Rules ───────────────────────────────────────────────────────────

pub fn records_path() -> ValidationRule<RecordsPath> {
    ValidationRule::new(Target::Path, &RECORDS_PATH_FIELDS, validate_records_path)
}

pub fn records_query() -> ValidationRule<RecordsQuery> {
    ValidationRule::new(Target::Query, &RECORDS_QUERY_FIELDS, |raw| {
        validate_records_query(raw).and_then(transform_records_query)
    })
}

pub fn primary_name_path() -> ValidationRule<PrimaryNamePath> {
    ValidationRule::new(
        Target::Path,
        &PRIMARY_NAME_PATH_FIELDS,
        validate_primary_name_path,
    )
}

pub fn acceleration_query() -> ValidationRule<AccelerationQuery> {
    ValidationRule::new(
        Target::Query,
        &ACCELERATION_QUERY_FIELDS,
        validate_acceleration_query,
    )
}

pub fn name_tokens_query() -> ValidationRule<NameTokensQuery> {
    ValidationRule::new(
        Target::Query,
        &NAME_TOKENS_QUERY_FIELDS,
        validate_name_tokens_query,
    )
}

fn parse_flag(raw: &RawFields, field: &str) -> Result<bool, SchemaError> {
    Ok(raw.get(field).map(parse_bool).transpose()?.unwrap_or(false))
}

fn validate_records_path(raw: &RawFields) -> Result<RecordsPath, FieldErrors> {
    let name = raw
        .required("name")
        .and_then(parse_name)
        .map_err(|err| FieldErrors::from(err.at("name")))?;
    Ok(RecordsPath { name })
}

fn validate_acceleration_query(raw: &RawFields) -> Result<AccelerationQuery, FieldErrors> {
    let mut errors = FieldErrors::new();
    let trace = errors.collect("trace", parse_flag(raw, "trace"));
    let accelerate = errors.collect("accelerate", parse_flag(raw, "accelerate"));
    errors.into_result(|| AccelerationQuery {
        trace: trace.unwrap_or_default(),
        accelerate: accelerate.unwrap_or_default(),
    })
}

fn validate_records_query(raw: &RawFields) -> Result<RecordsQueryParams, FieldErrors> {
    let mut errors = FieldErrors::new();
    let selection = errors.absorb(SelectionParams::validate(RawSelection {
        name: raw.get("name"),
        addresses: raw.get("addresses"),
        texts: raw.get("texts"),
    }));
    let flags = errors.absorb(validate_acceleration_query(raw));
    errors.into_result(|| RecordsQueryParams {
        selection: selection.unwrap_or_default(),
        flags: flags.unwrap_or_default(),
    })
}

fn transform_records_query(params: RecordsQueryParams) -> Result<RecordsQuery, FieldErrors> {
    let selection = Selection::from_params(params.selection)
        .map_err(|err| FieldErrors::from(err.at("selection")))?;
    Ok(RecordsQuery {
        selection,
        trace: params.flags.trace,
        accelerate: params.flags.accelerate,
    })
}

fn validate_primary_name_path(raw: &RawFields) -> Result<PrimaryNamePath, FieldErrors> {
    let mut errors = FieldErrors::new();
    let address = errors.collect("address", raw.required("address").and_then(parse_address));
    let chain_id = errors.collect("chainId", raw.required("chainId").and_then(parse_chain_id));
    match (address, chain_id) {
        (Some(address), Some(chain_id)) => Ok(PrimaryNamePath { address, chain_id }),
        _ => Err(errors),
    }
}

fn validate_name_tokens_query(raw: &RawFields) -> Result<NameTokensQuery, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = errors.collect("name", raw.get("name").map(parse_name).transpose());
    let Some(name) = name else {
        return Err(errors);
    };

    match (raw.get("domainId"), name) {
        (Some(domain_id), None) => Ok(NameTokensQuery::DomainId(domain_id.to_string())),
        (None, Some(name)) => Ok(NameTokensQuery::Name(name)),
        _ => {
            let exactly_one =
                SchemaError::new("Exactly one of 'domainId' or 'name' must be provided");
            errors.push(exactly_one.clone().at("domainId"));
            errors.push(exactly_one.at("name"));
            Err(errors)
        }
    }
}
