//! # Record Selection
//!
//! Which fields of a resolved name the caller wants: the name itself, a set
//! of address records by coin type, and/or a set of text records by key.
//!
//! Parsing is split into two stages:
//!
//! 1. [`SelectionParams::validate`] parses each raw query value on its own
//!    and reports every malformed field.
//! 2. [`Selection::from_params`] turns the parsed params into a selection
//!    and rejects one that asks for nothing.

use serde::Serialize;

use crate::error::{FieldErrors, SchemaError};
use crate::params::{parse_bool, parse_coin_type, parse_string_list};
use crate::types::CoinType;

/// Raw selection fields exactly as they arrive in the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSelection<'a> {
    pub name: Option<&'a str>,
    pub addresses: Option<&'a str>,
    pub texts: Option<&'a str>,
}

/// Selection fields after per-field parsing, before the emptiness check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionParams {
    pub name: Option<bool>,
    pub addresses: Option<Vec<CoinType>>,
    pub texts: Option<Vec<String>>,
}

/// A non-empty request for records of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub name: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CoinType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
}

fn parse_coin_types(raw: &str) -> Result<Vec<CoinType>, SchemaError> {
    parse_string_list(raw)?
        .iter()
        .map(|item| parse_coin_type(item))
        .collect()
}

impl SelectionParams {
    /// Parse every present field, collecting all failures.
    pub fn validate(raw: RawSelection<'_>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.collect("name", raw.name.map(parse_bool).transpose());
        let addresses = errors.collect("addresses", raw.addresses.map(parse_coin_types).transpose());
        let texts = errors.collect("texts", raw.texts.map(parse_string_list).transpose());

        errors.into_result(|| Self {
            name: name.flatten(),
            addresses: addresses.flatten(),
            texts: texts.flatten(),
        })
    }
}

impl Selection {
    /// Build a selection from parsed params. `name=false` counts as not
    /// requested; a selection with nothing requested is rejected.
    pub fn from_params(params: SelectionParams) -> Result<Self, SchemaError> {
        let selection = Self {
            name: params.name.unwrap_or(false),
            addresses: params.addresses,
            texts: params.texts,
        };
        if selection.is_empty() {
            return Err(SchemaError::new("Selection cannot be empty"));
        }
        Ok(selection)
    }

    pub fn is_empty(&self) -> bool {
        !self.name && self.addresses.is_none() && self.texts.is_none()
    }
}
