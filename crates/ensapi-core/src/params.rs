//! # Parameter Schemas
//!
//! Pure parse functions for the string shapes that recur across routes.
//! Each takes the raw request text and returns either the parsed value or a
//! [`SchemaError`] naming the violated constraint.

use crate::error::SchemaError;
use crate::types::{Address, ChainId, CoinType, EnsName};

const ADDRESS_HEX_LEN: usize = 40;

/// Parse a boolean string. Only the exact literals `"true"` and `"false"`
/// are accepted.
pub fn parse_bool(raw: &str) -> Result<bool, SchemaError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(SchemaError::new(format!(
            "Expected 'true' or 'false', received '{other}'"
        ))),
    }
}

/// Parse an ENS name: non-empty and containing at least one `.`.
pub fn parse_name(raw: &str) -> Result<EnsName, SchemaError> {
    if raw.is_empty() {
        return Err(SchemaError::new("Name must not be empty"));
    }
    if !raw.contains('.') {
        return Err(SchemaError::new(
            "Must be a valid ENS name (e.g. example.eth)",
        ));
    }
    Ok(EnsName::new_unchecked(raw.to_string()))
}

/// Parse an EVM address (`0x` followed by 40 hex characters, any case) and
/// normalize it to lowercase.
pub fn parse_address(raw: &str) -> Result<Address, SchemaError> {
    let invalid = || SchemaError::new("Must be a valid Ethereum address");

    if raw.len() != 2 + ADDRESS_HEX_LEN || !raw.is_char_boundary(2) {
        return Err(invalid());
    }
    let (prefix, hex) = raw.split_at(2);
    if !prefix.eq_ignore_ascii_case("0x") || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    Ok(Address::new_unchecked(raw.to_ascii_lowercase()))
}

/// Parse a chain id: one or more ASCII decimal digits.
pub fn parse_chain_id(raw: &str) -> Result<ChainId, SchemaError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SchemaError::new("Must be a numeric chain ID"));
    }
    Ok(ChainId::new_unchecked(raw.to_string()))
}

/// Parse a coin type: any non-empty string.
pub fn parse_coin_type(raw: &str) -> Result<CoinType, SchemaError> {
    if raw.is_empty() {
        return Err(SchemaError::new("Coin type must not be empty"));
    }
    Ok(CoinType::new_unchecked(raw.to_string()))
}

/// Split a comma-separated list. Every element must be non-empty, so `""`,
/// `"a,"` and `"a,,b"` are all rejected.
pub fn parse_string_list(raw: &str) -> Result<Vec<String>, SchemaError> {
    let items: Vec<String> = raw.split(',').map(str::to_string).collect();
    if items.iter().any(String::is_empty) {
        return Err(SchemaError::new(
            "Must be a comma-separated list of non-empty values",
        ));
    }
    Ok(items)
}
