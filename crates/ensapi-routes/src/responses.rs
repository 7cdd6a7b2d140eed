//! # Response Schemas
//!
//! Wire shapes of every response body. The OpenAPI schemas are derived from
//! these types, and the server serializes exactly these types, so a handler
//! cannot return a shape the document does not describe.

use std::collections::BTreeMap;

use ensapi_core::FieldErrors;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message carried by every validation rejection.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input";

/// Records resolved for a name. Fields that were not selected are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedRecords {
    #[schema(required = true)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordsResponse {
    #[schema(inline)]
    pub records: ResolvedRecords,
    pub acceleration_requested: bool,
    pub acceleration_attempted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryNameResponse {
    #[schema(required = true)]
    pub name: Option<String>,
    pub acceleration_requested: bool,
    pub acceleration_attempted: bool,
}

/// Public configuration of an ENSApi instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublicConfig {
    pub version: String,
    pub namespace: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndexingStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IndexingStatusResponse {
    #[schema(inline)]
    pub status: IndexingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NameToken {
    pub label: String,
    pub labelhash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NameTokensResponse {
    #[schema(inline)]
    pub tokens: Vec<NameToken>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// `{"message": "Invalid Input", "details": {"issues": [...]}}`.
    pub fn invalid_input(errors: &FieldErrors) -> Self {
        Self {
            message: INVALID_INPUT_MESSAGE.to_string(),
            details: serde_json::to_value(errors).ok(),
        }
    }
}
