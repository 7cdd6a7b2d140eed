//! # Generation Errors
//!
//! Any of these aborts generation: consumers expect a complete, valid
//! document, so there is no partial output.

use thiserror::Error;

use crate::descriptor::Method;

#[derive(Error, Debug)]
pub enum SpecError {
    /// The path template names a placeholder no path parameter documents.
    #[error("{method} {path}: placeholder `{{{placeholder}}}` has no declared path parameter")]
    UndeclaredPlaceholder {
        method: Method,
        path: String,
        placeholder: String,
    },

    /// A path parameter is declared that the path template does not contain.
    #[error("{method} {path}: path parameter `{name}` does not appear in the path")]
    UnusedPathParameter {
        method: Method,
        path: String,
        name: String,
    },

    /// Two descriptors claim the same method and path.
    #[error("{method} {path}: operation declared more than once")]
    DuplicateOperation { method: Method, path: String },

    /// Status code outside `100..=599`.
    #[error("{method} {path}: invalid response status {status}")]
    InvalidStatus {
        method: Method,
        path: String,
        status: u16,
    },

    /// Descriptor declares no responses.
    #[error("{method} {path}: no responses declared")]
    NoResponses { method: Method, path: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
