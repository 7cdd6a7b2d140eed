//! # Validation Adapter
//!
//! Turns a [`ValidationRule`] into request middleware. The middleware reads
//! the raw strings of the rule's request part, applies the rule, and either
//! rejects the request with a 400 or stores the parsed value in the request
//! extensions, where handlers pick it up with [`Validated`].
//!
//! Rejections never reach the handler. Their body is built from the
//! [`FieldErrors`](ensapi_core::FieldErrors) the rule returned, so every
//! failing field is reported.

use std::any::type_name;
use std::collections::BTreeMap;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path, Query, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::RequestExt;
use ensapi_core::{FieldErrors, SchemaError};
use ensapi_routes::{RawFields, Target, ValidationRule};

use crate::error::AppError;

/// A value produced by a validation rule earlier in the pipeline.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T, S> FromRequestParts<S> for Validated<T>
where
    T: Clone + Send + Sync + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<Validated<T>>()
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "handler asked for {} but no rule produced it",
                    type_name::<T>()
                ))
            })
    }
}

/// Middleware applying `rule` to the request. Use with
/// `axum::middleware::from_fn_with_state(rule, validate::<T>)`.
pub async fn validate<T>(
    State(rule): State<ValidationRule<T>>,
    mut request: Request,
    next: Next,
) -> Response
where
    T: Clone + Send + Sync + 'static,
{
    let raw = match raw_fields(rule.target(), &mut request).await {
        Ok(raw) => raw,
        Err(err) => return err.into_response(),
    };

    match rule.apply(&raw) {
        Ok(value) => {
            request.extensions_mut().insert(Validated(value));
            next.run(request).await
        }
        Err(errors) => {
            tracing::debug!(
                part = rule.target().as_str(),
                path = %request.uri().path(),
                %errors,
                "request rejected by validation"
            );
            AppError::InvalidInput(errors).into_response()
        }
    }
}

/// Raw string values of one request part, keyed by field name.
async fn raw_fields(target: Target, request: &mut Request) -> Result<RawFields, AppError> {
    match target {
        Target::Path => {
            let Path(params) = request
                .extract_parts::<Path<Vec<(String, String)>>>()
                .await
                .map_err(path_rejection)?;
            Ok(params.into_iter().collect())
        }
        Target::Query => {
            // A malformed query string parses as no fields, so the rule
            // reports what is missing instead of a decoding error.
            let fields = Query::<BTreeMap<String, String>>::try_from_uri(request.uri())
                .map(|Query(fields)| fields)
                .unwrap_or_default();
            Ok(RawFields::new(fields))
        }
    }
}

/// Path segments that do not decode to UTF-8 are client input and fail
/// the field they were captured for. Any other rejection means the route
/// was bound without the parameters its rule reads.
fn path_rejection(rejection: PathRejection) -> AppError {
    if let PathRejection::FailedToDeserializePathParams(err) = &rejection {
        if let ErrorKind::InvalidUtf8InPathParam { key } = err.kind() {
            let issue = SchemaError::new("Must be valid UTF-8").at(key.as_str());
            return AppError::InvalidInput(FieldErrors::from(issue));
        }
    }
    AppError::Internal(rejection.body_text())
}
