//! # Integration Tests for ensapi-server
//!
//! Drives the assembled application end to end: validation rejections and
//! their error bodies, placeholder responses, the served OpenAPI document and
//! its agreement with the build-time document, and conformance of live
//! responses to the schemas that document declares.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ensapi_routes::{openapi, ApiDocumentation, RouteRegistry};
use ensapi_server::config::AppConfig;
use ensapi_server::AppState;

const ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

/// Helper: build the test app with default configuration.
fn test_app() -> axum::Router {
    let state = AppState::new(AppConfig::default(), RouteRegistry::new()).unwrap();
    ensapi_server::app(state)
}

/// Helper: GET `uri` and return status plus JSON body.
async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Helper: fields named in a 400 body, in order.
fn issue_fields(body: &Value) -> Vec<String> {
    body["details"]["issues"]
        .as_array()
        .map(|issues| {
            issues
                .iter()
                .filter_map(|issue| issue["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Helper: assert a 400 with the shared error shape naming `field`.
fn assert_invalid(status: StatusCode, body: &Value, field: &str) {
    assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    assert_eq!(body["message"], "Invalid Input");
    assert!(
        issue_fields(body).iter().any(|f| f == field),
        "expected an issue for {field}, got {body}"
    );
}

// -- Meta ---------------------------------------------------------------------

#[tokio::test]
async fn test_config_reports_version_and_namespace() {
    let (status, body) = get_json("/api/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "version": "0.0.1", "namespace": "mainnet" })
    );
}

#[tokio::test]
async fn test_indexing_status_is_ok() {
    let (status, body) = get_json("/api/indexing-status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// -- Resolution ---------------------------------------------------------------

#[tokio::test]
async fn test_records_rejects_invalid_name() {
    let (status, body) = get_json("/api/resolve/records/not-a-name?name=true").await;
    assert_invalid(status, &body, "name");
}

#[tokio::test]
async fn test_records_rejects_empty_selection() {
    let (status, body) = get_json("/api/resolve/records/vitalik.eth").await;
    assert_invalid(status, &body, "selection");
}

#[tokio::test]
async fn test_records_reports_every_bad_query_field() {
    let (status, body) = get_json("/api/resolve/records/vitalik.eth?name=yes&trace=1").await;
    assert_invalid(status, &body, "name");
    assert!(issue_fields(&body).contains(&"trace".to_string()));
}

#[tokio::test]
async fn test_records_placeholder_response() {
    let (status, body) =
        get_json("/api/resolve/records/vitalik.eth?name=true&addresses=60,0&texts=avatar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"]["name"], Value::Null);
    assert_eq!(body["accelerationRequested"], false);
    assert_eq!(body["accelerationAttempted"], false);
}

#[tokio::test]
async fn test_primary_name_accepts_mixed_case_address() {
    let (status, body) = get_json(&format!("/api/resolve/primary-name/{ADDRESS}/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], Value::Null);
    assert_eq!(body["accelerationRequested"], false);
}

#[tokio::test]
async fn test_primary_name_rejects_bad_address_and_chain() {
    let (status, body) = get_json("/api/resolve/primary-name/0x1234/mainnet").await;
    assert_invalid(status, &body, "address");
    assert!(issue_fields(&body).contains(&"chainId".to_string()));
}

#[tokio::test]
async fn test_undecodable_path_segments_are_invalid_input() {
    let (status, body) = get_json("/api/resolve/records/%FF.eth?name=true").await;
    assert_invalid(status, &body, "name");

    let (status, body) = get_json("/api/resolve/primary-name/%FF/1").await;
    assert_invalid(status, &body, "address");
}

#[tokio::test]
async fn test_primary_name_rejects_bad_flag() {
    let (status, body) =
        get_json(&format!("/api/resolve/primary-name/{ADDRESS}/1?accelerate=maybe")).await;
    assert_invalid(status, &body, "accelerate");
}

// -- Explore ------------------------------------------------------------------

#[tokio::test]
async fn test_name_tokens_by_name() {
    let (status, body) = get_json("/api/name-tokens?name=vitalik.eth").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "tokens": [] }));
}

#[tokio::test]
async fn test_name_tokens_by_domain_id() {
    let (status, _) = get_json("/api/name-tokens?domainId=0xabc").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_name_tokens_requires_exactly_one_identifier() {
    let (status, body) = get_json("/api/name-tokens").await;
    assert_invalid(status, &body, "domainId");

    let (status, body) = get_json("/api/name-tokens?domainId=0xabc&name=vitalik.eth").await;
    assert_invalid(status, &body, "name");
}

// -- Routing ------------------------------------------------------------------

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get_json("/api/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("/api/does-not-exist"));
}

/// Concrete, valid request URI for a registered endpoint.
fn sample_uri(full_path: &str) -> String {
    let path = full_path
        .replace("{name}", "vitalik.eth")
        .replace("{address}", ADDRESS)
        .replace("{chainId}", "1");
    let query = match full_path {
        "/api/resolve/records/{name}" => "?name=true",
        "/api/name-tokens" => "?name=vitalik.eth",
        _ => "",
    };
    format!("{path}{query}")
}

#[tokio::test]
async fn test_every_registered_endpoint_is_served() {
    let registry = RouteRegistry::new();
    for endpoint in registry.endpoints() {
        let uri = sample_uri(&endpoint.full_path());
        let (status, _) = get_json(&uri).await;
        assert_eq!(status, StatusCode::OK, "{} {uri}", endpoint.descriptor.method);
    }
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_json_is_served() {
    let (status, body) = get_json("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3.1"));
    assert_eq!(body["info"]["title"], "ENSApi APIs");

    let servers = body["servers"].as_array().unwrap();
    assert_eq!(
        servers.last().unwrap()["url"],
        "http://localhost:3000",
        "local server entry is appended last"
    );
}

#[tokio::test]
async fn test_served_paths_match_build_time_document() {
    let build_time =
        openapi::generate(&RouteRegistry::new(), &ApiDocumentation::published()).unwrap();
    let (_, served) = get_json("/openapi.json").await;

    assert_eq!(served["paths"], serde_json::to_value(&build_time.paths).unwrap());
    assert_eq!(served["tags"], serde_json::to_value(&build_time.tags).unwrap());
}

/// Schema the served document declares for `status` on GET `path`.
fn declared_schema(document: &Value, path: &str, status: &str) -> Value {
    document["paths"][path]["get"]["responses"][status]["content"]["application/json"]["schema"]
        .clone()
}

#[tokio::test]
async fn test_live_responses_conform_to_declared_schemas() {
    let (_, document) = get_json("/openapi.json").await;
    let registry = RouteRegistry::new();

    for endpoint in registry.endpoints() {
        let full_path = endpoint.full_path();
        let (status, body) = get_json(&sample_uri(&full_path)).await;
        let schema = declared_schema(&document, &full_path, status.as_str());
        assert!(!schema.is_null(), "{full_path} declares no schema for {status}");

        let validator = jsonschema::validator_for(&schema).unwrap();
        assert!(
            validator.is_valid(&body),
            "{full_path} returned {body} which does not match {schema}"
        );
    }
}

#[tokio::test]
async fn test_error_responses_conform_to_declared_schema() {
    let (_, document) = get_json("/openapi.json").await;
    let schema = declared_schema(&document, "/api/resolve/records/{name}", "400");
    let validator = jsonschema::validator_for(&schema).unwrap();

    let (status, body) = get_json("/api/resolve/records/nope").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(validator.is_valid(&body), "{body} does not match {schema}");
}
