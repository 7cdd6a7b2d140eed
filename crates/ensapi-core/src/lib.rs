//! # ensapi-core: Request Schemas for ENSApi
//!
//! The schema registry shared by every ENSApi route: small, pure parse
//! functions that turn raw request strings into validated domain values.
//! Route definitions, the runtime server and the build-time OpenAPI
//! generator all parse input through this crate, so there is exactly one
//! definition of what a valid name, address or selection is.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for validated input.** `EnsName`, `Address`, `ChainId` and
//!    `CoinType` can only be obtained through their parse functions.
//!
//! 2. **Validate, then transform.** Composite inputs such as [`Selection`]
//!    are parsed in two explicit stages: `validate(raw) -> Result<Parsed,
//!    FieldErrors>` followed by a transform into the domain value.
//!
//! 3. **Field-level failures.** Every rejection carries the offending field
//!    and a human-readable message so the HTTP layer can surface both.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ensapi-*` crates (leaf of the DAG).
//! - No I/O, no web framework, no global state.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod params;
pub mod selection;
pub mod types;

pub use error::{FieldError, FieldErrors, SchemaError};
pub use params::{
    parse_address, parse_bool, parse_chain_id, parse_coin_type, parse_name, parse_string_list,
};
pub use selection::{RawSelection, Selection, SelectionParams};
pub use types::{Address, ChainId, CoinType, EnsName};
