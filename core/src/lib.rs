//! Synchronous client core for the Ticketmatic API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A caller-supplied
//! `RequestExecutor` performs the round-trip, resolving URLs against a
//! `ClientConfig`.
//!
//! # Design
//! - Endpoint modules (`endpoints::customfields`) are stateless function
//!   groups: `build_*`, `parse_*`, and an executor-driven convenience call
//!   per operation.
//! - Record types (`types`) share one JSON contract (`model::Model`): every
//!   field is optional, unset fields are omitted, scalars are coerced.
//! - Arguments given as "record or raw mapping" are `model::Input` values,
//!   normalized into the record type before serialization.

mod coerce;

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod model;
pub mod types;

pub use config::ClientConfig;
pub use endpoints::customfields;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestExecutor};
pub use model::{Input, Model};
pub use types::{CustomField, CustomFieldQuery, CustomfieldsList, Translations};
