//! Custom fields (`/{accountname}/settings/system/customfields`).
//!
//! Custom fields are archivable: `delete` marks a field as archived instead
//! of removing it, and archived fields are only listed when
//! `CustomFieldQuery::includearchived` is set.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestExecutor};
use crate::model::Input;
use crate::types::{CustomField, CustomFieldQuery, CustomfieldsList, Translations};

use super::{check_status, encode, execute, parse_record};

const COLLECTION_PATH: &str = "/{accountname}/settings/system/customfields";
const ITEM_PATH: &str = "/{accountname}/settings/system/customfields/{id}";
const TRANSLATE_PATH: &str = "/{accountname}/settings/system/customfields/{id}/translate";

/// List custom fields matching `params`.
pub fn getlist(
    client: &impl RequestExecutor,
    params: impl Into<Input<CustomFieldQuery>>,
) -> Result<CustomfieldsList, ApiError> {
    let request = build_getlist(params)?;
    parse_getlist(&execute(client, &request)?)
}

/// Fetch a single custom field.
pub fn get(client: &impl RequestExecutor, id: i64) -> Result<CustomField, ApiError> {
    parse_get(&execute(client, &build_get(id))?)
}

/// Create a custom field; the returned record carries the assigned `id`.
pub fn create(
    client: &impl RequestExecutor,
    data: impl Into<Input<CustomField>>,
) -> Result<CustomField, ApiError> {
    let request = build_create(data)?;
    parse_create(&execute(client, &request)?)
}

/// Modify a custom field. Only the fields set in `data` are sent; the
/// server leaves the others unchanged.
pub fn update(
    client: &impl RequestExecutor,
    id: i64,
    data: impl Into<Input<CustomField>>,
) -> Result<CustomField, ApiError> {
    let request = build_update(id, data)?;
    parse_update(&execute(client, &request)?)
}

/// Archive a custom field. It stays retrievable through `get` and through
/// `getlist` with `includearchived`.
pub fn delete(client: &impl RequestExecutor, id: i64) -> Result<(), ApiError> {
    parse_delete(&execute(client, &build_delete(id))?)
}

/// Fetch the translated strings of a custom field.
pub fn translations(client: &impl RequestExecutor, id: i64) -> Result<Translations, ApiError> {
    parse_translations(&execute(client, &build_translations(id))?)
}

/// Update translated strings; `data` is sent verbatim.
pub fn translate(
    client: &impl RequestExecutor,
    id: i64,
    data: &Translations,
) -> Result<Translations, ApiError> {
    let request = build_translate(id, data)?;
    parse_translations(&execute(client, &request)?)
}

pub fn build_getlist(params: impl Into<Input<CustomFieldQuery>>) -> Result<HttpRequest, ApiError> {
    let params = params.into().normalize()?;
    Ok(HttpRequest::new(HttpMethod::Get, COLLECTION_PATH)
        .query("typeid", params.typeid)
        .query("filter", params.filter)
        .query("includearchived", params.includearchived)
        .query("lastupdatesince", params.lastupdatesince))
}

pub fn build_get(id: i64) -> HttpRequest {
    HttpRequest::new(HttpMethod::Get, ITEM_PATH).param("id", id)
}

pub fn build_create(data: impl Into<Input<CustomField>>) -> Result<HttpRequest, ApiError> {
    let body = encode(&data.into().normalize()?)?;
    Ok(HttpRequest::new(HttpMethod::Post, COLLECTION_PATH).json_body(body))
}

pub fn build_update(id: i64, data: impl Into<Input<CustomField>>) -> Result<HttpRequest, ApiError> {
    let body = encode(&data.into().normalize()?)?;
    Ok(HttpRequest::new(HttpMethod::Put, ITEM_PATH)
        .param("id", id)
        .json_body(body))
}

pub fn build_delete(id: i64) -> HttpRequest {
    HttpRequest::new(HttpMethod::Delete, ITEM_PATH).param("id", id)
}

pub fn build_translations(id: i64) -> HttpRequest {
    HttpRequest::new(HttpMethod::Get, TRANSLATE_PATH).param("id", id)
}

pub fn build_translate(id: i64, data: &Translations) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(data).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest::new(HttpMethod::Put, TRANSLATE_PATH)
        .param("id", id)
        .json_body(body))
}

pub fn parse_getlist(response: &HttpResponse) -> Result<CustomfieldsList, ApiError> {
    parse_record(response)
}

pub fn parse_get(response: &HttpResponse) -> Result<CustomField, ApiError> {
    parse_record(response)
}

pub fn parse_create(response: &HttpResponse) -> Result<CustomField, ApiError> {
    parse_record(response)
}

pub fn parse_update(response: &HttpResponse) -> Result<CustomField, ApiError> {
    parse_record(response)
}

/// Any 2xx status is success; the body, if any, is ignored.
pub fn parse_delete(response: &HttpResponse) -> Result<(), ApiError> {
    check_status(response)
}

pub fn parse_translations(response: &HttpResponse) -> Result<Translations, ApiError> {
    check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::decode("Translations", e.to_string()))
}
