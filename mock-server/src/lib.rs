use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// A stored custom field: the JSON object as last written, plus the
/// server-managed keys (`id`, `isarchived`, `createdts`, `lastupdatets`).
pub type Record = Map<String, Value>;

#[derive(Debug, Default)]
pub struct Store {
    seq: u64,
    next_id: i64,
    fields: BTreeMap<i64, Record>,
    translations: BTreeMap<i64, BTreeMap<String, String>>,
}

impl Store {
    fn tick(&mut self) -> String {
        self.seq += 1;
        timestamp(self.seq)
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub typeid: Option<i64>,
    pub filter: Option<String>,
    pub includearchived: Option<bool>,
    pub lastupdatesince: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Record>,
    pub nbrofresults: usize,
}

/// Keys clients may not set; the server owns them.
const MANAGED_KEYS: [&str; 4] = ["id", "isarchived", "createdts", "lastupdatets"];

const COLLECTION: &str = "/{accountname}/settings/system/customfields";
const ITEM: &str = "/{accountname}/settings/system/customfields/{id}";
const TRANSLATE: &str = "/{accountname}/settings/system/customfields/{id}/translate";

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store {
        next_id: 1,
        ..Store::default()
    }));
    Router::new()
        .route(COLLECTION, get(list_fields).post(create_field))
        .route(ITEM, get(get_field).put(update_field).delete(delete_field))
        .route(TRANSLATE, get(get_translations).put(put_translations))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Deterministic, lexically ordered timestamp for the `seq`-th write.
fn timestamp(seq: u64) -> String {
    format!(
        "2024-01-01 {:02}:{:02}:{:02}",
        seq / 3600 % 24,
        seq / 60 % 60,
        seq % 60
    )
}

fn is_listed(record: &Record, params: &ListParams) -> bool {
    let archived = record.get("isarchived").and_then(Value::as_bool).unwrap_or(false);
    if archived && !params.includearchived.unwrap_or(false) {
        return false;
    }
    if let Some(typeid) = params.typeid {
        if record.get("typeid").and_then(Value::as_i64) != Some(typeid) {
            return false;
        }
    }
    if let Some(since) = &params.lastupdatesince {
        let updated = record.get("lastupdatets").and_then(Value::as_str).unwrap_or("");
        if updated < since.as_str() {
            return false;
        }
    }
    if let Some(filter) = &params.filter {
        let needle = filter.to_lowercase();
        return ["identifier", "caption", "description"].iter().any(|key| {
            record
                .get(*key)
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        });
    }
    true
}

fn strip_managed(mut input: Record) -> Record {
    for key in MANAGED_KEYS {
        input.remove(key);
    }
    input
}

async fn list_fields(
    State(db): State<Db>,
    Path(_accountname): Path<String>,
    Query(params): Query<ListParams>,
) -> Json<ListResponse> {
    let store = db.read().await;
    let data: Vec<Record> = store
        .fields
        .values()
        .filter(|record| is_listed(record, &params))
        .cloned()
        .collect();
    Json(ListResponse {
        nbrofresults: data.len(),
        data,
    })
}

async fn create_field(
    State(db): State<Db>,
    Path(_accountname): Path<String>,
    Json(input): Json<Record>,
) -> Result<Json<Record>, (StatusCode, String)> {
    if input.get("typeid").and_then(Value::as_i64).is_none() {
        return Err((StatusCode::BAD_REQUEST, "typeid is required".to_string()));
    }
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let ts = store.tick();

    let mut record = Record::new();
    record.insert("id".to_string(), Value::from(id));
    record.extend(strip_managed(input));
    record.insert("isarchived".to_string(), Value::Bool(false));
    record.insert("createdts".to_string(), Value::String(ts.clone()));
    record.insert("lastupdatets".to_string(), Value::String(ts));

    debug!(id, "created custom field");
    store.fields.insert(id, record.clone());
    Ok(Json(record))
}

async fn get_field(
    State(db): State<Db>,
    Path((_accountname, id)): Path<(String, i64)>,
) -> Result<Json<Record>, StatusCode> {
    let store = db.read().await;
    store.fields.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_field(
    State(db): State<Db>,
    Path((_accountname, id)): Path<(String, i64)>,
    Json(input): Json<Record>,
) -> Result<Json<Record>, StatusCode> {
    let mut store = db.write().await;
    if !store.fields.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let ts = store.tick();
    let record = store.fields.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    record.extend(strip_managed(input));
    record.insert("lastupdatets".to_string(), Value::String(ts));
    debug!(id, "updated custom field");
    Ok(Json(record.clone()))
}

/// Archive, never remove: the record stays readable and listable with
/// `includearchived=true`.
async fn delete_field(
    State(db): State<Db>,
    Path((_accountname, id)): Path<(String, i64)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    if !store.fields.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let ts = store.tick();
    let record = store.fields.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    record.insert("isarchived".to_string(), Value::Bool(true));
    record.insert("lastupdatets".to_string(), Value::String(ts));
    debug!(id, "archived custom field");
    Ok(StatusCode::NO_CONTENT)
}

async fn get_translations(
    State(db): State<Db>,
    Path((_accountname, id)): Path<(String, i64)>,
) -> Result<Json<BTreeMap<String, String>>, StatusCode> {
    let store = db.read().await;
    if !store.fields.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(store.translations.get(&id).cloned().unwrap_or_default()))
}

/// Merges the submitted strings and answers with the full resulting set.
async fn put_translations(
    State(db): State<Db>,
    Path((_accountname, id)): Path<(String, i64)>,
    Json(input): Json<BTreeMap<String, String>>,
) -> Result<Json<BTreeMap<String, String>>, StatusCode> {
    let mut store = db.write().await;
    if !store.fields.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let translations = store.translations.entry(id).or_default();
    translations.extend(input);
    let result = translations.clone();
    debug!(id, count = result.len(), "updated translations");
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn timestamps_sort_in_write_order() {
        assert_eq!(timestamp(1), "2024-01-01 00:00:01");
        assert_eq!(timestamp(61), "2024-01-01 00:01:01");
        assert!(timestamp(59) < timestamp(60));
    }

    #[test]
    fn archived_records_need_includearchived() {
        let archived = record(json!({"id": 1, "isarchived": true}));
        assert!(!is_listed(&archived, &ListParams::default()));
        let params = ListParams {
            includearchived: Some(true),
            ..Default::default()
        };
        assert!(is_listed(&archived, &params));
    }

    #[test]
    fn filter_is_case_insensitive_over_text_fields() {
        let r = record(json!({"id": 1, "caption": "Shoe Size", "typeid": 13002}));
        let params = ListParams {
            filter: Some("shoe".to_string()),
            ..Default::default()
        };
        assert!(is_listed(&r, &params));
        let params = ListParams {
            filter: Some("hat".to_string()),
            ..Default::default()
        };
        assert!(!is_listed(&r, &params));
    }

    #[test]
    fn typeid_and_lastupdatesince_filter() {
        let r = record(json!({"id": 1, "typeid": 13002, "lastupdatets": "2024-01-01 00:00:05"}));
        let wrong_type = ListParams {
            typeid: Some(13001),
            ..Default::default()
        };
        assert!(!is_listed(&r, &wrong_type));
        let later = ListParams {
            lastupdatesince: Some("2024-01-01 00:00:06".to_string()),
            ..Default::default()
        };
        assert!(!is_listed(&r, &later));
        let earlier = ListParams {
            lastupdatesince: Some("2024-01-01 00:00:05".to_string()),
            ..Default::default()
        };
        assert!(is_listed(&r, &earlier));
    }

    #[test]
    fn managed_keys_are_stripped() {
        let input = record(json!({"id": 99, "isarchived": true, "caption": "x"}));
        assert_eq!(strip_managed(input), record(json!({"caption": "x"})));
    }
}
