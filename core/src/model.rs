//! The JSON contract shared by every record type.
//!
//! # Design
//! Records are plain structs whose fields are all `Option<_>`. Serde derives
//! carry the mapping; the conventions every record follows are:
//! - unset fields are skipped on output (`skip_serializing_if`), so a record
//!   only ever emits the keys that were set;
//! - scalar fields decode through `crate::coerce`, so loosely-typed input is
//!   converted to the declared type before it can be serialized;
//! - nested records and arrays of records recurse through their own derives.
//!
//! `Model` adds the entry points endpoints rely on: null-aware decoding with
//! field-level error reporting, serialization to a JSON object, and
//! normalization of caller-supplied raw mappings.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub trait Model: Serialize + DeserializeOwned + Default + PartialEq + fmt::Debug {
    /// Type name used in decode errors.
    const NAME: &'static str;

    /// Decode a record; JSON `null` yields `Ok(None)`.
    fn from_json(value: Value) -> Result<Option<Self>, ApiError> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => decode_object(map).map(Some),
            _ => Err(ApiError::decode(Self::NAME, "expected a JSON object")),
        }
    }

    /// Parse JSON text and decode it with `from_json`.
    fn from_json_str(text: &str) -> Result<Option<Self>, ApiError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ApiError::decode(Self::NAME, e.to_string()))?;
        Self::from_json(value)
    }

    /// Serialize to a JSON object holding only the fields that are set, in
    /// declaration order.
    fn to_json(&self) -> Result<Map<String, Value>, ApiError> {
        match serde_json::to_value(self).map_err(|e| ApiError::Serialization(e.to_string()))? {
            Value::Object(map) => Ok(map),
            _ => Err(ApiError::Serialization(format!(
                "{} did not serialize to an object",
                Self::NAME
            ))),
        }
    }

    /// Build a record from a raw caller mapping.
    ///
    /// Scalars are coerced to their declared types and `null` entries are
    /// treated as unset. Keys that match no field are rejected.
    fn from_partial(map: Map<String, Value>) -> Result<Self, ApiError> {
        let record: Self = decode_object(map.clone())?;
        let emitted = record.to_json()?;
        if let Some(unknown) = unknown_key(&map, &emitted, "") {
            return Err(ApiError::Decode {
                model: Self::NAME,
                field: Some(unknown),
                message: "unknown field".to_string(),
            });
        }
        Ok(record)
    }
}

/// First non-null key of `input`, at any depth, that did not survive into
/// `emitted`. Nested keys are reported as a dotted path.
fn unknown_key(
    input: &Map<String, Value>,
    emitted: &Map<String, Value>,
    prefix: &str,
) -> Option<String> {
    input
        .iter()
        .filter(|(_, value)| !value.is_null())
        .find_map(|(key, value)| {
            let path = format!("{prefix}{key}");
            match emitted.get(key) {
                None => Some(path),
                Some(kept) => unknown_nested(value, kept, &path),
            }
        })
}

fn unknown_nested(input: &Value, emitted: &Value, path: &str) -> Option<String> {
    match (input, emitted) {
        (Value::Object(input), Value::Object(emitted)) => {
            unknown_key(input, emitted, &format!("{path}."))
        }
        (Value::Array(input), Value::Array(emitted)) => input
            .iter()
            .zip(emitted)
            .enumerate()
            .find_map(|(i, (item, kept))| unknown_nested(item, kept, &format!("{path}.{i}"))),
        _ => None,
    }
}

/// Decode a JSON object into `T`. On failure, retries each key on its own to
/// name the field that could not be converted.
fn decode_object<T: Model>(map: Map<String, Value>) -> Result<T, ApiError> {
    let value = Value::Object(map);
    T::deserialize(&value).map_err(|err| {
        let field = value.as_object().and_then(|map| {
            map.iter()
                .find(|(key, item)| {
                    let single: Map<String, Value> =
                        std::iter::once(((*key).clone(), (*item).clone())).collect();
                    T::deserialize(&Value::Object(single)).is_err()
                })
                .map(|(key, _)| key.clone())
        });
        ApiError::Decode {
            model: T::NAME,
            field,
            message: err.to_string(),
        }
    })
}

/// A record argument given either as the typed record or as a raw mapping.
///
/// Endpoints accept `impl Into<Input<T>>` and call `normalize` once, so a raw
/// mapping goes through the same coercion and omission rules as a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    Record(T),
    Raw(Map<String, Value>),
}

impl<T: Model> Input<T> {
    pub fn normalize(self) -> Result<T, ApiError> {
        match self {
            Input::Record(record) => Ok(record),
            Input::Raw(map) => T::from_partial(map),
        }
    }
}

impl<T> From<Map<String, Value>> for Input<T> {
    fn from(map: Map<String, Value>) -> Self {
        Input::Raw(map)
    }
}

/// Implement `Model` for record types and let them be passed as `Input`.
macro_rules! impl_model {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $crate::model::Model for $ty {
                const NAME: &'static str = stringify!($ty);
            }

            impl From<$ty> for $crate::model::Input<$ty> {
                fn from(record: $ty) -> Self {
                    $crate::model::Input::Record(record)
                }
            }
        )*
    };
}

pub(crate) use impl_model;
