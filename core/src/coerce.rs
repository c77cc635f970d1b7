//! Lenient scalar decoding for model fields.
//!
//! Used as `#[serde(default, deserialize_with = "coerce::int")]` on
//! `Option<_>` fields. `null` decodes to `None`; a compatible scalar of the
//! wrong JSON type (a numeric string on an integer field, a number on a
//! string field) is converted to the declared type. Serialization needs no
//! helper: the Rust field type already fixes the JSON type that is emitted.

use serde::de::{Deserializer, Error, Unexpected};
use serde::Deserialize;
use serde_json::Value;

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Option::<Value>::deserialize(deserializer)?
        .filter(|v| !v.is_null())
        .map(|v| to_int(&v).map_err(D::Error::custom))
        .transpose()
}

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<Value>::deserialize(deserializer)?
        .filter(|v| !v.is_null())
        .map(|v| to_text(v).map_err(D::Error::custom))
        .transpose()
}

pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Option::<Value>::deserialize(deserializer)?
        .filter(|v| !v.is_null())
        .map(|v| to_bool(&v).map_err(D::Error::custom))
        .transpose()
}

pub fn int_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<i64>>, D::Error> {
    list(deserializer, |v| to_int(&v))
}

pub fn string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    list(deserializer, to_text)
}

fn list<'de, D, T>(
    deserializer: D,
    convert: impl Fn(Value) -> Result<T, String>,
) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                convert(item).map_err(|e| D::Error::custom(format!("element {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(other) => Err(D::Error::invalid_type(unexpected(&other), &"an array")),
    }
}

fn to_int(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral))
            .ok_or_else(|| format!("expected an integer, found {n}")),
        Value::String(s) => {
            let text = s.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
                .ok_or_else(|| format!("expected an integer, found string {s:?}"))
        }
        other => Err(format!("expected an integer, found {}", kind(other))),
    }
}

/// `5.0` counts as the integer 5; fractions and out-of-range values do not.
fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

fn to_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("expected a string, found {}", kind(&other))),
    }
}

fn to_bool(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(format!("expected a boolean, found {n}")),
        },
        Value::String(s) => match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(format!("expected a boolean, found string {s:?}")),
        },
        other => Err(format!("expected a boolean, found {}", kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
