use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::model::impl_model;

/// A batch operation on contacts. Either `ids` restricts the operation to
/// the listed contacts, or `excludeids` applies it to every contact except
/// those.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchContactOperation {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int_list")]
    pub excludeids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int_list")]
    pub ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BatchContactParameters>,
}

/// Operation-specific parameters of a `BatchContactOperation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchContactParameters {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string_list")]
    pub addrelationtypes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string_list")]
    pub removerelationtypes: Option<Vec<String>>,
    /// Contact that the others are merged into.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub primarycontact: Option<i64>,
}

impl_model!(BatchContactOperation, BatchContactParameters);
