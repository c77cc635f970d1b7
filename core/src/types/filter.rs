use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::model::impl_model;

/// Fields for creating a filter definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateFilterDefinition {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub typeid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub sqlclause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub filtertype: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub checklistquery: Option<String>,
}

impl_model!(CreateFilterDefinition);
