use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::model::impl_model;

/// Account information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub shortname: Option<String>,
}

impl_model!(AccountInfo);
