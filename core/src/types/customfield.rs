//! Custom fields: extra data fields attached to orders, contacts, events or
//! tickets, managed under `settings/system/customfields`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::model::impl_model;

/// Object types a custom field can be attached to (`typeid`).
pub mod field_type {
    pub const ORDER: i64 = 13001;
    pub const CONTACT: i64 = 13002;
    pub const EVENT: i64 = 13003;
    pub const TICKET: i64 = 13004;
}

/// Value types of a custom field (`fieldtypeid`).
pub mod value_type {
    pub const STRING: i64 = 12001;
    pub const INTEGER: i64 = 12002;
    pub const DATE: i64 = 12003;
    pub const BOOLEAN: i64 = 12004;
    pub const TEXT: i64 = 12005;
    pub const MULTILANGUAGE_STRING: i64 = 12006;
    pub const MULTILANGUAGE_TEXT: i64 = 12007;
    pub const DECIMAL: i64 = 12008;
    pub const SELECT_SINGLE_DROPDOWN: i64 = 12009;
    pub const SELECT_MULTI_DROPDOWN: i64 = 12010;
    pub const SELECT_SINGLE_OPTIONSET: i64 = 12011;
    pub const SELECT_MULTI_CHECKLIST: i64 = 12012;
    pub const FORMATTED_TEXT: i64 = 12013;
}

/// Who may edit a custom field (`editabletypeid`).
pub mod edit_type {
    /// Only through the API.
    pub const HIDDEN: i64 = 22001;
    /// In the backoffice.
    pub const CRUD: i64 = 22002;
    /// By the customer during checkout.
    pub const CHECKOUT: i64 = 22003;
}

/// A single custom field definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub typeid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub fieldtypeid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub editabletypeid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::boolean")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<CustomfieldAvailability>,
    /// Choices for the select field types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<CustomfieldValue>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::boolean")]
    pub isarchived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub createdts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub lastupdatets: Option<String>,
}

/// Sales channels (or a script) deciding where a custom field is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomfieldAvailability {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int_list")]
    pub saleschannels: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::boolean")]
    pub usescript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub script: Option<String>,
}

/// One choice of a select-type custom field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomfieldValue {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub sortorder: Option<i64>,
}

/// Filters for listing custom fields. Each set field becomes a query
/// parameter of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFieldQuery {
    /// Only return fields attached to this object type.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub typeid: Option<i64>,
    /// Free-text filter.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub filter: Option<String>,
    /// Also return archived fields.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::boolean")]
    pub includearchived: Option<bool>,
    /// Only return fields updated since this timestamp.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub lastupdatesince: Option<String>,
}

/// A page of custom fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomfieldsList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<CustomField>>,
    /// Total number of matching records, across all pages.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub nbrofresults: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub limit: Option<i64>,
}

impl CustomfieldsList {
    /// The records on this page; empty when the server sent no `data`.
    pub fn records(&self) -> &[CustomField] {
        self.data.as_deref().unwrap_or_default()
    }
}

impl_model!(
    CustomField,
    CustomfieldAvailability,
    CustomfieldValue,
    CustomFieldQuery,
    CustomfieldsList,
);

/// Translated strings of a record, keyed by field name followed by a
/// two-letter language code (`captionnl`, `descriptionen`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(pub BTreeMap<String, String>);

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text of `field` in language `lang`.
    pub fn set(&mut self, field: &str, lang: &str, text: impl Into<String>) {
        self.0.insert(format!("{field}{lang}"), text.into());
    }

    pub fn get(&self, field: &str, lang: &str) -> Option<&str> {
        self.0.get(&format!("{field}{lang}")).map(String::as_str)
    }

    /// Regroup the entries as `language -> field -> text`.
    ///
    /// Keys shorter than three characters have no field part and are skipped.
    pub fn by_language(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut grouped: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (key, text) in &self.0 {
            let Some(split) = key.len().checked_sub(2).filter(|&i| i > 0) else {
                continue;
            };
            if !key.is_char_boundary(split) {
                continue;
            }
            let (field, lang) = key.split_at(split);
            grouped
                .entry(lang.to_string())
                .or_default()
                .insert(field.to_string(), text.clone());
        }
        grouped
    }
}

impl FromIterator<(String, String)> for Translations {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
