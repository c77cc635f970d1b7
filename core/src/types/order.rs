use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce;
use crate::model::impl_model;

/// Changes to an existing order. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOrder {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub deliveryscenarioid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveryaddress: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub paymentscenarioid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub customerid: Option<i64>,
    /// Custom field values keyed by custom field identifier, passed through
    /// untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customfields: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub addresstypeid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub addressee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub street3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub street4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub countrycode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub country: Option<String>,
}

impl_model!(UpdateOrder, Address);
