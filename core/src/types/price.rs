use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::model::impl_model;

/// Which price types are active for which sales channels.
///
/// Every price type is available in `defaultsaleschannelids` unless it is
/// listed in `exceptions`; a listed price type is only available in the
/// sales channels of its exception, so an exception with no channels
/// disables it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceAvailabilityRules {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int_list")]
    pub defaultsaleschannelids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<Vec<PriceAvailabilityRuleException>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceAvailabilityRuleException {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int")]
    pub pricetypeid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "coerce::int_list")]
    pub saleschannelids: Option<Vec<i64>>,
}

impl PriceAvailabilityRules {
    /// Whether `pricetypeid` can be sold through `saleschannelid`.
    pub fn is_available(&self, pricetypeid: i64, saleschannelid: i64) -> bool {
        let exception = self
            .exceptions
            .iter()
            .flatten()
            .find(|e| e.pricetypeid == Some(pricetypeid));
        let channels = match exception {
            Some(e) => e.saleschannelids.as_deref(),
            None => self.defaultsaleschannelids.as_deref(),
        };
        channels.unwrap_or_default().contains(&saleschannelid)
    }
}

impl_model!(PriceAvailabilityRules, PriceAvailabilityRuleException);
