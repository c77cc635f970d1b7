//! Record types of the Ticketmatic API.
//!
//! # Design
//! Every field is an `Option`, named exactly like its JSON key. Scalars decode
//! through `crate::coerce`; nested records and lists of records rely on their
//! own derives. See `crate::model` for the shared contract.

pub mod account;
pub mod contact;
pub mod customfield;
pub mod filter;
pub mod order;
pub mod price;

pub use account::AccountInfo;
pub use contact::{BatchContactOperation, BatchContactParameters};
pub use customfield::{
    CustomField, CustomFieldQuery, CustomfieldAvailability, CustomfieldValue, CustomfieldsList,
    Translations,
};
pub use filter::CreateFilterDefinition;
pub use order::{Address, UpdateOrder};
pub use price::{PriceAvailabilityRuleException, PriceAvailabilityRules};
