//! In-memory CRM data layer.
//!
//! - `store` - `CrmData` snapshot, `CrmDataStore` context and per-record decoding
//! - `mock` - demo records, roles and users

pub mod mock;
pub mod store;

pub use store::{decode_collection, use_crm_data, CrmData, CrmDataStore};
