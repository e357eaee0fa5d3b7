//! Typed Bitrix24 methods, grouped by domain, and the registry composing them.

pub mod batch;
pub mod contacts;
pub mod deals;
pub mod leads;
pub mod registry;
pub mod statuses;
pub mod users;
