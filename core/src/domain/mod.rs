//! CRM domain models
//!
//! Entities mirror the Bitrix24 REST field sets. Field names on the wire are
//! upper snake case (`ASSIGNED_BY_ID`), numeric values usually arrive as
//! strings, and any field this crate does not model (custom `UF_*` fields
//! included) is kept in the entity's `other_fields` bag.

use serde::{Deserialize, Serialize};
use strum::Display;

pub mod contact;
pub mod deal;
pub mod lead;
pub mod multifield;
pub mod status;
pub mod user;

pub use contact::Contact;
pub use deal::Deal;
pub use lead::Lead;
pub use multifield::{Multifield, MultifieldType};
pub use status::{FieldDescriptor, FieldMap, Status};
pub use user::User;

/// Identifier returned by `*.add` methods.
pub type EntityId = u64;

/// The domain entity a method concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum EntityType {
	User,
	Contact,
	Deal,
	Lead,
	Status,
	/// Generic over the inner entity, e.g. `batch`.
	Unknown,
}

/// Implemented by every type usable as a method's entity.
pub trait Entity {
	const TYPE: EntityType;
}

impl Entity for serde_json::Value {
	const TYPE: EntityType = EntityType::Unknown;
}

/// Bitrix boolean flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
	#[serde(rename = "Y")]
	Yes,
	#[serde(rename = "N")]
	No,
}

impl From<bool> for YesNo {
	fn from(value: bool) -> Self {
		if value {
			Self::Yes
		} else {
			Self::No
		}
	}
}

impl From<YesNo> for bool {
	fn from(value: YesNo) -> Self {
		matches!(value, YesNo::Yes)
	}
}
