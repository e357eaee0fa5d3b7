//! Reference-book entries (`crm.status.*`): lead statuses, deal stages,
//! sources, contact types and the like, grouped by `ENTITY_ID`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityType, YesNo};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Status {
	#[serde(skip_serializing_if = "String::is_empty")]
	pub id: String,

	/// Reference book, e.g. `STATUS`, `SOURCE`, `DEAL_STAGE`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub entity_id: Option<String>,

	/// Code of the entry inside its reference book.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub name_init: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort: Option<String>,

	/// System entries cannot be deleted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub system: Option<YesNo>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,

	/// `S` success, `F` failure, empty while in progress.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub semantics: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_id: Option<String>,

	#[serde(flatten)]
	pub other_fields: BTreeMap<String, Value>,
}

impl Entity for Status {
	const TYPE: EntityType = EntityType::Status;
}

/// Description of one entity field, as returned by `crm.status.fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
	#[serde(rename = "type")]
	pub field_type: String,

	#[serde(default)]
	pub is_required: bool,

	#[serde(default)]
	pub is_read_only: bool,

	#[serde(default)]
	pub is_immutable: bool,

	#[serde(default)]
	pub is_multiple: bool,

	#[serde(default)]
	pub is_dynamic: bool,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
}

/// Field name to descriptor.
pub type FieldMap = BTreeMap<String, FieldDescriptor>;
