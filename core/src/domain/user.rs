use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityType};

/// A Bitrix24 portal user (`user.get`, `user.search`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct User {
	pub id: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub active: Option<bool>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub second_name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub work_position: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub personal_mobile: Option<String>,

	/// Department ids the user belongs to.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub uf_department: Vec<u64>,

	/// `employee`, `extranet`, ...
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_type: Option<String>,

	#[serde(flatten)]
	pub other_fields: BTreeMap<String, Value>,
}

impl Entity for User {
	const TYPE: EntityType = EntityType::User;
}

impl User {
	/// `NAME LAST_NAME`, skipping empty parts.
	pub fn full_name(&self) -> String {
		[self.name.as_deref(), self.last_name.as_deref()]
			.into_iter()
			.flatten()
			.filter(|part| !part.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}
}
