use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityType, Multifield, YesNo};

/// A CRM contact.
///
/// Also used as the `fields` object of `crm.contact.add` / `crm.contact.update`,
/// where every unset field is left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Contact {
	/// Empty until the contact exists on the portal.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub id: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub honorific: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub second_name: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,

	/// Job title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub post: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub company_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub type_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub source_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub assigned_by_id: Option<String>,

	/// Visible to every user.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub opened: Option<YesNo>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub comments: Option<String>,

	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub phone: Vec<Multifield>,

	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub email: Vec<Multifield>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub date_create: Option<DateTime<FixedOffset>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub date_modify: Option<DateTime<FixedOffset>>,

	#[serde(flatten)]
	pub other_fields: BTreeMap<String, Value>,
}

impl Entity for Contact {
	const TYPE: EntityType = EntityType::Contact;
}
