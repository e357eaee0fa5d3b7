use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityType, YesNo};

/// A CRM deal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Deal {
	#[serde(skip_serializing_if = "String::is_empty")]
	pub id: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub type_id: Option<String>,

	/// Pipeline the deal belongs to, `"0"` for the default one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub stage_id: Option<String>,

	/// Percentage, sent by the portal as a string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub probability: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub opportunity: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub contact_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub company_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub lead_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub assigned_by_id: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub opened: Option<YesNo>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub closed: Option<YesNo>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub comments: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub begindate: Option<DateTime<FixedOffset>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub closedate: Option<DateTime<FixedOffset>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub date_create: Option<DateTime<FixedOffset>>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub date_modify: Option<DateTime<FixedOffset>>,

	#[serde(flatten)]
	pub other_fields: BTreeMap<String, Value>,
}

impl Entity for Deal {
	const TYPE: EntityType = EntityType::Deal;
}

impl Deal {
	pub fn is_closed(&self) -> bool {
		self.closed.map(bool::from).unwrap_or(false)
	}
}
