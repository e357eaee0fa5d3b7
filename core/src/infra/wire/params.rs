//! Request parameter shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::YesNo;

/// Params of every Listable method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListParams {
	/// Number of records to skip before the page starts.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start: Option<u32>,

	/// Server-side sort, field name to direction.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order: Option<BTreeMap<String, SortOrder>>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filter: Option<ListFilter>,

	/// Field projection.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub select: Option<Vec<SelectField>>,
}

impl ListParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn start(mut self, start: u32) -> Self {
		self.start = Some(start);
		self
	}

	pub fn order_asc(mut self, field: impl Into<String>) -> Self {
		self.order
			.get_or_insert_with(BTreeMap::new)
			.insert(field.into(), SortOrder::Asc);
		self
	}

	pub fn filter(mut self, filter: ListFilter) -> Self {
		self.filter = Some(filter);
		self
	}

	pub fn select<I, F>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = F>,
		F: Into<SelectField>,
	{
		self.select
			.get_or_insert_with(Vec::new)
			.extend(fields.into_iter().map(Into::into));
		self
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
	#[serde(rename = "ASC")]
	Asc,
}

/// Filter of a list call.
///
/// Keys are field names prefixed with a comparator (`>PROBABILITY`). Only the
/// known keys are typed; everything else is passed through as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
	#[serde(
		rename = ">PROBABILITY",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub probability_above: Option<u32>,

	#[serde(flatten)]
	pub other: BTreeMap<String, Value>,
}

impl ListFilter {
	pub fn probability_above(mut self, probability: u32) -> Self {
		self.probability_above = Some(probability);
		self
	}

	/// Add a raw filter entry, e.g. `("=STAGE_ID", "WON")`.
	pub fn raw(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.other.insert(key.into(), value.into());
		self
	}
}

/// One token of a `select` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SelectField {
	/// `*`, the default field set.
	All,
	/// `UF_*`, every custom field.
	AllCustom,
	Field(String),
}

impl From<String> for SelectField {
	fn from(value: String) -> Self {
		match value.as_str() {
			"*" => Self::All,
			"UF_*" => Self::AllCustom,
			_ => Self::Field(value),
		}
	}
}

impl From<&str> for SelectField {
	fn from(value: &str) -> Self {
		Self::from(value.to_string())
	}
}

impl From<SelectField> for String {
	fn from(value: SelectField) -> Self {
		match value {
			SelectField::All => "*".to_string(),
			SelectField::AllCustom => "UF_*".to_string(),
			SelectField::Field(field) => field,
		}
	}
}

/// `{ id }` for single-entity fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetParams {
	pub id: String,
}

impl GetParams {
	pub fn new(id: impl ToString) -> Self {
		Self { id: id.to_string() }
	}
}

/// Extra switches accepted by `*.add` and `*.update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOptions {
	/// Post the change to the activity stream.
	#[serde(
		rename = "REGISTER_SONET_EVENT",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub register_sonet_event: Option<YesNo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddParams<F> {
	pub fields: F,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub params: Option<OperationOptions>,
}

impl<F> AddParams<F> {
	pub fn new(fields: F) -> Self {
		Self {
			fields,
			params: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateParams<F> {
	pub id: String,

	pub fields: F,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub params: Option<OperationOptions>,
}

impl<F> UpdateParams<F> {
	pub fn new(id: impl ToString, fields: F) -> Self {
		Self {
			id: id.to_string(),
			fields,
			params: None,
		}
	}
}

/// Params of `crm.status.list`, which has no paging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusListParams {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order: Option<BTreeMap<String, SortOrder>>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filter: Option<StatusFilter>,
}

impl StatusListParams {
	/// Entries of one reference book.
	pub fn for_entity(entity_id: impl Into<String>) -> Self {
		Self {
			order: None,
			filter: Some(StatusFilter {
				entity_id: Some(entity_id.into()),
				other: BTreeMap::new(),
			}),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusFilter {
	#[serde(
		rename = "ENTITY_ID",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub entity_id: Option<String>,

	#[serde(flatten)]
	pub other: BTreeMap<String, Value>,
}

/// Params of methods that take none; any key is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn list_params_serialize_in_wire_form() {
		let params = ListParams::new()
			.start(50)
			.order_asc("NAME")
			.filter(ListFilter::default().probability_above(30).raw("=STAGE_ID", "WON"))
			.select(["*", "UF_*", "TITLE"]);

		assert_eq!(
			serde_json::to_value(&params).unwrap(),
			json!({
				"start": 50,
				"order": { "NAME": "ASC" },
				"filter": { ">PROBABILITY": 30, "=STAGE_ID": "WON" },
				"select": ["*", "UF_*", "TITLE"],
			})
		);
	}

	#[test]
	fn empty_list_params_serialize_to_empty_object() {
		assert_eq!(serde_json::to_value(ListParams::new()).unwrap(), json!({}));
	}

	#[test]
	fn select_tokens_parse_wildcards() {
		let select: Vec<SelectField> = serde_json::from_value(json!(["*", "UF_*", "NAME"])).unwrap();
		assert_eq!(
			select,
			vec![
				SelectField::All,
				SelectField::AllCustom,
				SelectField::Field("NAME".into())
			]
		);
	}

	#[test]
	fn only_ascending_order_is_accepted() {
		assert!(serde_json::from_value::<ListParams>(json!({ "order": { "NAME": "ASC" } })).is_ok());
		assert!(serde_json::from_value::<ListParams>(json!({ "order": { "NAME": "DESC" } })).is_err());
	}

	#[test]
	fn unknown_filter_keys_pass_through() {
		let filter: ListFilter =
			serde_json::from_value(json!({ ">PROBABILITY": 50, "!STAGE_ID": "LOSE" })).unwrap();

		assert_eq!(filter.probability_above, Some(50));
		assert_eq!(filter.other.get("!STAGE_ID"), Some(&json!("LOSE")));
	}

	#[test]
	fn top_level_keys_outside_the_shape_are_rejected() {
		assert!(serde_json::from_value::<ListParams>(json!({ "id": "5", "bogus": true })).is_err());
		assert!(serde_json::from_value::<GetParams>(json!({ "id": "5", "select": ["*"] })).is_err());
		assert!(serde_json::from_value::<GetParams>(json!({ "id": "5" })).is_ok());
	}

	#[test]
	fn no_params_rejects_any_key() {
		assert!(serde_json::from_value::<NoParams>(json!({})).is_ok());
		assert!(serde_json::from_value::<NoParams>(json!({ "start": 1 })).is_err());
	}
}
