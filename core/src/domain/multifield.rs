use serde::{Deserialize, Serialize};

/// One value of a multi-valued communication field (`PHONE`, `EMAIL`, `WEB`, `IM`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Multifield {
	/// Absent when adding a new value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,

	pub value: String,

	/// `WORK`, `HOME`, `MOBILE`, ...
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value_type: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub type_id: Option<MultifieldType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MultifieldType {
	Phone,
	Email,
	Web,
	Im,
}

impl Multifield {
	pub fn new(value: impl Into<String>, value_type: impl Into<String>) -> Self {
		Self {
			id: None,
			value: value.into(),
			value_type: Some(value_type.into()),
			type_id: None,
		}
	}
}
