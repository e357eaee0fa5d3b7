//! Response payload shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Timing block attached to every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadTime {
	pub start: f64,
	pub finish: f64,
	pub duration: f64,
	pub processing: f64,
	pub date_start: DateTime<FixedOffset>,
	pub date_finish: DateTime<FixedOffset>,

	/// Seconds of the method's time budget already spent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub operating: Option<f64>,
}

/// Payload of a Gettable method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPayload<T> {
	pub result: T,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<PayloadTime>,
}

/// Payload of a Listable method: one page of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPayload<T> {
	pub result: Vec<T>,

	/// Offset of the next page, absent on the last one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next: Option<u32>,

	/// Number of records matching the query across all pages.
	pub total: u32,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<PayloadTime>,
}

impl<T> ListPayload<T> {
	pub fn has_more(&self) -> bool {
		self.next.is_some()
	}
}

/// Payload of `batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPayload {
	pub result: BatchResults,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<PayloadTime>,
}

/// Per-label results of a batch call.
///
/// The portal encodes an empty map as `[]`; those are read as empty maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResults {
	#[serde(default, deserialize_with = "map_or_empty_array")]
	pub result: BTreeMap<String, Value>,

	#[serde(default, deserialize_with = "map_or_empty_array")]
	pub result_error: BTreeMap<String, BatchCommandError>,

	#[serde(default, deserialize_with = "map_or_empty_array")]
	pub result_total: BTreeMap<String, u32>,

	#[serde(default, deserialize_with = "map_or_empty_array")]
	pub result_next: BTreeMap<String, u32>,

	#[serde(default, deserialize_with = "map_or_empty_array")]
	pub result_time: BTreeMap<String, PayloadTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCommandError {
	pub error: String,

	#[serde(default)]
	pub error_description: String,
}

/// The pieces a batch response holds for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPart {
	pub result: Value,
	pub next: Option<u32>,
	pub total: Option<u32>,
	pub time: Option<PayloadTime>,
}

/// Payloads that can be rebuilt from one label of a batch response.
///
/// `BatchPayload` does not implement this: the portal rejects a
/// batch nested in a batch.
pub trait FromBatchPart: Sized {
	fn from_batch_part(part: BatchPart) -> Result<Self, serde_json::Error>;
}

impl<T: DeserializeOwned> FromBatchPart for GetPayload<T> {
	fn from_batch_part(part: BatchPart) -> Result<Self, serde_json::Error> {
		Ok(Self {
			result: serde_json::from_value(part.result)?,
			time: part.time,
		})
	}
}

impl<T: DeserializeOwned> FromBatchPart for ListPayload<T> {
	fn from_batch_part(part: BatchPart) -> Result<Self, serde_json::Error> {
		let result: Vec<T> = serde_json::from_value(part.result)?;
		let total = part.total.unwrap_or(result.len() as u32);

		Ok(Self {
			result,
			next: part.next,
			total,
			time: part.time,
		})
	}
}

fn map_or_empty_array<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
	D: Deserializer<'de>,
	V: Deserialize<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum MapOrSeq<T> {
		Map(BTreeMap<String, T>),
		Seq(Vec<Value>),
	}

	match MapOrSeq::deserialize(deserializer)? {
		MapOrSeq::Map(map) => Ok(map),
		MapOrSeq::Seq(seq) if seq.is_empty() => Ok(BTreeMap::new()),
		MapOrSeq::Seq(_) => Err(de::Error::custom(
			"expected an object keyed by batch label",
		)),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn time() -> Value {
		json!({
			"start": 1714557600.1,
			"finish": 1714557600.3,
			"duration": 0.2,
			"processing": 0.15,
			"date_start": "2024-05-01T12:00:00+03:00",
			"date_finish": "2024-05-01T12:00:00+03:00",
			"operating": 0
		})
	}

	#[test]
	fn list_payload_reads_paging_fields() {
		let payload: ListPayload<Value> = serde_json::from_value(json!({
			"result": [{ "ID": "1" }, { "ID": "2" }],
			"next": 2,
			"total": 5,
			"time": time(),
		}))
		.unwrap();

		assert_eq!(payload.result.len(), 2);
		assert_eq!(payload.next, Some(2));
		assert_eq!(payload.total, 5);
		assert!(payload.has_more());

		let time = payload.time.unwrap();
		assert_eq!(time.date_start.offset().local_minus_utc(), 3 * 3600);
	}

	#[test]
	fn last_page_has_no_next() {
		let payload: ListPayload<Value> =
			serde_json::from_value(json!({ "result": [], "total": 0 })).unwrap();
		assert!(!payload.has_more());
	}

	#[test]
	fn batch_results_accept_php_empty_arrays() {
		let payload: BatchPayload = serde_json::from_value(json!({
			"result": {
				"result": { "user": { "ID": "1" } },
				"result_error": [],
				"result_total": [],
				"result_next": [],
				"result_time": { "user": time() },
			},
			"time": time(),
		}))
		.unwrap();

		assert!(payload.result.result_error.is_empty());
		assert!(payload.result.result.contains_key("user"));
		assert!(payload.result.result_time.contains_key("user"));
	}

	#[test]
	fn batch_results_reject_non_empty_arrays() {
		let err = serde_json::from_value::<BatchResults>(json!({
			"result": [{ "ID": "1" }],
		}))
		.unwrap_err();

		assert!(err.to_string().contains("keyed by batch label"));
	}

	#[test]
	fn list_payload_from_batch_part_falls_back_to_item_count() {
		let payload = ListPayload::<Value>::from_batch_part(BatchPart {
			result: json!([{ "ID": "1" }]),
			next: None,
			total: None,
			time: None,
		})
		.unwrap();

		assert_eq!(payload.total, 1);
	}
}
