//! PHP-style query string encoding.
//!
//! Batch commands travel as `method?query`, and the portal parses the query
//! with PHP rules: nested objects become `key[sub]`, arrays become `key[0]`.

use serde_json::Value;
use url::form_urlencoded;

/// Encode a params object, e.g. `{"filter": {">ID": 1}}` to `filter%5B%3EID%5D=1`.
///
/// `null` values are dropped, booleans become `1` / `0`.
pub fn encode(params: &Value) -> String {
	let mut pairs = Vec::new();
	flatten("", params, &mut pairs);

	let mut serializer = form_urlencoded::Serializer::new(String::new());
	for (key, value) in &pairs {
		serializer.append_pair(key, value);
	}
	serializer.finish()
}

fn flatten(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
	match value {
		Value::Null => {}
		Value::Bool(flag) => pairs.push((prefix.to_string(), if *flag { "1" } else { "0" }.into())),
		Value::Number(number) => pairs.push((prefix.to_string(), number.to_string())),
		Value::String(string) => pairs.push((prefix.to_string(), string.clone())),
		Value::Array(items) => {
			for (index, item) in items.iter().enumerate() {
				flatten(&nested_key(prefix, &index.to_string()), item, pairs);
			}
		}
		Value::Object(fields) => {
			for (key, item) in fields {
				flatten(&nested_key(prefix, key), item, pairs);
			}
		}
	}
}

fn nested_key(prefix: &str, key: &str) -> String {
	if prefix.is_empty() {
		key.to_string()
	} else {
		format!("{prefix}[{key}]")
	}
}
