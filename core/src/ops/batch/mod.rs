//! The `batch` method
//!
//! A batch bundles up to [`MAX_COMMANDS`] labelled commands into one request.
//! Each command is pushed with its own typed method, which hands back a
//! [`BatchKey`] used to read that command's payload out of the response:
//!
//! ```rust,ignore
//! let mut commands = Commands::new();
//! let user = commands.push::<UserGet>("user", &GetParams::new(1))?;
//! let deals = commands.push::<DealList>("deals", &ListParams::new())?;
//!
//! let payload = client.batch(commands).await?;
//! let user: GetPayload<User> = payload.get(&user)?;
//! let deals: ListPayload<Deal> = payload.get(&deals)?;
//! ```

use std::{fmt, marker::PhantomData};

use serde::{
	de::{self, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;

use crate::{
	error::BatchError,
	infra::wire::{
		query_string, BatchPart, BatchPayload, Composite, FromBatchPart, Method, PayloadOf,
		Wire,
	},
};

/// Upper bound the portal puts on commands per batch.
pub const MAX_COMMANDS: usize = 50;

/// `batch`: runs several commands in one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Batch;

impl Wire for Batch {
	const METHOD: Method = Method::Batch;
	type Entity = Value;
	type Shape = Composite;
	type Output = Value;
	type Params = Commands;
}

const _: () = assert!(Method::Batch.is_gettable());

/// One command of a batch, in wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	pub method: Method,
	/// PHP-style encoded params, possibly empty.
	pub query: String,
}

impl Command {
	fn encode<M: Wire>(label: &str, params: &M::Params) -> Result<Self, BatchError> {
		let params = serde_json::to_value(params).map_err(|source| BatchError::Encode {
			label: label.to_string(),
			source,
		})?;

		Ok(Self {
			method: M::METHOD,
			query: query_string::encode(&params),
		})
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.query.is_empty() {
			write!(f, "{}", self.method)
		} else {
			write!(f, "{}?{}", self.method, self.query)
		}
	}
}

impl Serialize for Command {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Command {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		let (method, query) = raw.split_once('?').unwrap_or((raw.as_str(), ""));

		Ok(Self {
			method: Method::from_wire(method).map_err(de::Error::custom)?,
			query: query.to_string(),
		})
	}
}

/// Params of `batch`: labelled commands, kept in insertion order since later
/// commands may reference earlier results (`$result[label]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Commands {
	#[serde(default, skip_serializing_if = "Option::is_none", with = "halt_flag")]
	halt: Option<bool>,

	#[serde(with = "ordered_commands")]
	cmd: Vec<(String, Command)>,
}

impl Commands {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stop at the first failing command.
	pub fn halt_on_error(mut self, halt: bool) -> Self {
		self.halt = Some(halt);
		self
	}

	/// `None` until set, letting the client apply its configured default.
	pub fn halt(&self) -> Option<bool> {
		self.halt
	}

	/// Add a command, returning the key its payload is read back with.
	///
	/// A batch cannot be nested in another batch; `push::<Batch>` does not
	/// compile.
	pub fn push<M>(
		&mut self,
		label: impl Into<String>,
		params: &M::Params,
	) -> Result<BatchKey<M>, BatchError>
	where
		M: Wire,
		PayloadOf<M>: FromBatchPart,
	{
		let label = label.into();

		if self.cmd.len() >= MAX_COMMANDS {
			return Err(BatchError::TooManyCommands { max: MAX_COMMANDS });
		}

		if self.contains(&label) {
			return Err(BatchError::DuplicateLabel(label));
		}

		let command = Command::encode::<M>(&label, params)?;
		self.cmd.push((label.clone(), command));

		Ok(BatchKey {
			label,
			method: PhantomData,
		})
	}

	pub fn contains(&self, label: &str) -> bool {
		self.cmd.iter().any(|(existing, _)| existing == label)
	}

	pub fn get(&self, label: &str) -> Option<&Command> {
		self.cmd
			.iter()
			.find(|(existing, _)| existing == label)
			.map(|(_, command)| command)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Command)> {
		self.cmd
			.iter()
			.map(|(label, command)| (label.as_str(), command))
	}

	pub fn len(&self) -> usize {
		self.cmd.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cmd.is_empty()
	}
}

/// Handle to one command of a batch, typed by its method.
pub struct BatchKey<M> {
	label: String,
	method: PhantomData<fn() -> M>,
}

impl<M> BatchKey<M> {
	pub fn label(&self) -> &str {
		&self.label
	}
}

impl<M> Clone for BatchKey<M> {
	fn clone(&self) -> Self {
		Self {
			label: self.label.clone(),
			method: PhantomData,
		}
	}
}

impl<M> fmt::Debug for BatchKey<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BatchKey")
			.field("label", &self.label)
			.finish()
	}
}

impl BatchPayload {
	/// Payload of the command pushed under `key`.
	pub fn get<M>(&self, key: &BatchKey<M>) -> Result<PayloadOf<M>, BatchError>
	where
		M: Wire,
		PayloadOf<M>: FromBatchPart,
	{
		let label = key.label();
		let results = &self.result;

		if let Some(failure) = results.result_error.get(label) {
			return Err(BatchError::Command {
				label: label.to_string(),
				code: failure.error.clone(),
				description: failure.error_description.clone(),
			});
		}

		let result = results
			.result
			.get(label)
			.cloned()
			.ok_or_else(|| BatchError::MissingResult(label.to_string()))?;

		PayloadOf::<M>::from_batch_part(BatchPart {
			result,
			next: results.result_next.get(label).copied(),
			total: results.result_total.get(label).copied(),
			time: results.result_time.get(label).cloned(),
		})
		.map_err(|source| BatchError::Decode {
			label: label.to_string(),
			source,
		})
	}

	/// Labels of the commands that failed.
	pub fn failed_labels(&self) -> impl Iterator<Item = &str> {
		self.result.result_error.keys().map(String::as_str)
	}
}

mod halt_flag {
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(halt: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
		match halt {
			Some(halt) => serializer.serialize_u8(u8::from(*halt)),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Flag {
			Bool(bool),
			Int(u8),
		}

		Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
			Flag::Bool(halt) => halt,
			Flag::Int(halt) => halt != 0,
		}))
	}
}

mod ordered_commands {
	use super::*;

	pub fn serialize<S: Serializer>(
		commands: &[(String, Command)],
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(commands.len()))?;
		for (label, command) in commands {
			map.serialize_entry(label, command)?;
		}
		map.end()
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Vec<(String, Command)>, D::Error> {
		struct CommandsVisitor;

		impl<'de> Visitor<'de> for CommandsVisitor {
			type Value = Vec<(String, Command)>;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("an object of labelled batch commands")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut commands = Vec::with_capacity(access.size_hint().unwrap_or(0));
				while let Some((label, command)) = access.next_entry::<String, Command>()? {
					if commands.iter().any(|(existing, _)| existing == &label) {
						return Err(de::Error::custom(format!("duplicate batch label `{label}`")));
					}
					commands.push((label, command));
				}
				Ok(commands)
			}
		}

		deserializer.deserialize_map(CommandsVisitor)
	}
}
