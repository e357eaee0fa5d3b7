use thiserror::Error;

use crate::infra::wire::{Method, MethodKind};

/// A wire identifier outside the closed [`Method`] enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method identifier: {0}")]
pub struct UnknownMethod(pub String);

/// Errors raised while composing and validating the method registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	#[error("method `{method}` is defined by both `{first}` and `{second}`")]
	DuplicateMethod {
		method: Method,
		first: &'static str,
		second: &'static str,
	},

	#[error("method `{0}` has no descriptor")]
	MissingMethod(Method),

	#[error("method `{method}` is described as {described} but classified as {classified}")]
	KindMismatch {
		method: Method,
		described: MethodKind,
		classified: MethodKind,
	},
}

/// A JSON value that does not conform to a method's params or payload shape.
#[derive(Debug, Error)]
pub enum ShapeError {
	#[error("method `{0}` is not registered")]
	Unregistered(Method),

	#[error("params do not match `{method}`: {source}")]
	Params {
		method: Method,
		#[source]
		source: serde_json::Error,
	},

	#[error("payload does not match `{method}`: {source}")]
	Payload {
		method: Method,
		#[source]
		source: serde_json::Error,
	},
}

/// Errors raised while building or reading a `batch` call.
#[derive(Debug, Error)]
pub enum BatchError {
	#[error("a batch holds at most {max} commands")]
	TooManyCommands { max: usize },

	#[error("batch label `{0}` is already used")]
	DuplicateLabel(String),

	#[error("no result for batch label `{0}`")]
	MissingResult(String),

	#[error("batch command `{label}` failed: {code}: {description}")]
	Command {
		label: String,
		code: String,
		description: String,
	},

	#[error("failed to encode params for batch label `{label}`: {source}")]
	Encode {
		label: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to decode result for batch label `{label}`: {source}")]
	Decode {
		label: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Errors raised by [`crate::client::B24Client`].
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("invalid endpoint for `{method}`: {source}")]
	Url {
		method: Method,
		#[source]
		source: url::ParseError,
	},

	#[error("failed to encode params for `{method}`: {source}")]
	Encode {
		method: Method,
		#[source]
		source: serde_json::Error,
	},

	#[error("transport failure: {0:#}")]
	Transport(#[from] anyhow::Error),

	#[error("`{method}` returned {code}: {description}")]
	Api {
		method: Method,
		code: String,
		description: String,
	},

	#[error("failed to decode `{method}` payload: {source}")]
	Decode {
		method: Method,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Batch(#[from] BatchError),

	#[error("`{method}` still had more pages after {pages} requests")]
	PageLimit { method: Method, pages: usize },
}
