//! Typed client over a Bitrix24 inbound webhook
//!
//! [`B24Client`] turns a [`Wire`] method into one HTTP round trip: the params
//! are serialized, posted to `{webhook_url}{method}.json` through a
//! [`Transport`], and the response body is decoded as the method's payload.

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{
	config::ClientConfig,
	error::ClientError,
	infra::wire::{BatchPayload, ListParams, ListPayload, Listable, Method, PayloadOf},
	ops::batch::{Batch, Commands},
};

pub use crate::infra::wire::Wire;

pub mod transport;

pub use transport::Transport;

pub struct B24Client<T> {
	transport: T,
	config: ClientConfig,
}

impl<T: Transport> B24Client<T> {
	pub fn new(transport: T, config: ClientConfig) -> Self {
		Self { transport, config }
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// `{webhook_url}{method}.json`
	pub fn endpoint(&self, method: Method) -> Result<Url, ClientError> {
		self.config
			.webhook_url
			.join(&format!("{method}.json"))
			.map_err(|source| ClientError::Url { method, source })
	}

	/// Call `M` once and decode its payload.
	pub async fn call<M: Wire>(&self, params: &M::Params) -> Result<PayloadOf<M>, ClientError> {
		let method = M::METHOD;
		let body = serde_json::to_value(params)
			.map_err(|source| ClientError::Encode { method, source })?;

		let response = self.send(method, body).await?;

		serde_json::from_value(response).map_err(|source| ClientError::Decode { method, source })
	}

	/// Run a batch, applying the configured `halt` default when `commands`
	/// leaves it unset.
	pub async fn batch(&self, mut commands: Commands) -> Result<BatchPayload, ClientError> {
		if commands.halt().is_none() {
			commands = commands.halt_on_error(self.config.halt_on_error);
		}

		let payload = self.call::<Batch>(&commands).await?;

		for label in payload.failed_labels() {
			warn!(%label, "Batch command failed");
		}

		Ok(payload)
	}

	/// Fetch every page of `M`, starting from `params.start`.
	pub async fn list_all<M: Listable>(
		&self,
		params: ListParams,
	) -> Result<Vec<M::Output>, ClientError> {
		let method = M::METHOD;
		let mut records = Vec::new();
		let mut params = params;
		let mut pages = 0;

		loop {
			let page: ListPayload<M::Output> = self.call::<M>(&params).await?;
			pages += 1;
			records.extend(page.result);

			let Some(next) = page.next else {
				debug!(%method, pages, records = records.len(), "Listing complete");
				return Ok(records);
			};

			if pages >= self.config.max_pages {
				warn!(%method, pages, "Page limit reached before the listing ended");
				return Err(ClientError::PageLimit { method, pages });
			}

			params = params.start(next);
		}
	}

	async fn send(&self, method: Method, body: Value) -> Result<Value, ClientError> {
		let url = self.endpoint(method)?;
		debug!(%method, "Calling Bitrix24 method");

		let response = self.transport.post(url, body).await?;

		if let Some(code) = response.get("error") {
			let code = match code {
				Value::String(code) => code.clone(),
				other => other.to_string(),
			};
			let description = response
				.get("error_description")
				.and_then(Value::as_str)
				.unwrap_or_default()
				.to_string();

			warn!(%method, %code, %description, "Bitrix24 method returned an error");
			return Err(ClientError::Api {
				method,
				code,
				description,
			});
		}

		Ok(response)
	}
}
