use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Moves a JSON request body to a portal endpoint and returns the decoded
/// JSON response body.
///
/// Implementations report connection and HTTP failures through `anyhow`; an
/// error object inside a successful response is left for the client to read.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn post(&self, url: Url, body: Value) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
	async fn post(&self, url: Url, body: Value) -> Result<Value> {
		(**self).post(url, body).await
	}
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
	async fn post(&self, url: Url, body: Value) -> Result<Value> {
		(**self).post(url, body).await
	}
}
