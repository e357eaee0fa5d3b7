//! Client configuration

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};
use url::Url;

/// Page requests [`crate::client::B24Client::list_all`] makes before giving up.
pub const DEFAULT_MAX_PAGES: usize = 200;

/// Settings of a [`crate::client::B24Client`].
///
/// ```toml
/// webhook_url = "https://example.bitrix24.ru/rest/1/abcdef0123456789/"
/// halt_on_error = true
/// max_pages = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Inbound webhook base; method endpoints are resolved against it.
	#[serde(deserialize_with = "webhook_base")]
	pub webhook_url: Url,

	/// Default `halt` flag for batches that do not set one.
	#[serde(default)]
	pub halt_on_error: bool,

	#[serde(default = "default_max_pages")]
	pub max_pages: usize,
}

fn default_max_pages() -> usize {
	DEFAULT_MAX_PAGES
}

impl ClientConfig {
	pub fn new(webhook_url: Url) -> Self {
		Self {
			webhook_url: with_trailing_slash(webhook_url),
			halt_on_error: false,
			max_pages: DEFAULT_MAX_PAGES,
		}
	}

	pub fn halt_on_error(mut self, halt: bool) -> Self {
		self.halt_on_error = halt;
		self
	}

	pub fn max_pages(mut self, max_pages: usize) -> Self {
		self.max_pages = max_pages;
		self
	}

	/// Load config from a TOML file
	pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		info!("Loading client config from {:?}", path);

		let raw = fs::read_to_string(path)
			.with_context(|| format!("failed to read config at {}", path.display()))?;
		let config = Self::from_toml(&raw)
			.with_context(|| format!("invalid config at {}", path.display()))?;

		if config.webhook_url.scheme() != "https" {
			warn!(
				url = %config.webhook_url.host_str().unwrap_or_default(),
				"Webhook is not served over https, the token travels in clear text"
			);
		}

		Ok(config)
	}

	pub fn from_toml(raw: &str) -> Result<Self> {
		Ok(toml::from_str(raw)?)
	}

	/// Write config to a TOML file
	pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let raw = toml::to_string_pretty(self)?;
		fs::write(path, raw)
			.with_context(|| format!("failed to write config at {}", path.display()))?;
		info!("Saved client config to {:?}", path);
		Ok(())
	}
}

fn with_trailing_slash(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	url
}

fn webhook_base<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Url, D::Error> {
	Url::deserialize(deserializer).map(with_trailing_slash)
}
