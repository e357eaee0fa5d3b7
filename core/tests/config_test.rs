use std::fs;

use b24_core::{config::DEFAULT_MAX_PAGES, ClientConfig};
use tempfile::TempDir;
use tracing_test::traced_test;
use url::Url;

#[test]
#[traced_test]
fn load_reads_every_field() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("b24.toml");
	fs::write(
		&path,
		r#"
webhook_url = "https://example.bitrix24.ru/rest/1/secret/"
halt_on_error = true
max_pages = 10
"#,
	)
	.unwrap();

	let config = ClientConfig::load_from(&path).unwrap();
	assert_eq!(
		config.webhook_url.as_str(),
		"https://example.bitrix24.ru/rest/1/secret/"
	);
	assert!(config.halt_on_error);
	assert_eq!(config.max_pages, 10);
	assert!(logs_contain("Loading client config"));
}

#[test]
fn save_then_load_keeps_settings() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("b24.toml");

	let config = ClientConfig::new(Url::parse("https://example.bitrix24.ru/rest/7/token").unwrap())
		.halt_on_error(true);
	config.save_to(&path).unwrap();

	let loaded = ClientConfig::load_from(&path).unwrap();
	assert_eq!(loaded, config);
	assert_eq!(loaded.max_pages, DEFAULT_MAX_PAGES);
}

#[test]
#[traced_test]
fn plain_http_webhook_is_flagged() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("b24.toml");
	fs::write(&path, r#"webhook_url = "http://intranet.local/rest/1/secret/""#).unwrap();

	ClientConfig::load_from(&path).unwrap();
	assert!(logs_contain("not served over https"));
}

#[test]
fn missing_file_reports_its_path() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("absent.toml");

	let err = ClientConfig::load_from(&path).unwrap_err();
	assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn missing_webhook_is_rejected() {
	assert!(ClientConfig::from_toml("halt_on_error = true").is_err());
}
