//! Client round trips against an in-memory transport

use std::{collections::VecDeque, sync::Mutex};

use anyhow::Result;
use async_trait::async_trait;
use b24_core::{
	domain::{Deal, User},
	infra::wire::{GetParams, GetPayload, ListParams},
	ops::{
		batch::Commands,
		deals::DealList,
		users::{UserGet, UserSearch},
	},
	B24Client, BatchError, ClientConfig, ClientError, Method, Transport,
};
use serde_json::{json, Value};
use tracing_test::traced_test;
use url::Url;

/// Replays canned responses and records every request.
#[derive(Default)]
struct ScriptedTransport {
	responses: Mutex<VecDeque<Result<Value>>>,
	requests: Mutex<Vec<(Url, Value)>>,
}

impl ScriptedTransport {
	fn replying(responses: impl IntoIterator<Item = Value>) -> Self {
		Self {
			responses: Mutex::new(responses.into_iter().map(Ok).collect()),
			requests: Mutex::default(),
		}
	}

	fn failing(message: &'static str) -> Self {
		Self {
			responses: Mutex::new(VecDeque::from([Err(anyhow::anyhow!(message))])),
			requests: Mutex::default(),
		}
	}

	fn requests(&self) -> Vec<(Url, Value)> {
		self.requests.lock().unwrap().clone()
	}
}

#[async_trait]
impl Transport for ScriptedTransport {
	async fn post(&self, url: Url, body: Value) -> Result<Value> {
		self.requests.lock().unwrap().push((url, body));
		self.responses
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Err(anyhow::anyhow!("no scripted response left")))
	}
}

fn config() -> ClientConfig {
	ClientConfig::new(Url::parse("https://example.bitrix24.ru/rest/1/secret/").unwrap())
}

#[tokio::test]
async fn call_posts_params_and_decodes_payload() {
	let client = B24Client::new(
		ScriptedTransport::replying([json!({
			"result": { "ID": "1", "NAME": "Anna", "LAST_NAME": "Petrova" },
		})]),
		config(),
	);

	let payload: GetPayload<User> = client.call::<UserGet>(&GetParams::new(1)).await.unwrap();
	assert_eq!(payload.result.full_name(), "Anna Petrova");

	let requests = client.transport().requests();
	assert_eq!(requests.len(), 1);
	assert_eq!(
		requests[0].0.as_str(),
		"https://example.bitrix24.ru/rest/1/secret/user.get.json"
	);
	assert_eq!(requests[0].1, json!({ "id": "1" }));
}

#[tokio::test]
#[traced_test]
async fn error_response_maps_to_api_error() {
	let client = B24Client::new(
		ScriptedTransport::replying([json!({
			"error": "ACCESS_DENIED",
			"error_description": "Access denied.",
		})]),
		config(),
	);

	let err = client.call::<UserGet>(&GetParams::new(1)).await.unwrap_err();
	match err {
		ClientError::Api {
			method,
			code,
			description,
		} => {
			assert_eq!(method, Method::UserGet);
			assert_eq!(code, "ACCESS_DENIED");
			assert_eq!(description, "Access denied.");
		}
		other => panic!("expected an API error, got {other:?}"),
	}

	assert!(logs_contain("Bitrix24 method returned an error"));
}

#[tokio::test]
async fn transport_failure_is_wrapped() {
	let client = B24Client::new(ScriptedTransport::failing("connection reset"), config());

	let err = client.call::<UserGet>(&GetParams::new(1)).await.unwrap_err();
	assert!(matches!(err, ClientError::Transport(_)));
	assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn mismatched_payload_names_the_method() {
	let client = B24Client::new(
		ScriptedTransport::replying([json!({ "result": 42 })]),
		config(),
	);

	let err = client
		.call::<DealList>(&ListParams::new())
		.await
		.unwrap_err();
	assert!(matches!(err, ClientError::Decode { method: Method::CrmDealList, .. }));
}

#[tokio::test]
async fn list_all_follows_next_offsets() {
	let client = B24Client::new(
		ScriptedTransport::replying([
			json!({ "result": [{ "ID": "1" }, { "ID": "2" }], "next": 2, "total": 3 }),
			json!({ "result": [{ "ID": "3" }], "total": 3 }),
		]),
		config(),
	);

	let deals: Vec<Deal> = client
		.list_all::<DealList>(ListParams::new().order_asc("ID"))
		.await
		.unwrap();
	assert_eq!(
		deals.iter().map(|deal| deal.id.as_str()).collect::<Vec<_>>(),
		vec!["1", "2", "3"]
	);

	let requests = client.transport().requests();
	assert_eq!(requests.len(), 2);
	assert_eq!(requests[0].1, json!({ "order": { "ID": "ASC" } }));
	assert_eq!(requests[1].1, json!({ "start": 2, "order": { "ID": "ASC" } }));
}

#[tokio::test]
#[traced_test]
async fn list_all_stops_at_page_limit() {
	let client = B24Client::new(
		ScriptedTransport::replying([
			json!({ "result": [{ "ID": "1" }], "next": 1, "total": 10 }),
			json!({ "result": [{ "ID": "2" }], "next": 2, "total": 10 }),
		]),
		config().max_pages(2),
	);

	let err = client
		.list_all::<UserSearch>(ListParams::new())
		.await
		.unwrap_err();
	assert!(matches!(
		err,
		ClientError::PageLimit {
			method: Method::UserSearch,
			pages: 2
		}
	));
	assert!(logs_contain("Page limit reached"));
}

#[tokio::test]
async fn batch_applies_configured_halt_default() {
	let empty = json!({ "result": { "result": [] } });
	let client = B24Client::new(
		ScriptedTransport::replying([empty.clone(), empty]),
		config().halt_on_error(true),
	);

	let mut commands = Commands::new();
	commands.push::<UserGet>("me", &GetParams::new(1)).unwrap();
	client.batch(commands.clone()).await.unwrap();
	client.batch(commands.halt_on_error(false)).await.unwrap();

	let requests = client.transport().requests();
	assert_eq!(
		requests[0].0.as_str(),
		"https://example.bitrix24.ru/rest/1/secret/batch.json"
	);
	assert_eq!(requests[0].1["halt"], json!(1));
	assert_eq!(requests[1].1["halt"], json!(0));
	assert_eq!(requests[0].1["cmd"], json!({ "me": "user.get?id=1" }));
}

#[tokio::test]
async fn batch_body_keeps_command_order() {
	let client = B24Client::new(
		ScriptedTransport::replying([json!({ "result": { "result": [] } })]),
		config(),
	);

	let mut commands = Commands::new();
	commands.push::<UserGet>("zeta_create", &GetParams::new(1)).unwrap();
	commands
		.push::<UserGet>("alpha_uses_zeta", &GetParams::new("$result[zeta_create]"))
		.unwrap();
	client.batch(commands).await.unwrap();

	let requests = client.transport().requests();
	let labels = requests[0].1["cmd"]
		.as_object()
		.unwrap()
		.keys()
		.cloned()
		.collect::<Vec<_>>();
	assert_eq!(labels, vec!["zeta_create", "alpha_uses_zeta"]);
	assert_eq!(
		requests[0].1["cmd"]["alpha_uses_zeta"],
		json!("user.get?id=%24result%5Bzeta_create%5D")
	);
}

#[tokio::test]
#[traced_test]
async fn batch_results_resolve_by_key() {
	let client = B24Client::new(
		ScriptedTransport::replying([json!({
			"result": {
				"result": {
					"me": { "ID": "1", "NAME": "Anna" },
					"deals": [{ "ID": "7", "TITLE": "Renewal" }],
				},
				"result_error": {
					"ghost": { "error": "NOT_FOUND", "error_description": "Not found" },
				},
				"result_total": { "deals": 1 },
				"result_next": [],
				"result_time": [],
			},
		})]),
		config(),
	);

	let mut commands = Commands::new();
	let me = commands.push::<UserGet>("me", &GetParams::new(1)).unwrap();
	let deals = commands.push::<DealList>("deals", &ListParams::new()).unwrap();
	let ghost = commands.push::<UserGet>("ghost", &GetParams::new(404)).unwrap();

	let payload = client.batch(commands).await.unwrap();

	assert_eq!(payload.get(&me).unwrap().result.name.as_deref(), Some("Anna"));

	let deals = payload.get(&deals).unwrap();
	assert_eq!(deals.total, 1);
	assert!(!deals.has_more());

	assert!(matches!(
		payload.get(&ghost),
		Err(BatchError::Command { code, .. }) if code == "NOT_FOUND"
	));
	assert!(logs_contain("Batch command failed"));
}
