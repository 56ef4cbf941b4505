#![cfg(feature = "reqwest")]

mod common;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use eve_sso::{
	error::{ConfigError, Error, TransportError},
	flows::SsoClient,
};

fn mock_client(server: &MockServer) -> SsoClient<RedirectingHttpClient> {
	SsoClient::with_http_client(test_config(), RedirectingHttpClient::new(server.base_url()))
}

fn expected_basic() -> String {
	format!("Basic {}", STANDARD.encode(format!("{CLIENT_ID}:{CLIENT_SECRET}")))
}

#[tokio::test]
async fn exchange_returns_the_token_payload_unchanged() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.header("authorization", expected_basic())
				.header("content-type", "application/x-www-form-urlencoded")
				.header("user-agent", USER_AGENT)
				.body("code=auth-code-1&grant_type=authorization_code");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"abc\",\"token_type\":\"Bearer\"}");
		})
		.await;
	let token = client
		.exchange_code_for_token("auth-code-1")
		.await
		.expect("Token exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(
		token.as_map(),
		json!({"access_token":"abc","token_type":"Bearer"})
			.as_object()
			.expect("Fixture should be an object.")
	);
	assert_eq!(client.http_client.targets(), vec!["https://login.eveonline.com/oauth/token"]);
}

#[tokio::test]
async fn exchange_surfaces_provider_rejections_verbatim() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"code expired\"}");
		})
		.await;
	let err = client
		.exchange_code_for_token("stale-code")
		.await
		.expect_err("Rejected code should fail.");

	mock.assert_async().await;

	match err {
		Error::ProviderRejected { code, description } => {
			assert_eq!(code, "invalid_grant");
			assert_eq!(description, "code expired");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn exchange_ignores_status_when_body_has_no_error() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(500).body("{\"access_token\":\"still-here\"}");
		})
		.await;
	let token = client
		.exchange_code_for_token("code")
		.await
		.expect("JSON without an error field should succeed regardless of status.");

	assert_eq!(token.str_field("access_token"), Some("still-here"));
}

#[tokio::test]
async fn exchange_wraps_malformed_bodies_as_transport_failures() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(502).body("<html>Bad Gateway</html>");
		})
		.await;
	let err = client
		.exchange_code_for_token("code")
		.await
		.expect_err("HTML body should not parse as JSON.");

	match err {
		Error::TransportFailure(TransportError::MalformedResponse { body, status, .. }) => {
			assert_eq!(body, "<html>Bad Gateway</html>");
			assert_eq!(status, 502);
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn exchange_requires_client_credentials() {
	let mut client = scripted_client(ScriptedHttpClient::body(200, "{}"));

	client.config_mut().set_client_secret("").set_client_id("id");

	// An empty secret is still a configured secret; only absence is rejected.
	client.exchange_code_for_token("code").await.expect("Empty secret should still be sent.");

	let no_secret = SsoClient::with_http_client(
		eve_sso::config::SsoConfig::new().with_client_id("id"),
		ScriptedHttpClient::body(200, "{}"),
	);
	let err = no_secret
		.exchange_code_for_token("code")
		.await
		.expect_err("Missing secret should fail before any request.");

	assert!(matches!(err, Error::Config(ConfigError::MissingClientSecret)));
	assert!(no_secret.http_client.requests().is_empty());

	let no_id = SsoClient::with_http_client(
		eve_sso::config::SsoConfig::new().with_client_secret("secret"),
		ScriptedHttpClient::body(200, "{}"),
	);
	let err = no_id.exchange_code_for_token("code").await.expect_err("Missing ID should fail.");

	assert!(matches!(err, Error::Config(ConfigError::MissingClientId)));
}

#[tokio::test]
async fn exchange_credential_header_round_trips() {
	let client = scripted_client(ScriptedHttpClient::body(200, "{\"access_token\":\"t\"}"));

	client.exchange_code_for_token("code-9").await.expect("Token exchange should succeed.");

	let requests = client.http_client.requests();
	let request = requests.first().expect("One request should be recorded.");
	let header = request.header("authorization").expect("Authorization header should be set.");
	let decoded = STANDARD
		.decode(header.strip_prefix("Basic ").expect("Header should use the Basic scheme."))
		.expect("Credential should be valid Base64.");

	assert_eq!(decoded, format!("{CLIENT_ID}:{CLIENT_SECRET}").into_bytes());
	assert_eq!(request.method, "POST");
	assert_eq!(request.body, b"code=code-9&grant_type=authorization_code");
	assert_eq!(
		request.header("content-length"),
		Some(request.body.len().to_string().as_str())
	);
}

#[tokio::test]
async fn exchange_propagates_connection_failures() {
	let client = scripted_client(ScriptedHttpClient::refused());
	let err =
		client.exchange_code_for_token("code").await.expect_err("Refused connection should fail.");

	assert!(matches!(err, Error::TransportFailure(TransportError::ConnectionFailed { .. })));
}
