//! Shared transports for integration tests.

#![allow(dead_code)]

// std
use std::{
	io::{Error as IoError, ErrorKind},
	sync::Mutex,
};
// self
use eve_sso::{
	config::SsoConfig,
	flows::SsoClient,
	http::{HttpFuture, ReqwestHttpClient, SsoHttpClient},
	oauth2::{
		HttpClientError, HttpRequest, HttpResponse,
		http::{HeaderMap, StatusCode, Uri},
	},
	reqwest::Error as ReqwestError,
};

pub const CLIENT_ID: &str = "client-it";
pub const CLIENT_SECRET: &str = "secret-it";
pub const CALLBACK_URL: &str = "https://app.example.com/sso/callback";
pub const USER_AGENT: &str = "eve-sso-it/1.0";

/// Fully populated configuration used across tests.
pub fn test_config() -> SsoConfig {
	SsoConfig::new()
		.with_client_id(CLIENT_ID)
		.with_client_secret(CLIENT_SECRET)
		.with_callback_url(CALLBACK_URL)
		.with_user_agent(USER_AGENT)
}

/// Sends requests through reqwest, but to a mock server instead of the real SSO host.
///
/// The original target of every request is recorded so tests can assert which environment a
/// flow picked.
pub struct RedirectingHttpClient {
	inner: ReqwestHttpClient,
	base_url: String,
	targets: Mutex<Vec<String>>,
}
impl RedirectingHttpClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			inner: ReqwestHttpClient::default(),
			base_url: base_url.into(),
			targets: Mutex::default(),
		}
	}

	pub fn targets(&self) -> Vec<String> {
		self.targets.lock().expect("Target log should not be poisoned.").clone()
	}
}
impl SsoHttpClient for RedirectingHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, mut request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let original = request.uri().clone();
		let path = original.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
		let rewritten: Uri = format!("{}{path}", self.base_url)
			.parse()
			.expect("Rewritten mock server URI should parse.");

		self.targets.lock().expect("Target log should not be poisoned.").push(original.to_string());
		*request.uri_mut() = rewritten;

		self.inner.execute(request)
	}
}

/// Canned transport behavior.
#[derive(Clone, Debug)]
pub enum Reply {
	Body { status: u16, body: &'static str },
	Refused,
}

/// Parts of an outbound request kept for assertions.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
	pub method: String,
	pub uri: String,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}
impl RecordedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}
}

/// Replies without any network and records every request.
pub struct ScriptedHttpClient {
	reply: Reply,
	requests: Mutex<Vec<RecordedRequest>>,
}
impl ScriptedHttpClient {
	pub fn body(status: u16, body: &'static str) -> Self {
		Self { reply: Reply::Body { status, body }, requests: Mutex::default() }
	}

	pub fn refused() -> Self {
		Self { reply: Reply::Refused, requests: Mutex::default() }
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().expect("Request log should not be poisoned.").clone()
	}
}
impl SsoHttpClient for ScriptedHttpClient {
	type TransportError = IoError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let recorded = RecordedRequest {
			method: request.method().to_string(),
			uri: request.uri().to_string(),
			headers: request.headers().clone(),
			body: request.body().clone(),
		};

		self.requests.lock().expect("Request log should not be poisoned.").push(recorded);

		let reply = self.reply.clone();

		Box::pin(async move {
			match reply {
				Reply::Body { status, body } => {
					let mut response = HttpResponse::new(body.as_bytes().to_vec());

					*response.status_mut() =
						StatusCode::from_u16(status).expect("Scripted status should be valid.");

					Ok(response)
				},
				Reply::Refused => Err(HttpClientError::Io(IoError::new(
					ErrorKind::ConnectionRefused,
					"connection refused",
				))),
			}
		})
	}
}

pub fn scripted_client(reply: ScriptedHttpClient) -> SsoClient<ScriptedHttpClient> {
	SsoClient::with_http_client(test_config(), reply)
}
