//! Single request/response exchange with the SSO server.
//!
//! [`SsoClient::perform_request`] turns a [`RequestSpec`] into an HTTP request, stamps the
//! configured user agent, form-encodes the body when present, and parses the fully buffered
//! response as one JSON object. It never retries and holds no state between calls.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use oauth2::http::{
	HeaderMap, HeaderName, HeaderValue, Method as HttpMethod, Request,
	header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*, error::TransportError, flows::SsoClient, http::SsoHttpClient,
	response::ProviderResponse,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP methods used against the SSO server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
}
impl Method {
	/// Returns the method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
		}
	}

	fn as_http(self) -> HttpMethod {
		match self {
			Method::Get => HttpMethod::GET,
			Method::Post => HttpMethod::POST,
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transient description of one outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
	/// Request method.
	pub method: Method,
	/// Absolute `http`/`https` URL.
	pub url: Url,
	/// Extra headers. A `User-Agent` entry is always replaced by the configured one.
	pub headers: BTreeMap<String, String>,
	/// Form fields sent as `application/x-www-form-urlencoded` when present.
	pub body: Option<BTreeMap<String, String>>,
}
impl RequestSpec {
	/// Creates a bodiless request.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: BTreeMap::new(), body: None }
	}

	/// Shorthand for a `GET` request.
	pub fn get(url: Url) -> Self {
		Self::new(Method::Get, url)
	}

	/// Shorthand for a `POST` request.
	pub fn post(url: Url) -> Self {
		Self::new(Method::Post, url)
	}

	/// Adds or replaces a header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}

	/// Adds a form field, creating the body on first use.
	pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.body.get_or_insert_with(BTreeMap::new).insert(key.into(), value.into());

		self
	}

	/// Sets the `Authorization: Basic` header for a client ID and secret.
	pub fn basic_auth(self, client_id: &str, client_secret: &str) -> Self {
		self.header(AUTHORIZATION.as_str(), basic_credentials(client_id, client_secret))
	}

	/// Sets the `Authorization: Bearer` header.
	pub fn bearer_auth(self, access_token: &str) -> Self {
		self.header(AUTHORIZATION.as_str(), format!("Bearer {access_token}"))
	}
}

impl<C> SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// Performs one exchange and parses the response body as a JSON object.
	///
	/// HTTP status codes are not inspected; a JSON body is returned as-is whatever the status,
	/// and a non-JSON body fails with [`TransportError::MalformedResponse`].
	pub async fn perform_request(
		&self,
		spec: RequestSpec,
	) -> Result<ProviderResponse, TransportError> {
		let request = self.build_request(spec)?;
		let response = self.http_client.execute(request).await?;
		let status = response.status().as_u16();

		parse_response(status, response.into_body())
	}

	fn build_request(&self, spec: RequestSpec) -> Result<oauth2::HttpRequest, TransportError> {
		let RequestSpec { method, url, headers, body } = spec;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(TransportError::UnsupportedScheme { scheme: url.scheme().to_owned() });
		}

		let user_agent = self.config().user_agent().trim();

		if user_agent.is_empty() {
			return Err(TransportError::MissingUserAgent);
		}

		let mut header_map = HeaderMap::with_capacity(headers.len() + 3);

		for (name, value) in &headers {
			let name = HeaderName::from_bytes(name.as_bytes())
				.map_err(TransportError::invalid_request)?;
			let value = HeaderValue::from_str(value).map_err(TransportError::invalid_request)?;

			header_map.insert(name, value);
		}

		// Header names are case-insensitive, so this also drops any caller-supplied agent.
		header_map.insert(
			USER_AGENT,
			HeaderValue::from_str(user_agent).map_err(TransportError::invalid_request)?,
		);

		let payload = match body {
			Some(form) => {
				let encoded = encode_form(&form);

				header_map.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
				header_map.insert(CONTENT_LENGTH, HeaderValue::from(encoded.len()));

				encoded.into_bytes()
			},
			None => Vec::new(),
		};
		let mut request =
			Request::builder().method(method.as_http()).uri(url.as_str()).body(payload)?;

		*request.headers_mut() = header_map;

		Ok(request)
	}
}

/// Encodes `client_id:client_secret` as an HTTP Basic credential.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
	format!("Basic {}", STANDARD.encode(format!("{client_id}:{client_secret}")))
}

/// Serializes form fields as `application/x-www-form-urlencoded`.
pub fn encode_form(form: &BTreeMap<String, String>) -> String {
	Serializer::new(String::new()).extend_pairs(form).finish()
}

fn parse_response(status: u16, body: Vec<u8>) -> Result<ProviderResponse, TransportError> {
	serde_json::from_slice(&body).map_err(|source| TransportError::MalformedResponse {
		source,
		body: String::from_utf8_lossy(&body).into_owned(),
		status,
	})
}
