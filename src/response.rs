//! Parsed SSO server responses.
//!
//! The flows treat every response as an untyped JSON object: they look for an OAuth `error`
//! and otherwise hand the object back unchanged. [`AccessTokenGrant`] and [`CharacterIdentity`]
//! are opt-in typed views for callers that want named fields.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::_prelude::*;

/// Successful token exchange payload (`/oauth/token`).
pub type TokenResponse = ProviderResponse;
/// Successful verification payload (`/oauth/verify`).
pub type IdentityResponse = ProviderResponse;

/// Raised when a response does not fit the requested typed view.
#[derive(Debug, ThisError)]
#[error("Response does not match the expected shape at `{path}`.")]
pub struct ResponseShapeError {
	/// JSON path of the offending field.
	pub path: String,
	/// Underlying deserialization failure.
	#[source]
	pub source: serde_json::Error,
}

/// JSON object returned by the SSO server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderResponse(Map<String, Value>);
impl ProviderResponse {
	/// Wraps an already parsed JSON object.
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	/// Looks up a raw field.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Looks up a string field.
	pub fn str_field(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Borrows the full object.
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Returns the full object.
	pub fn into_map(self) -> Map<String, Value> {
		self.0
	}

	/// Returns `(error, error_description)` when the payload carries a truthy `error` field.
	///
	/// Truthiness follows JSON-as-script rules: `null`, `false`, `0`, and `""` do not count as
	/// errors. A non-string `error` is rendered as its JSON text, and a missing description
	/// becomes an empty string.
	pub fn provider_error(&self) -> Option<(String, String)> {
		let error = self.get("error").filter(|value| is_truthy(value))?;
		let description = match self.get("error_description") {
			None | Some(Value::Null) => String::new(),
			Some(value) => render(value),
		};

		Some((render(error), description))
	}

	/// Deserializes the object into a typed view, reporting the JSON path of any mismatch.
	pub fn deserialize_as<T>(&self) -> Result<T, ResponseShapeError>
	where
		T: DeserializeOwned,
	{
		serde_path_to_error::deserialize(Value::Object(self.0.clone())).map_err(|e| {
			let path = e.path().to_string();

			ResponseShapeError { path, source: e.into_inner() }
		})
	}

	/// Turns a provider `error` payload into [`Error::ProviderRejected`].
	pub(crate) fn into_result(self) -> Result<Self> {
		match self.provider_error() {
			Some((code, description)) => Err(Error::ProviderRejected { code, description }),
			None => Ok(self),
		}
	}
}
impl From<Map<String, Value>> for ProviderResponse {
	fn from(value: Map<String, Value>) -> Self {
		Self(value)
	}
}

/// Typed view over a token exchange payload.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AccessTokenGrant {
	/// Bearer token for authenticated requests.
	pub access_token: String,
	/// Token type, normally `Bearer`.
	pub token_type: String,
	/// Lifetime in seconds.
	#[serde(default)]
	pub expires_in: Option<u64>,
	/// Refresh token, when the application requested one.
	#[serde(default)]
	pub refresh_token: Option<String>,
}
impl Debug for AccessTokenGrant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessTokenGrant")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.field("refresh_token_set", &self.refresh_token.is_some())
			.finish()
	}
}

/// Typed view over a verification payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterIdentity {
	/// Character identifier.
	#[serde(rename = "CharacterID")]
	pub character_id: u64,
	/// Character name.
	pub character_name: String,
	/// Token expiry as reported by the server.
	#[serde(default)]
	pub expires_on: Option<String>,
	/// Space-delimited granted scopes.
	#[serde(default)]
	pub scopes: Option<String>,
	/// Token type, e.g. `Character`.
	#[serde(default)]
	pub token_type: Option<String>,
	/// Hash that changes when the character is transferred to another account.
	#[serde(default)]
	pub character_owner_hash: Option<String>,
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn render(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
