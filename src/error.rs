//! Error taxonomy shared by the configuration store, transport adapter, and flows.

// crates.io
use oauth2::HttpClientError;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical flow error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required setting was missing or unusable when the flow ran.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The SSO server answered with an OAuth `error` payload.
	#[error("SSO server rejected the request: {code} - \"{description}\".")]
	ProviderRejected {
		/// Provider `error` value, verbatim.
		code: String,
		/// Provider `error_description` value, verbatim (empty when absent).
		description: String,
	},
	/// The request never produced a usable response.
	#[error("SSO request failed in transport.")]
	TransportFailure(
		#[from]
		#[source]
		TransportError,
	),
}

/// Configuration failures surfaced when a flow tries to use a setting.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// SSO endpoint could not be joined onto the environment base URL.
	#[error("SSO endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},

	/// Client identifier was never set.
	#[error("Client ID is not configured.")]
	MissingClientId,
	/// Client secret was never set.
	#[error("Client secret is not configured.")]
	MissingClientSecret,
	/// Callback URL was never set.
	#[error("Callback URL is not configured.")]
	MissingCallbackUrl,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures of a single request/response exchange.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client could not reach the server or lost the connection.
	#[error("Connection to the SSO server failed.")]
	ConnectionFailed {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Response body was not a JSON object.
	#[error("SSO server returned a malformed response (HTTP {status}).")]
	MalformedResponse {
		/// JSON parsing failure.
		#[source]
		source: serde_json::Error,
		/// Raw response body, lossily decoded as UTF-8.
		body: String,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Request could not be assembled (invalid header name or value, bad URI).
	#[error("Request could not be constructed.")]
	InvalidRequest {
		/// Underlying construction failure.
		#[source]
		source: BoxError,
	},
	/// Only `http` and `https` URLs are accepted.
	#[error("Unsupported URL scheme `{scheme}`.")]
	UnsupportedScheme {
		/// Scheme of the rejected URL.
		scheme: String,
	},
	/// Configured user agent is empty.
	#[error("User agent must not be empty.")]
	MissingUserAgent,
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn connection_failed(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::ConnectionFailed { source: Box::new(src) }
	}

	/// Wraps a request construction failure.
	pub fn invalid_request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::InvalidRequest { source: Box::new(src) }
	}
}
impl<E> From<HttpClientError<E>> for TransportError
where
	E: 'static + Send + Sync + StdError,
{
	fn from(e: HttpClientError<E>) -> Self {
		match e {
			HttpClientError::Reqwest(inner) => Self::connection_failed(*inner),
			HttpClientError::Http(inner) => Self::invalid_request(inner),
			HttpClientError::Io(inner) => Self::connection_failed(inner),
			HttpClientError::Other(message) => Self::ConnectionFailed { source: message.into() },
			_ => Self::ConnectionFailed { source: "Unrecognized HTTP client failure.".into() },
		}
	}
}
impl From<oauth2::http::Error> for TransportError {
	fn from(e: oauth2::http::Error) -> Self {
		Self::invalid_request(e)
	}
}
