//! HTTP client seam for SSO requests.
//!
//! [`SsoHttpClient`] is the crate's only dependency on an HTTP stack. The transport adapter in
//! [`crate::transport`] assembles a complete [`HttpRequest`] (headers, body, user agent) and hands
//! it to the client, which must resolve exactly once: either with the full buffered response or
//! with an [`HttpClientError`]. Plug in a custom implementation to reuse an existing connection
//! pool, to add proxies, or to fake the SSO server in tests.

// crates.io
use oauth2::{HttpClientError, HttpRequest, HttpResponse};
// self
use crate::_prelude::*;

/// Future returned by [`SsoHttpClient::execute`].
pub type HttpFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports able to perform one SSO request/response exchange.
///
/// Implementations must be `Send + Sync + 'static` so a client can be shared across tasks,
/// and the returned future must be `Send`. The response body must hold the complete payload:
/// implementations read until the server signals end of stream before resolving.
pub trait SsoHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves once with the buffered response.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The SSO token and verify endpoints answer directly; build the wrapped client with
/// redirects disabled (see [`ReqwestHttpClient::without_redirects`]) if a misrouted request
/// should fail instead of being followed.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that never follows HTTP redirects.
	pub fn without_redirects() -> Result<Self, crate::error::ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SsoHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			// `bytes` drains the body to end of stream before returning.
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
