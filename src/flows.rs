//! The three authorization-code steps, exposed as independent operations on [`SsoClient`].
//!
//! The client keeps no flow state: the caller builds the redirect URL, receives the code on its
//! callback route, exchanges it, and verifies the resulting token, in whatever order its own
//! session handling dictates.

mod authorize;
mod token;
mod verify;

pub use authorize::*;
pub use token::*;
pub use verify::*;

// self
use crate::{_prelude::*, config::SsoConfig, error::ConfigError, http::SsoHttpClient};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestSsoClient = SsoClient<ReqwestHttpClient>;

/// EVE SSO client holding one application's configuration and an HTTP transport.
///
/// Each instance owns its [`SsoConfig`] exclusively, so several applications can run side by
/// side in one process. Cloning is cheap: the transport sits behind an [`Arc`]. Configuration can
/// only change through [`SsoClient::config_mut`], which needs `&mut self`, so no in-flight
/// request can observe a half-applied change.
pub struct SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	config: SsoConfig,
}
impl<C> SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: SsoConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), config }
	}

	/// Borrows the configuration.
	pub fn config(&self) -> &SsoConfig {
		&self.config
	}

	/// Mutably borrows the configuration for chained setters.
	pub fn config_mut(&mut self) -> &mut SsoConfig {
		&mut self.config
	}

	/// Replaces the configuration wholesale.
	pub fn with_config(mut self, config: SsoConfig) -> Self {
		self.config = config;

		self
	}

	pub(crate) fn require_client_id(&self) -> Result<&str, ConfigError> {
		self.config.client_id().ok_or(ConfigError::MissingClientId)
	}

	pub(crate) fn require_client_secret(&self) -> Result<&str, ConfigError> {
		self.config
			.client_secret()
			.map(|secret| secret.expose())
			.ok_or(ConfigError::MissingClientSecret)
	}

	pub(crate) fn require_callback_url(&self) -> Result<&str, ConfigError> {
		self.config.callback_url().ok_or(ConfigError::MissingCallbackUrl)
	}
}
#[cfg(feature = "reqwest")]
impl SsoClient<ReqwestHttpClient> {
	/// Creates a client with its own reqwest-backed transport.
	pub fn new(config: SsoConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Clone for SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: Arc::clone(&self.http_client), config: self.config.clone() }
	}
}
impl<C> Debug for SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SsoClient").field("config", &self.config).finish()
	}
}
