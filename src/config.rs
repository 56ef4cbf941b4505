//! Client configuration: credentials, callback, user agent, and the selected SSO environment.
//!
//! Nothing is validated when a value is set. Missing credentials surface as
//! [`ConfigError`](crate::error::ConfigError) only once a flow tries to use them.

pub mod environment;

pub use environment::*;

// self
use crate::{_prelude::*, auth::Secret};

/// User agent sent when the caller does not configure one.
pub const DEFAULT_USER_AGENT: &str = concat!("eve-sso/", env!("CARGO_PKG_VERSION"));

/// Settings held by one [`SsoClient`](crate::flows::SsoClient).
///
/// Setters return `&mut Self` so configuration can be chained in place; the `with_*` variants
/// consume and return the value for builder-style construction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsoConfig {
	client_id: Option<String>,
	client_secret: Option<Secret>,
	callback_url: Option<String>,
	user_agent: String,
	environment: SsoEnvironment,
}
impl SsoConfig {
	/// Creates an empty configuration targeting production with the default user agent.
	pub fn new() -> Self {
		Self::default()
	}

	/// Client ID issued on the developer application page.
	pub fn client_id(&self) -> Option<&str> {
		self.client_id.as_deref()
	}

	/// Sets the client ID.
	pub fn set_client_id(&mut self, client_id: impl Into<String>) -> &mut Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Builder-style [`set_client_id`](Self::set_client_id).
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.set_client_id(client_id);

		self
	}

	/// Secret key issued on the developer application page.
	pub fn client_secret(&self) -> Option<&Secret> {
		self.client_secret.as_ref()
	}

	/// Sets the client secret.
	pub fn set_client_secret(&mut self, client_secret: impl Into<Secret>) -> &mut Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Builder-style [`set_client_secret`](Self::set_client_secret).
	pub fn with_client_secret(mut self, client_secret: impl Into<Secret>) -> Self {
		self.set_client_secret(client_secret);

		self
	}

	/// Callback URL registered for the application.
	pub fn callback_url(&self) -> Option<&str> {
		self.callback_url.as_deref()
	}

	/// Sets the callback URL.
	pub fn set_callback_url(&mut self, callback_url: impl Into<String>) -> &mut Self {
		self.callback_url = Some(callback_url.into());

		self
	}

	/// Builder-style [`set_callback_url`](Self::set_callback_url).
	pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
		self.set_callback_url(callback_url);

		self
	}

	/// User agent sent with every request.
	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}

	/// Sets the user agent.
	pub fn set_user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Builder-style [`set_user_agent`](Self::set_user_agent).
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.set_user_agent(user_agent);

		self
	}

	/// Currently selected SSO environment.
	pub fn environment(&self) -> SsoEnvironment {
		self.environment
	}

	/// Selects the SSO environment explicitly.
	pub fn set_environment(&mut self, environment: SsoEnvironment) -> &mut Self {
		self.environment = environment;

		self
	}

	/// Switches to the test server when `enabled`, back to production otherwise.
	pub fn select_test_environment(&mut self, enabled: bool) -> &mut Self {
		self.set_environment(if enabled { SsoEnvironment::Test } else { SsoEnvironment::Production })
	}

	/// Builder-style [`select_test_environment`](Self::select_test_environment).
	pub fn with_test_environment(mut self, enabled: bool) -> Self {
		self.select_test_environment(enabled);

		self
	}

	/// Base URL of the selected environment.
	pub fn auth_server_base_url(&self) -> &'static str {
		self.environment.base_url()
	}
}
impl Default for SsoConfig {
	fn default() -> Self {
		Self {
			client_id: None,
			client_secret: None,
			callback_url: None,
			user_agent: DEFAULT_USER_AGENT.into(),
			environment: SsoEnvironment::default(),
		}
	}
}
impl Debug for SsoConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SsoConfig")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("callback_url", &self.callback_url)
			.field("user_agent", &self.user_agent)
			.field("environment", &self.environment)
			.finish()
	}
}
