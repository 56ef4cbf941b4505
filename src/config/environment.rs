//! The two SSO servers a client may talk to.

// self
use crate::{_prelude::*, error::ConfigError};

/// SSO server selection. No other base URLs are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsoEnvironment {
	/// Tranquility login server.
	#[default]
	Production,
	/// Singularity test server.
	Test,
}
impl SsoEnvironment {
	/// Production SSO base URL.
	pub const PRODUCTION_BASE_URL: &'static str = "https://login.eveonline.com";
	/// Test server SSO base URL.
	pub const TEST_BASE_URL: &'static str = "https://sisilogin.testeveonline.com";

	/// Returns the base URL for the environment, without a trailing slash.
	pub const fn base_url(self) -> &'static str {
		match self {
			SsoEnvironment::Production => Self::PRODUCTION_BASE_URL,
			SsoEnvironment::Test => Self::TEST_BASE_URL,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SsoEnvironment::Production => "production",
			SsoEnvironment::Test => "test",
		}
	}

	/// Resolves an absolute endpoint path (e.g. `/oauth/token`) against the base URL.
	pub fn endpoint(self, path: &str) -> Result<Url, ConfigError> {
		Url::parse(self.base_url())
			.and_then(|base| base.join(path))
			.map_err(|source| ConfigError::InvalidEndpoint { source })
	}
}
impl Display for SsoEnvironment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
