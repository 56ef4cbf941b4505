//! Random `state` values for binding a login redirect to the session that started it.
//!
//! The flows never generate or check state themselves; callers that have no token source of
//! their own can mint one here, stash it alongside the user's session, and compare it when the
//! SSO server redirects back.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

const STATE_LEN: usize = 32;

/// Opaque, unpredictable state token.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateToken(String);
impl StateToken {
	/// Generates a fresh alphanumeric token from the thread-local CSPRNG.
	pub fn generate() -> Self {
		Self(rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect())
	}

	/// Returns the token as sent in the redirect URL.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Checks the `state` query value returned on the callback.
	pub fn matches(&self, returned: &str) -> bool {
		self.0 == returned
	}
}
impl AsRef<str> for StateToken {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Debug for StateToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "StateToken({})", self.0)
	}
}
impl Display for StateToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
