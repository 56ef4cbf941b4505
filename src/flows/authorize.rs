//! Login redirect URL construction.

// self
use crate::{
	_prelude::*,
	flows::SsoClient,
	http::SsoHttpClient,
	obs::{self, OperationOutcome, OperationSpan, SsoOperation},
};

/// Path of the authorization endpoint, relative to the environment base URL.
pub const AUTHORIZE_PATH: &str = "/oauth/authorize/";

impl<C> SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// Builds the URL the end user's browser should be sent to in order to log in.
	///
	/// `state_token` is echoed back on the callback and must be unpredictable; see
	/// [`StateToken`](crate::auth::StateToken). No I/O happens here.
	pub fn build_authorization_redirect_url(&self, state_token: &str) -> Result<Url> {
		const OPERATION: SsoOperation = SsoOperation::Authorize;

		let environment = self.config.environment();
		let _guard = OperationSpan::new(OPERATION, "build_redirect_url", environment).entered();

		obs::record_operation_outcome(OPERATION, OperationOutcome::Attempt);

		let result = self.authorization_redirect_url(state_token);

		obs::record_operation_result(OPERATION, &result);

		result
	}

	fn authorization_redirect_url(&self, state_token: &str) -> Result<Url> {
		let client_id = self.require_client_id()?;
		let callback_url = self.require_callback_url()?;
		let mut url = self.config.environment().endpoint(AUTHORIZE_PATH)?;

		url.query_pairs_mut()
			.append_pair("response_type", "code")
			.append_pair("scope", "")
			.append_pair("client_id", client_id)
			.append_pair("redirect_uri", callback_url)
			.append_pair("state", state_token);

		Ok(url)
	}
}
