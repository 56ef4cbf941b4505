//! Access token verification.

// self
use crate::{
	_prelude::*,
	flows::SsoClient,
	http::SsoHttpClient,
	obs::{self, OperationOutcome, OperationSpan, SsoOperation},
	response::IdentityResponse,
	transport::RequestSpec,
};

/// Path of the verify endpoint, relative to the environment base URL.
pub const VERIFY_PATH: &str = "/oauth/verify";

impl<C> SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// Resolves an access token to the character it was issued for.
	pub async fn resolve_identity(&self, access_token: &str) -> Result<IdentityResponse> {
		const OPERATION: SsoOperation = SsoOperation::Verify;

		let span = OperationSpan::new(OPERATION, "verify", self.config.environment());

		obs::record_operation_outcome(OPERATION, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let spec = RequestSpec::get(self.config.environment().endpoint(VERIFY_PATH)?)
					.bearer_auth(access_token);

				self.perform_request(spec).await?.into_result()
			})
			.await;

		obs::record_operation_result(OPERATION, &result);

		result
	}
}
