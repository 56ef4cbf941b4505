//! Authorization code exchange.

// self
use crate::{
	_prelude::*,
	flows::SsoClient,
	http::SsoHttpClient,
	obs::{self, OperationOutcome, OperationSpan, SsoOperation},
	response::TokenResponse,
	transport::RequestSpec,
};

/// Path of the token endpoint, relative to the environment base URL.
pub const TOKEN_PATH: &str = "/oauth/token";

impl<C> SsoClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// Trades the `code` received on the callback for an access token.
	///
	/// The client authenticates with HTTP Basic credentials built from the configured client
	/// ID and secret. On success the parsed response is returned untouched; an OAuth `error`
	/// payload becomes [`Error::ProviderRejected`].
	pub async fn exchange_code_for_token(&self, authorization_code: &str) -> Result<TokenResponse> {
		const OPERATION: SsoOperation = SsoOperation::ExchangeCode;

		let span = OperationSpan::new(OPERATION, "exchange_code", self.config.environment());

		obs::record_operation_outcome(OPERATION, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let client_id = self.require_client_id()?;
				let client_secret = self.require_client_secret()?;
				let spec = RequestSpec::post(self.config.environment().endpoint(TOKEN_PATH)?)
					.basic_auth(client_id, client_secret)
					.form_param("grant_type", "authorization_code")
					.form_param("code", authorization_code);

				self.perform_request(spec).await?.into_result()
			})
			.await;

		obs::record_operation_result(OPERATION, &result);

		result
	}
}
