//! Walks through the three SSO steps: print the login URL, then exchange a code and verify the
//! character it belongs to.
//!
//! ```text
//! EVE_SSO_CLIENT_ID=.. EVE_SSO_SECRET=.. EVE_SSO_CALLBACK=https://.. cargo run --example eve_login
//! EVE_SSO_CODE=<code from the callback> cargo run --example eve_login
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use eve_sso::{
	auth::StateToken,
	config::SsoConfig,
	flows::SsoClient,
	http::ReqwestHttpClient,
	response::{AccessTokenGrant, CharacterIdentity},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = SsoConfig::new()
		.with_client_id(env::var("EVE_SSO_CLIENT_ID")?)
		.with_client_secret(env::var("EVE_SSO_SECRET")?)
		.with_callback_url(env::var("EVE_SSO_CALLBACK")?)
		.with_user_agent("eve-sso-demo/0.1 (contact: ops@example.com)")
		.with_test_environment(env::var_os("EVE_SSO_TEST_SERVER").is_some());
	let client = SsoClient::with_http_client(config, ReqwestHttpClient::without_redirects()?);
	let state = StateToken::generate();

	println!("Send your user to {}.", client.build_authorization_redirect_url(state.as_str())?);

	let Ok(code) = env::var("EVE_SSO_CODE") else {
		println!("Set EVE_SSO_CODE to the `code` query value from the callback to continue.");

		return Ok(());
	};
	let token = client.exchange_code_for_token(&code).await?;
	let grant: AccessTokenGrant = token.deserialize_as()?;

	println!("Received a {} token ({:?} seconds).", grant.token_type, grant.expires_in);

	let identity: CharacterIdentity =
		client.resolve_identity(&grant.access_token).await?.deserialize_as()?;

	if identity.character_name.is_empty() {
		return Err(eyre!("SSO server returned an unnamed character."));
	}

	println!("Logged in as {} ({}).", identity.character_name, identity.character_id);

	Ok(())
}
