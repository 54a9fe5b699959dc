//! Walks through building the Mollie authorize redirect and the `oauth2` client used by the
//! callback handler to exchange the returned code.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth2_mollie::{
	auth::{MollieScope, SCOPE_ORGANIZATIONS_READ},
	client::{ClientAuthMethod, MollieClient},
	provider::PlatformHooks,
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let client = MollieClient::mollie("app_demo")
		.with_client_secret("demo-secret")
		.with_redirect_uri(Url::parse("https://app.example.com/oauth/callback")?)
		.with_auth_method(ClientAuthMethod::ClientSecretPost);
	let scopes = [SCOPE_ORGANIZATIONS_READ, MollieScope::PaymentsRead.as_str()];
	// Real handlers generate and persist an unguessable state per user.
	let url = client.authorize_url("demo-state", Some(&scopes))?;

	println!("Send your user to {url}.");
	println!("Requested scope parameter: {}.", client.hooks.join_scopes(scopes));

	let oauth_client = client.oauth2_client()?;

	println!("Exchange the returned code at {}.", oauth_client.token_uri().as_str());

	Ok(())
}
