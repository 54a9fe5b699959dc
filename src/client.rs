//! Client glue that drives any [`PlatformHooks`] implementation.
//!
//! [`Client`] does not run the authorization-code grant itself. It assembles the authorize
//! redirect from caller-supplied state, hands out an `oauth2` [`BasicClient`] configured from the
//! hooks for the token exchange, and (with the `reqwest` feature) fetches the resource owner by
//! running [`PlatformHooks::check_response`] before [`PlatformHooks::create_resource_owner`].

// crates.io
use oauth2::{
	AuthType, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl, TokenUrl,
	basic::BasicClient,
};
#[cfg(feature = "reqwest")]
use oauth2::{
	AsyncHttpClient,
	http::{Method, Request, header::ACCEPT},
};
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	provider::{MollieProvider, PlatformHooks},
};
#[cfg(feature = "reqwest")]
use crate::{
	http::{self, ReqwestHttpClient},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// `oauth2` client with the authorization and token endpoints set.
pub type ConfiguredBasicClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Client glue bound to the Mollie hooks.
pub type MollieClient = Client<MollieProvider>;

/// Client authentication modes for token endpoint calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
	#[default]
	/// Form POST body parameters for `client_id`/`client_secret`.
	ClientSecretPost,
	/// HTTP Basic with `client_id`/`client_secret`.
	ClientSecretBasic,
}

/// Composes provider hooks with client credentials.
///
/// The hooks are shared through an [`Arc`], so one adapter instance can back many clients and
/// concurrent flows.
pub struct Client<H>
where
	H: PlatformHooks,
{
	/// Provider hooks consulted for every provider-specific decision.
	pub hooks: Arc<H>,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Optional client secret for confidential clients.
	pub client_secret: Option<String>,
	/// Redirect URI registered with the provider.
	pub redirect_uri: Option<Url>,
	/// How the token endpoint authenticates this client.
	pub auth_method: ClientAuthMethod,
	/// HTTP client used for resource owner fetches.
	#[cfg(feature = "reqwest")]
	pub http_client: ReqwestHttpClient,
}
impl<H> Client<H>
where
	H: PlatformHooks,
{
	/// Creates a client for the provided hooks and client identifier.
	pub fn new(hooks: impl Into<Arc<H>>, client_id: impl Into<String>) -> Self {
		Self {
			hooks: hooks.into(),
			client_id: client_id.into(),
			client_secret: None,
			redirect_uri: None,
			auth_method: ClientAuthMethod::default(),
			#[cfg(feature = "reqwest")]
			http_client: ReqwestHttpClient::default(),
		}
	}

	/// Sets or replaces the client secret.
	pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Sets the redirect URI sent with authorization and token requests.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}

	/// Overrides the token endpoint authentication method.
	pub fn with_auth_method(mut self, method: ClientAuthMethod) -> Self {
		self.auth_method = method;

		self
	}

	/// Replaces the HTTP client used for resource owner fetches.
	#[cfg(feature = "reqwest")]
	pub fn with_http_client(mut self, http_client: ReqwestHttpClient) -> Self {
		self.http_client = http_client;

		self
	}

	/// Builds the URL the user agent is redirected to.
	///
	/// `scopes` falls back to the hooks' default scopes when `None` or empty; the `scope`
	/// parameter is omitted only when the defaults are empty too. `state` is passed through
	/// untouched.
	pub fn authorize_url(&self, state: &str, scopes: Option<&[&str]>) -> Result<Url> {
		let mut url = parse_endpoint(self.hooks.authorization_url())?;
		let scope = match scopes {
			Some(scopes) if !scopes.is_empty() => self.hooks.join_scopes(scopes),
			_ => self.hooks.join_scopes(self.hooks.default_scopes()),
		};
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("response_type", "code");
		pairs.append_pair("client_id", &self.client_id);

		if let Some(redirect_uri) = &self.redirect_uri {
			pairs.append_pair("redirect_uri", redirect_uri.as_str());
		}
		if !scope.is_empty() {
			pairs.append_pair("scope", &scope);
		}

		pairs.append_pair("state", state);

		drop(pairs);

		Ok(url)
	}

	/// Builds an `oauth2` client configured from the hooks.
	///
	/// Use it for the token exchange and refresh requests.
	pub fn oauth2_client(&self) -> Result<ConfiguredBasicClient> {
		let auth_url = AuthUrl::new(self.hooks.authorization_url().to_owned()).map_err(|source| {
			ConfigError::InvalidEndpoint {
				endpoint: self.hooks.authorization_url().to_owned(),
				source,
			}
		})?;
		let token_endpoint = self.hooks.access_token_url(&BTreeMap::new());
		let token_url = TokenUrl::new(token_endpoint.to_owned()).map_err(|source| {
			ConfigError::InvalidEndpoint { endpoint: token_endpoint.to_owned(), source }
		})?;
		let mut oauth_client = BasicClient::new(ClientId::new(self.client_id.clone()))
			.set_auth_uri(auth_url)
			.set_token_uri(token_url);

		if let Some(secret) = &self.client_secret {
			oauth_client = oauth_client.set_client_secret(ClientSecret::new(secret.clone()));
		}
		if let Some(redirect) = &self.redirect_uri {
			let redirect_url = RedirectUrl::new(redirect.to_string())
				.map_err(|source| ConfigError::InvalidRedirect { source })?;

			oauth_client = oauth_client.set_redirect_uri(redirect_url);
		}

		oauth_client = match self.auth_method {
			ClientAuthMethod::ClientSecretPost => oauth_client.set_auth_type(AuthType::RequestBody),
			ClientAuthMethod::ClientSecretBasic => oauth_client.set_auth_type(AuthType::BasicAuth),
		};

		Ok(oauth_client)
	}

	/// Fetches the resource owner authorized by `token`.
	///
	/// Error responses surface as [`Error::Provider`] through the hooks; success bodies that are
	/// not JSON objects surface as [`Error::ResponseParse`].
	#[cfg(feature = "reqwest")]
	pub async fn fetch_resource_owner(&self, token: &AccessToken) -> Result<H::ResourceOwner> {
		const KIND: CallKind = CallKind::ResourceOwner;

		let span = CallSpan::new(KIND, "fetch_resource_owner");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result: Result<H::ResourceOwner> = span
			.instrument(async move {
				let mut request = Request::builder()
					.method(Method::GET)
					.uri(self.hooks.resource_owner_details_url(token))
					.header(ACCEPT, "application/json")
					.body(Vec::new())
					.map_err(ConfigError::from)?;

				request.headers_mut().extend(self.hooks.authorization_headers(token)?);

				let response =
					self.http_client.call(request).await.map_err(http::map_transport_error)?;
				let body = parse_body(response.body());

				self.hooks.check_response(&response, &body)?;

				let raw = serde_path_to_error::deserialize(body).map_err(|source| {
					Error::ResponseParse { source, status: response.status().as_u16() }
				})?;

				Ok(self.hooks.create_resource_owner(raw, token))
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}
}
impl Client<MollieProvider> {
	/// Creates a client bound to the production Mollie hooks.
	pub fn mollie(client_id: impl Into<String>) -> Self {
		Self::new(MollieProvider::default(), client_id)
	}
}
impl<H> Clone for Client<H>
where
	H: PlatformHooks,
{
	fn clone(&self) -> Self {
		Self {
			hooks: self.hooks.clone(),
			client_id: self.client_id.clone(),
			client_secret: self.client_secret.clone(),
			redirect_uri: self.redirect_uri.clone(),
			auth_method: self.auth_method,
			#[cfg(feature = "reqwest")]
			http_client: self.http_client.clone(),
		}
	}
}
impl<H> Debug for Client<H>
where
	H: PlatformHooks,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.field("auth_method", &self.auth_method)
			.finish()
	}
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
	Url::parse(endpoint).map_err(|source| {
		ConfigError::InvalidEndpoint { endpoint: endpoint.to_owned(), source }.into()
	})
}

// Bodies that are not JSON are handed to the hooks as a JSON string.
#[cfg(feature = "reqwest")]
fn parse_body(bytes: &[u8]) -> JsonValue {
	serde_json::from_slice(bytes)
		.unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ProviderError;

	struct PipeHooks;
	impl PlatformHooks for PipeHooks {
		type ResourceOwner = JsonMap<String, JsonValue>;

		fn authorization_url(&self) -> &str {
			"https://provider.test/authorize?tenant=acme"
		}

		fn access_token_url(&self, _params: &BTreeMap<String, String>) -> &str {
			"https://provider.test/token"
		}

		fn resource_owner_details_url(&self, _token: &AccessToken) -> &str {
			"https://provider.test/me"
		}

		fn default_scopes(&self) -> &[&str] {
			&[]
		}

		fn scope_separator(&self) -> &str {
			"|"
		}

		fn check_response(
			&self,
			_response: &HttpResponse,
			_body: &JsonValue,
		) -> Result<(), ProviderError> {
			Ok(())
		}

		fn create_resource_owner(
			&self,
			raw: JsonMap<String, JsonValue>,
			_token: &AccessToken,
		) -> Self::ResourceOwner {
			raw
		}
	}

	fn query(url: &Url) -> BTreeMap<String, String> {
		url.query_pairs().into_owned().collect()
	}

	#[test]
	fn authorize_url_uses_default_scopes_and_space_separator() {
		let redirect =
			Url::parse("https://app.example.com/callback").expect("Redirect URI should parse.");
		let client = Client::mollie("app_client").with_redirect_uri(redirect.clone());
		let url = client.authorize_url("opaque-state", None).expect("Authorize URL should build.");

		assert!(url.as_str().starts_with("https://www.mollie.com/oauth2/authorize?"));

		let pairs = query(&url);

		assert_eq!(pairs.get("response_type").map(String::as_str), Some("code"));
		assert_eq!(pairs.get("client_id").map(String::as_str), Some("app_client"));
		assert_eq!(pairs.get("redirect_uri").map(String::as_str), Some(redirect.as_str()));
		assert_eq!(pairs.get("scope").map(String::as_str), Some("organizations.read"));
		assert_eq!(pairs.get("state").map(String::as_str), Some("opaque-state"));

		let url = client
			.authorize_url("s", Some(&["payments.read", "refunds.write"]))
			.expect("Authorize URL should build.");

		assert_eq!(
			query(&url).get("scope").map(String::as_str),
			Some("payments.read refunds.write")
		);
	}

	#[test]
	fn authorize_url_treats_empty_scopes_as_defaults() {
		let client = Client::mollie("app");
		let url = client.authorize_url("s", Some(&[])).expect("Authorize URL should build.");

		assert_eq!(query(&url).get("scope").map(String::as_str), Some("organizations.read"));

		let url = Client::new(PipeHooks, "client")
			.authorize_url("s", Some(&[]))
			.expect("Authorize URL should build.");

		assert!(!query(&url).contains_key("scope"));
	}

	#[test]
	fn authorize_url_follows_custom_hooks() {
		let client = Client::new(PipeHooks, "client");
		let url = client.authorize_url("s", None).expect("Authorize URL should build.");
		let pairs = query(&url);

		assert_eq!(pairs.get("tenant").map(String::as_str), Some("acme"));
		assert!(!pairs.contains_key("scope"), "Empty scope lists are omitted.");
		assert!(!pairs.contains_key("redirect_uri"));

		let url =
			client.authorize_url("s", Some(&["a", "b"])).expect("Authorize URL should build.");

		assert_eq!(query(&url).get("scope").map(String::as_str), Some("a|b"));
	}

	#[test]
	fn oauth2_client_carries_hook_endpoints() {
		let client = Client::new(MollieProvider::default(), "app_client")
			.with_client_secret("secret")
			.with_redirect_uri(
				Url::parse("https://app.example.com/callback").expect("Redirect URI should parse."),
			)
			.with_auth_method(ClientAuthMethod::ClientSecretBasic);
		let oauth_client = client.oauth2_client().expect("oauth2 client should build.");

		assert_eq!(oauth_client.auth_uri().as_str(), "https://www.mollie.com/oauth2/authorize");
		assert_eq!(oauth_client.token_uri().as_str(), "https://api.mollie.nl/oauth2/tokens");
		assert_eq!(oauth_client.client_id().as_str(), "app_client");
		assert!(matches!(oauth_client.auth_type(), AuthType::BasicAuth));
	}

	#[test]
	fn clones_share_hooks() {
		let client = Client::mollie("app_client").with_client_secret("secret");
		let cloned = client.clone();

		assert!(Arc::ptr_eq(&client.hooks, &cloned.hooks));
		assert!(!format!("{cloned:?}").contains("\"secret\""));
	}
}
