//! Hook interface consumed by OAuth 2.0 client cores.
//!
//! A client core drives the authorize -> token exchange -> resource owner sequence and asks the
//! hooks for everything provider-specific. Hooks never perform I/O.

// crates.io
use oauth2::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
// self
use crate::{
	_prelude::*,
	auth,
	error::{ConfigError, ProviderError},
};

/// Provider-specific configuration and behavior plugged into a client core.
///
/// Implementors are required to be `Send + Sync` and stateless from the caller's point of view:
/// one instance may serve many concurrent authorization flows without locking.
pub trait PlatformHooks: Send + Sync {
	/// Typed resource owner produced from a successful details response.
	type ResourceOwner: Send + Sync;

	/// Base URL the user agent is redirected to when starting the authorization-code grant.
	fn authorization_url(&self) -> &str;

	/// Token endpoint URL.
	///
	/// `params` are the token request parameters; they are sent in the request body, so
	/// implementations usually ignore them.
	fn access_token_url(&self, params: &BTreeMap<String, String>) -> &str;

	/// URL returning the authenticated resource owner.
	fn resource_owner_details_url(&self, token: &AccessToken) -> &str;

	/// Scopes requested when the caller does not pass any.
	fn default_scopes(&self) -> &[&str];

	/// Delimiter used to join scopes into a single `scope` parameter.
	///
	/// Defaults to a comma; override it when the provider expects another delimiter.
	fn scope_separator(&self) -> &str {
		","
	}

	/// Validates a provider response before any further processing.
	///
	/// `body` is the parsed response body; bodies that are not JSON arrive as a JSON string.
	fn check_response(&self, response: &HttpResponse, body: &JsonValue)
	-> Result<(), ProviderError>;

	/// Builds the resource owner from a successful details response.
	fn create_resource_owner(
		&self,
		raw: JsonMap<String, JsonValue>,
		token: &AccessToken,
	) -> Self::ResourceOwner;

	/// Joins `scopes` with [`scope_separator`](Self::scope_separator).
	fn join_scopes<I, S>(&self, scopes: I) -> String
	where
		Self: Sized,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		auth::join_scopes(scopes, self.scope_separator())
	}

	/// Headers that authorize a resource request with `token`.
	///
	/// The default sends `Authorization: Bearer <token>`, marked sensitive.
	fn authorization_headers(&self, token: &AccessToken) -> Result<HeaderMap, ConfigError> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", token.secret()))?;

		value.set_sensitive(true);

		let mut headers = HeaderMap::new();

		headers.insert(AUTHORIZATION, value);

		Ok(headers)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	struct CommaHooks;
	impl PlatformHooks for CommaHooks {
		type ResourceOwner = JsonMap<String, JsonValue>;

		fn authorization_url(&self) -> &str {
			"https://provider.test/authorize"
		}

		fn access_token_url(&self, _params: &BTreeMap<String, String>) -> &str {
			"https://provider.test/token"
		}

		fn resource_owner_details_url(&self, _token: &AccessToken) -> &str {
			"https://provider.test/me"
		}

		fn default_scopes(&self) -> &[&str] {
			&["read"]
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

	#[test]
	fn default_separator_is_comma() {
		assert_eq!(CommaHooks.scope_separator(), ",");
		assert_eq!(CommaHooks.join_scopes(["read", "write"]), "read,write");
	}

	#[test]
	fn bearer_headers_are_sensitive() {
		let headers = CommaHooks
			.authorization_headers(&AccessToken::new("tok_abc".into()))
			.expect("Plain tokens should form a header value.");
		let value = headers.get(AUTHORIZATION).expect("Authorization header should be set.");

		assert_eq!(value.to_str().ok(), Some("Bearer tok_abc"));
		assert!(value.is_sensitive());
	}

	#[test]
	fn bearer_headers_reject_control_characters() {
		let err = CommaHooks
			.authorization_headers(&AccessToken::new("tok\nabc".into()))
			.expect_err("Newlines cannot appear in header values.");

		assert!(matches!(err, ConfigError::InvalidBearerToken(_)));
	}
}
