//! Mollie platform adapter.
//!
//! The adapter is pure configuration: three fixed endpoints, the default scope set, the
//! space delimiter the platform requires, and the platform's error-body convention.

/// Builder API for overriding the platform roots.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{MollieResourceOwner, SCOPE_ORGANIZATIONS_READ},
	error::ProviderError,
	obs::{self, CallKind, CallOutcome},
	provider::{ErrorPayload, PlatformHooks},
};

/// Root of the Mollie API.
pub const MOLLIE_API_URL: &str = "https://api.mollie.nl";
/// Root of the Mollie web application.
pub const MOLLIE_WEB_URL: &str = "https://www.mollie.com";

const AUTHORIZATION_PATH: &str = "/oauth2/authorize";
const TOKEN_PATH: &str = "/oauth2/tokens";
const RESOURCE_OWNER_PATH: &str = "/v1/organizations/me";
const DEFAULT_SCOPES: &[&str] = &[SCOPE_ORGANIZATIONS_READ];

/// Endpoint set derived from the platform roots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MollieEndpoints {
	/// Authorization endpoint (`<web-root>/oauth2/authorize`).
	pub authorization: String,
	/// Token endpoint (`<api-root>/oauth2/tokens`).
	pub token: String,
	/// Resource owner endpoint (`<api-root>/v1/organizations/me`).
	pub resource_owner: String,
}
impl MollieEndpoints {
	fn from_roots(api_root: &str, web_root: &str) -> Self {
		Self {
			authorization: format!("{web_root}{AUTHORIZATION_PATH}"),
			token: format!("{api_root}{TOKEN_PATH}"),
			resource_owner: format!("{api_root}{RESOURCE_OWNER_PATH}"),
		}
	}
}

/// OAuth 2.0 hooks for the Mollie platform.
///
/// [`MollieProvider::default`] targets the production roots; use
/// [`MollieProvider::builder`] to point at another host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MollieProvider {
	endpoints: MollieEndpoints,
}
impl MollieProvider {
	/// Creates a builder seeded with the production roots.
	pub fn builder() -> MollieProviderBuilder {
		MollieProviderBuilder::new()
	}

	/// Endpoints this provider hands to client cores.
	pub fn endpoints(&self) -> &MollieEndpoints {
		&self.endpoints
	}
}
impl Default for MollieProvider {
	fn default() -> Self {
		Self { endpoints: MollieEndpoints::from_roots(MOLLIE_API_URL, MOLLIE_WEB_URL) }
	}
}
impl Display for MollieProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("mollie")
	}
}
impl PlatformHooks for MollieProvider {
	type ResourceOwner = MollieResourceOwner;

	fn authorization_url(&self) -> &str {
		&self.endpoints.authorization
	}

	fn access_token_url(&self, _params: &BTreeMap<String, String>) -> &str {
		&self.endpoints.token
	}

	fn resource_owner_details_url(&self, _token: &AccessToken) -> &str {
		&self.endpoints.resource_owner
	}

	fn default_scopes(&self) -> &[&str] {
		DEFAULT_SCOPES
	}

	// The platform rejects comma-delimited scope lists silently.
	fn scope_separator(&self) -> &str {
		" "
	}

	fn check_response(
		&self,
		response: &HttpResponse,
		body: &JsonValue,
	) -> Result<(), ProviderError> {
		let status = response.status();

		obs::record_call_outcome(CallKind::CheckResponse, CallOutcome::Attempt);

		if status.as_u16() < 400 {
			obs::record_call_outcome(CallKind::CheckResponse, CallOutcome::Success);

			return Ok(());
		}

		let reason = status.canonical_reason().unwrap_or_else(|| status.as_str());
		let message = ErrorPayload::from_body(body).to_message(reason);

		obs::provider_error_event(status.as_u16(), &message);
		obs::record_call_outcome(CallKind::CheckResponse, CallOutcome::Failure);

		Err(ProviderError::new(message, status.as_u16(), detach_response(response)))
	}

	fn create_resource_owner(
		&self,
		raw: JsonMap<String, JsonValue>,
		_token: &AccessToken,
	) -> Self::ResourceOwner {
		MollieResourceOwner::new(raw)
	}
}

fn detach_response(response: &HttpResponse) -> HttpResponse {
	let mut owned = HttpResponse::new(response.body().clone());

	*owned.status_mut() = response.status();
	*owned.version_mut() = response.version();
	*owned.headers_mut() = response.headers().clone();

	owned
}
