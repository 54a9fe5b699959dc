// crates.io
use url::Host;
// self
use crate::{
	_prelude::*,
	provider::{MOLLIE_API_URL, MOLLIE_WEB_URL, MollieEndpoints, MollieProvider},
};

/// Errors raised while validating provider roots.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ProviderConfigError {
	/// A root could not be parsed as a URL.
	#[error("The {root} root is not a valid URL: {url}.")]
	InvalidUrl {
		/// Which root failed validation.
		root: &'static str,
		/// Value that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Roots must use HTTPS unless they point at a loopback host.
	#[error("The {root} root must use HTTPS: {url}.")]
	InsecureRoot {
		/// Which root failed validation.
		root: &'static str,
		/// Root URL that failed validation.
		url: String,
	},
	/// Roots cannot carry a query string or fragment.
	#[error("The {root} root must not contain a query or fragment: {url}.")]
	UnexpectedComponents {
		/// Which root failed validation.
		root: &'static str,
		/// Root URL that failed validation.
		url: String,
	},
}

/// Builder for [`MollieProvider`] values.
#[derive(Clone, Debug)]
pub struct MollieProviderBuilder {
	/// Root of the API host serving the token and resource owner endpoints.
	pub api_base: String,
	/// Root of the web host serving the authorization endpoint.
	pub web_base: String,
}
impl MollieProviderBuilder {
	/// Creates a builder seeded with the production roots.
	pub fn new() -> Self {
		Self { api_base: MOLLIE_API_URL.into(), web_base: MOLLIE_WEB_URL.into() }
	}

	/// Overrides the API root.
	pub fn api_base(mut self, url: impl Into<String>) -> Self {
		self.api_base = url.into();

		self
	}

	/// Overrides the web root.
	pub fn web_base(mut self, url: impl Into<String>) -> Self {
		self.web_base = url.into();

		self
	}

	/// Consumes the builder and validates the resulting provider.
	pub fn build(self) -> Result<MollieProvider, ProviderConfigError> {
		let api_root = validate_root("api", &self.api_base)?;
		let web_root = validate_root("web", &self.web_base)?;

		Ok(MollieProvider { endpoints: MollieEndpoints::from_roots(&api_root, &web_root) })
	}
}
impl Default for MollieProviderBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn validate_root(root: &'static str, raw: &str) -> Result<String, ProviderConfigError> {
	let url = Url::parse(raw).map_err(|source| ProviderConfigError::InvalidUrl {
		root,
		url: raw.to_owned(),
		source,
	})?;

	if url.scheme() != "https" && !(url.scheme() == "http" && is_loopback(&url)) {
		return Err(ProviderConfigError::InsecureRoot { root, url: url.to_string() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ProviderConfigError::UnexpectedComponents { root, url: url.to_string() });
	}

	Ok(url.as_str().trim_end_matches('/').to_owned())
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Ipv4(addr)) => addr.is_loopback(),
		Some(Host::Ipv6(addr)) => addr.is_loopback(),
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		None => false,
	}
}
