//! Crate-level error types shared by the provider hooks and the client glue.

// self
use crate::{_prelude::*, provider::ProviderConfigError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The platform answered with an HTTP status of 400 or above.
	#[error(transparent)]
	Provider(#[from] ProviderError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// A successful response body could not be decoded into the expected shape.
	#[error("Provider returned a malformed response body.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl From<ProviderConfigError> for Error {
	fn from(e: ProviderConfigError) -> Self {
		Self::Config(e.into())
	}
}

/// Error raised when the platform answers with an HTTP status of 400 or above.
///
/// The message is assembled from the body's structured `error` fields, or from the status
/// reason phrase when the body carries none.
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct ProviderError {
	message: String,
	status: u16,
	response: HttpResponse,
}
impl ProviderError {
	/// Creates a provider error from an already assembled message.
	pub fn new(message: impl Into<String>, status: u16, response: HttpResponse) -> Self {
		Self { message: message.into(), status, response }
	}

	/// Human-readable diagnostic suitable for display or logging.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Numeric HTTP status code of the originating response.
	pub fn status(&self) -> u16 {
		self.status
	}

	/// The originating response.
	pub fn response(&self) -> &HttpResponse {
		&self.response
	}

	/// Consumes the error, returning the originating response.
	pub fn into_response(self) -> HttpResponse {
		self.response
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Provider roots failed validation.
	#[error(transparent)]
	Provider(#[from] ProviderConfigError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A hook returned an endpoint that is not a valid URL.
	#[error("Provider endpoint `{endpoint}` is not a valid URL.")]
	InvalidEndpoint {
		/// Endpoint value returned by the hook.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Access token cannot be carried in an `Authorization` header.
	#[error("Access token cannot be used as a bearer header value.")]
	InvalidBearerToken(#[from] oauth2::http::header::InvalidHeaderValue),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
	/// The transport failed without a typed source.
	#[error("HTTP client error occurred while calling the provider: {0}.")]
	Other(String),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
