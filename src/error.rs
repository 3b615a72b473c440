//! Client-level error types shared across the handshake and resource operations.
//!
//! The propagation policy is deliberately flat: every collaborator failure is
//! forwarded verbatim to the caller, never retried or reclassified. The only
//! locally-originated operation error is [`Error::InvalidParameter`], raised by
//! [`ApiClient::request_resource`](crate::client::ApiClient::request_resource)
//! before any network work happens.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required `request_resource` argument was missing or empty; detected before
	/// any collaborator call is made.
	#[error("Required parameter `{name}` is missing or empty.")]
	InvalidParameter {
		/// Name of the offending argument.
		name: &'static str,
	},
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] crate::config::ClientConfigError),
	/// OAuth handshake failure (request-token or access-token step).
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Protected-resource call failure.
	#[error(transparent)]
	Resource(#[from] ResourceError),
}

/// Failures raised while obtaining request or access tokens.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Transport failure (DNS, TCP, TLS) surfaced unchanged.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token endpoint rejected the handshake step.
	#[error("Token endpoint rejected the handshake with HTTP {status}: {body}")]
	Endpoint {
		/// HTTP status returned by the token endpoint.
		status: u16,
		/// Raw response body, forwarded verbatim.
		body: String,
	},
	/// Token endpoint answered 2xx but the grant body lacked a credential field.
	#[error("Token endpoint response is missing the `{field}` field.")]
	MissingTokenField {
		/// Name of the absent form field.
		field: &'static str,
	},
}

/// Failures raised while calling a protected-resource endpoint.
#[derive(Debug, ThisError)]
pub enum ResourceError {
	/// Transport failure (DNS, TCP, TLS) surfaced unchanged.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Resource endpoint answered outside the 2xx range.
	#[error("Resource endpoint returned HTTP {status}: {body}")]
	Status {
		/// HTTP status returned by the resource endpoint.
		status: u16,
		/// Raw response body, forwarded verbatim.
		body: String,
	},
	/// Concatenating the base URL, user segment, and path produced an invalid URL.
	#[error("Resource URL could not be constructed.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The requested HTTP verb is outside the signer's supported set.
	#[error(transparent)]
	Method(#[from] crate::http::UnknownHttpMethod),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the endpoint.")]
	Io(#[from] std::io::Error),
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

/// Rejection produced by the shared dispatch adapter before operation-specific
/// mapping; handshake steps turn it into [`AuthError`], resource calls into
/// [`ResourceError`].
#[derive(Debug, ThisError)]
pub(crate) enum CallFailure {
	#[error(transparent)]
	Transport(#[from] TransportError),
	#[error("Endpoint rejected the call with HTTP {status}: {body}")]
	Rejected { status: u16, body: String },
}
impl From<CallFailure> for AuthError {
	fn from(failure: CallFailure) -> Self {
		match failure {
			CallFailure::Transport(source) => Self::Transport(source),
			CallFailure::Rejected { status, body } => Self::Endpoint { status, body },
		}
	}
}
impl From<CallFailure> for ResourceError {
	fn from(failure: CallFailure) -> Self {
		match failure {
			CallFailure::Transport(source) => Self::Transport(source),
			CallFailure::Rejected { status, body } => Self::Status { status, body },
		}
	}
}
