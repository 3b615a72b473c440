//! Transport primitives for signed OAuth 1.0a calls.
//!
//! The module exposes [`SignedHttpTransport`] alongside [`SignedRequest`] and
//! [`RawResponse`] so downstream crates can integrate custom HTTP clients. The
//! client signs first and transports second: a transport receives a fully formed
//! `Authorization` header and must never reorder, retry, or rewrite the request.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// HTTP verbs the signing collaborator dispatches on.
///
/// OAuth 1.0a signatures cover the request method, so the set is closed; verbs
/// outside it are rejected before any signing or network work happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// GET request.
	Get,
	/// HEAD request.
	Head,
	/// POST request.
	Post,
	/// PUT request.
	Put,
	/// PATCH request.
	Patch,
	/// DELETE request.
	Delete,
	/// OPTIONS request.
	Options,
}
impl HttpMethod {
	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Head => "HEAD",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Delete => "DELETE",
			HttpMethod::Options => "OPTIONS",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpMethod {
	type Err = UnknownHttpMethod;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.to_ascii_uppercase().as_str() {
			"GET" => Ok(Self::Get),
			"HEAD" => Ok(Self::Head),
			"POST" => Ok(Self::Post),
			"PUT" => Ok(Self::Put),
			"PATCH" => Ok(Self::Patch),
			"DELETE" => Ok(Self::Delete),
			"OPTIONS" => Ok(Self::Options),
			_ => Err(UnknownHttpMethod { method: value.to_owned() }),
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<HttpMethod> for reqwest::Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => reqwest::Method::GET,
			HttpMethod::Head => reqwest::Method::HEAD,
			HttpMethod::Post => reqwest::Method::POST,
			HttpMethod::Put => reqwest::Method::PUT,
			HttpMethod::Patch => reqwest::Method::PATCH,
			HttpMethod::Delete => reqwest::Method::DELETE,
			HttpMethod::Options => reqwest::Method::OPTIONS,
		}
	}
}

/// Raised when a verb string falls outside the signable set.
#[derive(Debug, PartialEq, Eq, ThisError)]
#[error("HTTP method `{method}` is not supported for signed requests.")]
pub struct UnknownHttpMethod {
	/// Verb string that failed to parse.
	pub method: String,
}

/// A request that has already been signed and is ready for dispatch.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	/// HTTP verb covered by the signature.
	pub method: HttpMethod,
	/// Full target URL, query string included.
	pub url: Url,
	/// Complete `Authorization: OAuth …` header value.
	pub authorization: String,
}

/// Transport-level view of an HTTP response, exposed to callers unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code.
	pub status: u16,
	/// Response headers with lower-case names; repeated headers are joined with
	/// `", "`.
	pub headers: BTreeMap<String, String>,
}

/// Raw response produced by a [`SignedHttpTransport`].
#[derive(Clone, Debug, Default)]
pub struct RawResponse {
	/// Status and headers as reported by the transport.
	pub metadata: ResponseMetadata,
	/// Response body decoded as text.
	pub body: String,
}

/// Boxed future returned by [`SignedHttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing signed requests.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations
/// must be `Send + Sync + 'static` so one client can serve concurrent operations,
/// and the futures they return must be `Send` for the lifetime of the in-flight
/// call. Exactly one outbound request per `execute` invocation; any timeout
/// behavior belongs to the implementation, not the client.
pub trait SignedHttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes a signed request and resolves with the raw response, rejecting with
	/// the transport's own error surfaced verbatim.
	fn execute(&self, request: SignedRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. Any custom [`ReqwestClient`] passed in is used as-is; the transport adds
/// only the `Authorization` header carried by the [`SignedRequest`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SignedHttpTransport for ReqwestTransport {
	fn execute(&self, request: SignedRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.request(request.method.into(), request.url)
				.header(reqwest::header::AUTHORIZATION, request.authorization)
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let mut headers = BTreeMap::new();

			for (name, value) in response.headers() {
				let value = String::from_utf8_lossy(value.as_bytes()).into_owned();

				headers
					.entry(name.as_str().to_owned())
					.and_modify(|existing: &mut String| {
						existing.push_str(", ");
						existing.push_str(&value);
					})
					.or_insert(value);
			}

			let body = response.text().await.map_err(TransportError::from)?;

			Ok(RawResponse { metadata: ResponseMetadata { status, headers }, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn http_method_parses_case_insensitively() {
		assert_eq!("get".parse::<HttpMethod>(), Ok(HttpMethod::Get));
		assert_eq!("Post".parse::<HttpMethod>(), Ok(HttpMethod::Post));
		assert_eq!("DELETE".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
	}

	#[test]
	fn http_method_rejects_unknown_verbs() {
		let err = "BREW".parse::<HttpMethod>().expect_err("Unknown verbs should be rejected.");

		assert_eq!(err.method, "BREW");
	}
}
