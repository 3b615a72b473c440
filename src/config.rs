//! Process-wide client configuration, validated once at construction.
//!
//! [`ClientConfig`] is the immutable value injected into
//! [`ApiClient`](crate::client::ApiClient); it never changes after
//! [`ClientConfigBuilder::build`] succeeds, so concurrent operations share it
//! without coordination. Serde derives let host applications deserialize it from
//! whatever configuration layer they already run.

// self
use crate::_prelude::*;

/// OAuth protocol version accepted by this client.
pub const PROTOCOL_VERSION: &str = "1.0";
/// Out-of-band callback sentinel from RFC 5849 §2.1, used when no callback URL is
/// configured.
pub const OOB_CALLBACK: &str = "oob";

/// Errors raised while constructing or validating a [`ClientConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ClientConfigError {
	/// A required configuration value was never supplied.
	#[error("Missing required configuration value `{field}`.")]
	Missing {
		/// Name of the absent field.
		field: &'static str,
	},
	/// A required string value was supplied but empty.
	#[error("Configuration value `{field}` must be non-empty.")]
	Empty {
		/// Name of the blank field.
		field: &'static str,
	},
	/// Only OAuth 1.0 is spoken here.
	#[error("OAuth version `{version}` is not supported; expected `{PROTOCOL_VERSION}`.")]
	UnsupportedVersion {
		/// Version string that failed validation.
		version: String,
	},
	/// Signature method identifier was not recognized.
	#[error(transparent)]
	SignatureMethod(#[from] SignatureMethodError),
}

/// Raised when a signature method identifier names an algorithm the signer does not
/// dispatch to.
#[derive(Debug, PartialEq, Eq, ThisError)]
#[error("Signature method `{method}` is not supported.")]
pub struct SignatureMethodError {
	/// Identifier that failed to parse.
	pub method: String,
}

/// Signature algorithms the signing collaborator is wired up for.
///
/// OAuth 1.0a also defines `PLAINTEXT` and `RSA-SHA1`, but the fitness providers
/// this client targets only accept `HMAC-SHA1`, so nothing else is dispatched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureMethod {
	#[default]
	/// HMAC-SHA1 per RFC 5849 §3.4.2.
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
}
impl SignatureMethod {
	/// Returns the wire identifier sent as `oauth_signature_method`.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::HmacSha1 => "HMAC-SHA1",
		}
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethod {
	type Err = SignatureMethodError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if value.eq_ignore_ascii_case("HMAC-SHA1") {
			Ok(Self::HmacSha1)
		} else {
			Err(SignatureMethodError { method: value.to_owned() })
		}
	}
}

/// Immutable OAuth 1.0a client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Endpoint issuing temporary request tokens.
	pub request_token_url: Url,
	/// Endpoint exchanging an authorized request token for an access token.
	pub access_token_url: Url,
	/// Optional user-facing authorization page; when present,
	/// [`ApiClient::authorization_url`](crate::client::ApiClient::authorization_url)
	/// derives the redirect target from it.
	pub authorize_url: Option<Url>,
	/// Protected-resource base URL, ending with the segment the user id is appended
	/// to (for example `https://api.example.com/1/user/`). Resource URLs are built
	/// by plain concatenation, so keep the trailing slash.
	pub resource_base_url: Url,
	/// OAuth consumer key identifying the application.
	pub consumer_key: String,
	/// OAuth consumer secret; redacted in `Debug` and `Display` output.
	pub consumer_secret: crate::auth::TokenSecret,
	/// OAuth protocol version; must equal [`PROTOCOL_VERSION`].
	pub oauth_version: String,
	/// Signature algorithm used by the signing collaborator.
	pub signature_method: SignatureMethod,
	/// `oauth_callback` value sent with the request-token step; defaults to
	/// [`OOB_CALLBACK`].
	pub callback: String,
}
impl ClientConfig {
	/// Creates a new builder with every field unset.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	request_token_url: Option<Url>,
	access_token_url: Option<Url>,
	authorize_url: Option<Url>,
	resource_base_url: Option<Url>,
	consumer_key: Option<String>,
	consumer_secret: Option<String>,
	oauth_version: Option<String>,
	signature_method: Option<SignatureMethod>,
	callback: Option<String>,
}
impl ClientConfigBuilder {
	/// Sets the request-token endpoint.
	pub fn request_token_url(mut self, url: Url) -> Self {
		self.request_token_url = Some(url);

		self
	}

	/// Sets the access-token endpoint.
	pub fn access_token_url(mut self, url: Url) -> Self {
		self.access_token_url = Some(url);

		self
	}

	/// Sets the optional user-facing authorization page.
	pub fn authorize_url(mut self, url: Url) -> Self {
		self.authorize_url = Some(url);

		self
	}

	/// Sets the protected-resource base URL.
	pub fn resource_base_url(mut self, url: Url) -> Self {
		self.resource_base_url = Some(url);

		self
	}

	/// Sets the consumer key.
	pub fn consumer_key(mut self, key: impl Into<String>) -> Self {
		self.consumer_key = Some(key.into());

		self
	}

	/// Sets the consumer secret.
	pub fn consumer_secret(mut self, secret: impl Into<String>) -> Self {
		self.consumer_secret = Some(secret.into());

		self
	}

	/// Sets the OAuth protocol version string.
	pub fn oauth_version(mut self, version: impl Into<String>) -> Self {
		self.oauth_version = Some(version.into());

		self
	}

	/// Sets the signature algorithm.
	pub fn signature_method(mut self, method: SignatureMethod) -> Self {
		self.signature_method = Some(method);

		self
	}

	/// Overrides the `oauth_callback` value sent during the request-token step.
	pub fn callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = Some(callback.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		let request_token_url = self
			.request_token_url
			.ok_or(ClientConfigError::Missing { field: "request_token_url" })?;
		let access_token_url =
			self.access_token_url.ok_or(ClientConfigError::Missing { field: "access_token_url" })?;
		let resource_base_url = self
			.resource_base_url
			.ok_or(ClientConfigError::Missing { field: "resource_base_url" })?;
		let consumer_key = require_non_empty(
			"consumer_key",
			self.consumer_key.ok_or(ClientConfigError::Missing { field: "consumer_key" })?,
		)?;
		let consumer_secret = require_non_empty(
			"consumer_secret",
			self.consumer_secret.ok_or(ClientConfigError::Missing { field: "consumer_secret" })?,
		)?;
		let oauth_version =
			self.oauth_version.ok_or(ClientConfigError::Missing { field: "oauth_version" })?;

		if oauth_version != PROTOCOL_VERSION {
			return Err(ClientConfigError::UnsupportedVersion { version: oauth_version });
		}

		let signature_method = self
			.signature_method
			.ok_or(ClientConfigError::Missing { field: "signature_method" })?;
		let callback = self.callback.unwrap_or_else(|| OOB_CALLBACK.to_owned());

		Ok(ClientConfig {
			request_token_url,
			access_token_url,
			authorize_url: self.authorize_url,
			resource_base_url,
			consumer_key,
			consumer_secret: crate::auth::TokenSecret::new(consumer_secret),
			oauth_version,
			signature_method,
			callback,
		})
	}
}

fn require_non_empty(field: &'static str, value: String) -> Result<String, ClientConfigError> {
	if value.is_empty() { Err(ClientConfigError::Empty { field }) } else { Ok(value) }
}
