//! The API client: three asynchronous operations over one shared dispatch adapter.
//!
//! [`ApiClient`] owns the immutable [`ClientConfig`] and a shared transport
//! reference; it holds no other state, so concurrent operations on one client are
//! fully independent. Each operation performs at most one outbound call: sign via
//! the collaborator, execute via the transport, then funnel the outcome through
//! [`ApiClient::dispatch`], the crate's callback-to-future normalization point.

// self
use crate::{
	_prelude::*,
	auth::{self, AccessToken, RequestToken, TokenSecret},
	config::ClientConfig,
	error::{AuthError, CallFailure, ResourceError},
	http::{HttpMethod, RawResponse, ResponseMetadata, SignedHttpTransport, SignedRequest},
	obs::{self, CallKind, CallOutcome, CallSpan},
	signer,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// Path segment substituted when no user id is given; the provider reads it as
/// "the user who authorized this token".
pub const DEFAULT_USER_SEGMENT: &str = "-";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestTransport>;

/// A protected-resource call description consumed by
/// [`ApiClient::request_resource`].
///
/// `path`, `method`, `access_token`, and `access_token_secret` are required
/// non-empty strings; `user_id` is optional and falls back to
/// [`DEFAULT_USER_SEGMENT`].
#[derive(Clone, Copy, Debug)]
pub struct ResourceRequest<'a> {
	/// Resource path appended after the user segment, leading slash included (for
	/// example `/profile.json`). A query string, when present, is signed too.
	pub path: &'a str,
	/// HTTP verb as a string; parsed case-insensitively into the signable set.
	pub method: &'a str,
	/// Access token identifying the authorization grant.
	pub access_token: &'a str,
	/// Secret paired with the access token.
	pub access_token_secret: &'a str,
	/// Target user id; `None` (or an empty string) selects the authenticated user.
	pub user_id: Option<&'a str>,
}
impl<'a> ResourceRequest<'a> {
	/// Describes a call on behalf of the authenticated user.
	pub fn new(
		path: &'a str,
		method: &'a str,
		access_token: &'a str,
		access_token_secret: &'a str,
	) -> Self {
		Self { path, method, access_token, access_token_secret, user_id: None }
	}

	/// Retargets the call at an explicit user id.
	pub fn for_user(mut self, user_id: &'a str) -> Self {
		self.user_id = Some(user_id);

		self
	}

	fn validate(&self) -> Result<()> {
		require("path", self.path)?;
		require("method", self.method)?;
		require("access_token", self.access_token)?;
		require("access_token_secret", self.access_token_secret)
	}
}

/// Outcome of a successful protected-resource call: the raw body plus the
/// transport-level response view, both forwarded unchanged.
#[derive(Clone, Debug)]
pub struct ResourceOutcome {
	/// Raw response body; no schema is imposed.
	pub data: String,
	/// Transport-level response metadata.
	pub response: ResponseMetadata,
}

/// OAuth 1.0a API client.
///
/// Constructed once with process-wide configuration; cloning is cheap and clones
/// share the same transport.
#[derive(Clone)]
pub struct ApiClient<T>
where
	T: ?Sized + SignedHttpTransport,
{
	/// Immutable configuration injected at construction.
	pub config: ClientConfig,
	transport: Arc<T>,
}
impl<T> ApiClient<T>
where
	T: ?Sized + SignedHttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(config: ClientConfig, transport: impl Into<Arc<T>>) -> Self {
		Self { config, transport: transport.into() }
	}

	/// Obtains a temporary request token to start the handshake.
	///
	/// Forward the user to the provider's authorization page (see
	/// [`authorization_url`](Self::authorization_url)) once the returned pair is in
	/// hand; the pair stays useful only until the user finishes authorizing.
	pub async fn get_request_token(&self) -> Result<RequestToken> {
		const KIND: CallKind = CallKind::RequestToken;

		let span = CallSpan::new(KIND, "get_request_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let authorization = signer::request_token_authorization(&self.config);
				let response = self
					.dispatch(SignedRequest {
						method: HttpMethod::Post,
						url: self.config.request_token_url.clone(),
						authorization,
					})
					.await
					.map_err(AuthError::from)?;

				grant_fields(&response)
					.map(|(token, secret)| RequestToken { token, secret: TokenSecret::new(secret) })
			})
			.await;

		obs::record_call_result(KIND, result)
	}

	/// Exchanges a user-authorized request token plus verifier for a long-lived
	/// access token.
	///
	/// The verifier is the one-time code the provider hands back after the user
	/// approves access. Invalid or expired inputs surface as
	/// [`AuthError::Endpoint`] from the provider; no local validation happens here.
	pub async fn get_access_token(
		&self,
		request_token: &str,
		request_token_secret: &str,
		verifier: &str,
	) -> Result<AccessToken> {
		const KIND: CallKind = CallKind::AccessToken;

		let span = CallSpan::new(KIND, "get_access_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let authorization = signer::access_token_authorization(
					&self.config,
					request_token,
					request_token_secret,
					verifier,
				);
				let response = self
					.dispatch(SignedRequest {
						method: HttpMethod::Post,
						url: self.config.access_token_url.clone(),
						authorization,
					})
					.await
					.map_err(AuthError::from)?;

				grant_fields(&response)
					.map(|(token, secret)| AccessToken { token, secret: TokenSecret::new(secret) })
			})
			.await;

		obs::record_call_result(KIND, result)
	}

	/// Signs and issues an HTTP request against a protected-resource endpoint.
	///
	/// Rejects with [`Error::InvalidParameter`] before any signing or network work
	/// when a required argument is empty. The target URL is the configured base URL,
	/// the resolved user segment, and `path`, joined by plain concatenation.
	pub async fn request_resource(&self, request: ResourceRequest<'_>) -> Result<ResourceOutcome> {
		const KIND: CallKind = CallKind::Resource;

		let span = CallSpan::new(KIND, "request_resource");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				request.validate()?;

				let method =
					request.method.parse::<HttpMethod>().map_err(ResourceError::from)?;
				let url = self.resource_url(request.user_id, request.path)?;
				let authorization = signer::resource_authorization(
					&self.config,
					method,
					&url,
					request.access_token,
					request.access_token_secret,
				);
				let response = self
					.dispatch(SignedRequest { method, url, authorization })
					.await
					.map_err(ResourceError::from)?;

				Ok(ResourceOutcome { data: response.body, response: response.metadata })
			})
			.await;

		obs::record_call_result(KIND, result)
	}

	/// Derives the authorization-page URL for a freshly issued request token, when
	/// the configuration names one.
	pub fn authorization_url(&self, token: &RequestToken) -> Option<Url> {
		let mut url = self.config.authorize_url.clone()?;

		url.query_pairs_mut().append_pair("oauth_token", &token.token);

		Some(url)
	}

	/// Shared completion adapter: every operation funnels its single transport
	/// round trip through here, resolving on 2xx and rejecting otherwise with the
	/// collaborator outcome intact.
	async fn dispatch(&self, request: SignedRequest) -> Result<RawResponse, CallFailure> {
		let response = self.transport.execute(request).await?;

		if (200..300).contains(&response.metadata.status) {
			Ok(response)
		} else {
			Err(CallFailure::Rejected {
				status: response.metadata.status,
				body: response.body,
			})
		}
	}

	fn resource_url(&self, user_id: Option<&str>, path: &str) -> Result<Url, ResourceError> {
		let user = user_id.filter(|id| !id.is_empty()).unwrap_or(DEFAULT_USER_SEGMENT);
		let raw = format!("{}{user}{path}", self.config.resource_base_url);

		Url::parse(&raw).map_err(|source| ResourceError::InvalidUrl { source })
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_transport(config, ReqwestTransport::default())
	}
}
impl<T> Debug for ApiClient<T>
where
	T: ?Sized + SignedHttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient").field("config", &self.config).finish()
	}
}

fn grant_fields(response: &RawResponse) -> Result<(String, String)> {
	auth::token::token_fields(&response.body)
		.map_err(|field| AuthError::MissingTokenField { field }.into())
}

fn require(name: &'static str, value: &str) -> Result<()> {
	if value.is_empty() { Err(Error::InvalidParameter { name }) } else { Ok(()) }
}
