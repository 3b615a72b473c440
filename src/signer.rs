//! Authorization-header construction, delegated to the `oauth1-request` crate.
//!
//! Nothing here computes a signature: the module only adapts [`ClientConfig`]
//! values and the three call shapes (request token, access token, resource) onto
//! [`oauth1_request::Builder`], which owns nonce and timestamp generation and the
//! HMAC-SHA1 base-string algorithm. [`SignatureMethod`](crate::config::SignatureMethod)
//! validation at configuration time guarantees HMAC-SHA1 is the only algorithm
//! reaching this module.

// crates.io
use oauth1_request::{Builder, Credentials, HMAC_SHA1, ParameterList, Request};
// self
use crate::{_prelude::*, config::ClientConfig, http::HttpMethod};

/// Builds the `Authorization` header for the request-token step, carrying the
/// configured `oauth_callback`.
pub(crate) fn request_token_authorization(config: &ClientConfig) -> String {
	// No token credentials exist yet at this step, so the token type must be pinned.
	let mut builder = Builder::<_, _, &str>::new(consumer(config), HMAC_SHA1);

	builder.callback(config.callback.as_str());

	builder.post(config.request_token_url.as_str(), &())
}

/// Builds the `Authorization` header for the access-token exchange, signed with the
/// request-token secret and carrying the user-supplied verifier.
pub(crate) fn access_token_authorization(
	config: &ClientConfig,
	request_token: &str,
	request_token_secret: &str,
	verifier: &str,
) -> String {
	let mut builder = Builder::new(consumer(config), HMAC_SHA1);

	builder.token(Credentials::new(request_token, request_token_secret));
	builder.verifier(verifier);

	builder.post(config.access_token_url.as_str(), &())
}

/// Builds the `Authorization` header for a protected-resource call.
///
/// Query parameters embedded in the URL must be covered by the signature base
/// string, so they are lifted out and handed to the signer as a parameter list
/// while the signed URI keeps only the scheme/host/path portion.
pub(crate) fn resource_authorization(
	config: &ClientConfig,
	method: HttpMethod,
	url: &Url,
	access_token: &str,
	access_token_secret: &str,
) -> String {
	let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
	let mut signed_url = url.clone();

	signed_url.set_query(None);

	if query.is_empty() {
		sign(config, method, &signed_url, &(), access_token, access_token_secret)
	} else {
		let parameters = ParameterList::new(query);

		sign(config, method, &signed_url, &parameters, access_token, access_token_secret)
	}
}

fn sign<R>(
	config: &ClientConfig,
	method: HttpMethod,
	url: &Url,
	request: &R,
	token: &str,
	token_secret: &str,
) -> String
where
	R: ?Sized + Request,
{
	let mut builder = Builder::new(consumer(config), HMAC_SHA1);

	builder.token(Credentials::new(token, token_secret));

	match method {
		HttpMethod::Get => builder.get(url.as_str(), request),
		HttpMethod::Head => builder.head(url.as_str(), request),
		HttpMethod::Post => builder.post(url.as_str(), request),
		HttpMethod::Put => builder.put(url.as_str(), request),
		HttpMethod::Patch => builder.patch(url.as_str(), request),
		HttpMethod::Delete => builder.delete(url.as_str(), request),
		HttpMethod::Options => builder.options(url.as_str(), request),
	}
}

fn consumer(config: &ClientConfig) -> Credentials<&str> {
	Credentials::new(config.consumer_key.as_str(), config.consumer_secret.expose())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::SignatureMethod;

	fn config() -> ClientConfig {
		ClientConfig::builder()
			.request_token_url(
				Url::parse("https://api.example.com/oauth/request_token")
					.expect("Failed to parse request-token URL."),
			)
			.access_token_url(
				Url::parse("https://api.example.com/oauth/access_token")
					.expect("Failed to parse access-token URL."),
			)
			.resource_base_url(
				Url::parse("https://api.example.com/1/user/")
					.expect("Failed to parse resource base URL."),
			)
			.consumer_key("signer-key")
			.consumer_secret("signer-secret")
			.oauth_version("1.0")
			.signature_method(SignatureMethod::HmacSha1)
			.build()
			.expect("Signer test configuration should build successfully.")
	}

	#[test]
	fn request_token_header_carries_protocol_parameters() {
		let config = config();
		let header = request_token_authorization(&config);

		assert!(header.starts_with("OAuth "), "Header should use the OAuth scheme: {header}");
		assert!(header.contains("oauth_consumer_key=\"signer-key\""));
		assert!(header.contains("oauth_callback=\"oob\""));
		assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
		assert!(header.contains("oauth_signature="));
	}

	#[test]
	fn access_token_header_carries_token_and_verifier() {
		let config = config();
		let header = access_token_authorization(&config, "req-token", "req-secret", "verifier123");

		assert!(header.contains("oauth_token=\"req-token\""));
		assert!(header.contains("oauth_verifier=\"verifier123\""));
		assert!(!header.contains("req-secret"), "Secrets must never appear in the header.");
	}

	#[test]
	fn resource_header_signs_with_the_access_token() {
		let config = config();
		let url = Url::parse("https://api.example.com/1/user/-/profile.json")
			.expect("Failed to parse resource URL.");
		let header =
			resource_authorization(&config, HttpMethod::Get, &url, "acc-token", "acc-secret");

		assert!(header.contains("oauth_token=\"acc-token\""));
		assert!(header.contains("oauth_signature="));
	}

	#[test]
	fn resource_header_builds_for_query_urls() {
		let config = config();
		let url = Url::parse("https://api.example.com/1/user/-/activities.json?afterDate=2024-01-01")
			.expect("Failed to parse resource URL with query.");
		let header =
			resource_authorization(&config, HttpMethod::Get, &url, "acc-token", "acc-secret");

		assert!(header.starts_with("OAuth "));
		// Query values belong to the signature base string, not the header itself.
		assert!(!header.contains("afterDate"));
	}
}
