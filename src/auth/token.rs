//! Request- and access-token pairs plus the form-encoded grant body parser.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Temporary credential returned by the request-token step.
///
/// Hold onto both halves just long enough for the user to approve access on the
/// provider's authorization page; the pair is single-use and expires quickly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
	/// Opaque token identifier, also the `oauth_token` query value on the
	/// authorization page.
	pub token: String,
	/// Secret paired with the token, needed for the access-token exchange.
	pub secret: TokenSecret,
}

/// Long-lived credential used to sign protected-resource calls.
///
/// The client defines no expiry model; persisting the pair is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Opaque token identifier.
	pub token: String,
	/// Secret paired with the token, needed to sign every resource call.
	pub secret: TokenSecret,
}

/// Extracts the `oauth_token`/`oauth_token_secret` pair from a form-encoded token
/// grant body, reporting the first absent field on failure.
pub(crate) fn token_fields(body: &str) -> Result<(String, String), &'static str> {
	let mut token = None;
	let mut secret = None;

	for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
		match &*key {
			"oauth_token" => token = Some(value.into_owned()),
			"oauth_token_secret" => secret = Some(value.into_owned()),
			_ => {},
		}
	}

	let token = token.filter(|value| !value.is_empty()).ok_or("oauth_token")?;
	let secret = secret.filter(|value| !value.is_empty()).ok_or("oauth_token_secret")?;

	Ok((token, secret))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_fields_parses_grant_body() {
		let (token, secret) =
			token_fields("oauth_token=abc123&oauth_token_secret=def456&oauth_callback_confirmed=true")
				.expect("Grant body with both fields should parse.");

		assert_eq!(token, "abc123");
		assert_eq!(secret, "def456");
	}

	#[test]
	fn token_fields_percent_decodes() {
		let (token, secret) = token_fields("oauth_token=a%2Fb&oauth_token_secret=c%3Dd")
			.expect("Percent-encoded grant body should parse.");

		assert_eq!(token, "a/b");
		assert_eq!(secret, "c=d");
	}

	#[test]
	fn token_fields_reports_first_missing_field() {
		assert_eq!(token_fields("oauth_token_secret=def456"), Err("oauth_token"));
		assert_eq!(token_fields("oauth_token=abc123"), Err("oauth_token_secret"));
		assert_eq!(token_fields("oauth_token=&oauth_token_secret=def456"), Err("oauth_token"));
	}
}
