//! Walks the three-legged handshake end to end and issues one signed profile call.
//!
//! Pass your consumer key/secret as the first two arguments; the verifier is read
//! from stdin after you approve access in the browser.

// std
use std::io::{BufRead, Write, stdin, stdout};
// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth1_courier::{
	client::{ApiClient, ResourceRequest},
	config::{ClientConfig, SignatureMethod},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = std::env::args().skip(1);
	let consumer_key = args.next().unwrap_or_else(|| "demo-key".into());
	let consumer_secret = args.next().unwrap_or_else(|| "demo-secret".into());
	let config = ClientConfig::builder()
		.request_token_url(Url::parse("https://api.fitbit.com/oauth/request_token")?)
		.access_token_url(Url::parse("https://api.fitbit.com/oauth/access_token")?)
		.authorize_url(Url::parse("https://www.fitbit.com/oauth/authorize")?)
		.resource_base_url(Url::parse("https://api.fitbit.com/1/user/")?)
		.consumer_key(consumer_key)
		.consumer_secret(consumer_secret)
		.oauth_version("1.0")
		.signature_method(SignatureMethod::HmacSha1)
		.build()?;
	let client = ApiClient::new(config);
	let request_token = client.get_request_token().await?;

	if let Some(authorize) = client.authorization_url(&request_token) {
		println!("Send your user to {authorize}.");
	}

	print!("Verifier shown after approval: ");
	stdout().flush()?;

	let mut verifier = String::new();

	stdin().lock().read_line(&mut verifier)?;

	let access_token = client
		.get_access_token(&request_token.token, request_token.secret.expose(), verifier.trim())
		.await?;
	let profile = client
		.request_resource(ResourceRequest::new(
			"/profile.json",
			"GET",
			&access_token.token,
			access_token.secret.expose(),
		))
		.await?;

	println!("HTTP {} with {} bytes of profile data.", profile.response.status, profile.data.len());

	Ok(())
}
