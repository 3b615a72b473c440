//! Rust’s pocket OAuth 1.0a courier—walk the three-legged handshake and fire signed
//! protected-resource calls through one future-shaped client.
//!
//! The crate owns no cryptography and no transport: request signing is delegated to
//! [`oauth1_request`] and HTTP to the pluggable [`http::SignedHttpTransport`] seam
//! (reqwest-backed by default). What remains is the observable contract of a legacy
//! fitness-API client: obtain a request token, trade it plus a verifier for an access
//! token, and issue signed calls against per-user resource paths.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;

mod signer;

#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers shared by the reqwest-backed test suites.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::ApiClient,
		config::{ClientConfig, SignatureMethod},
		http::ReqwestTransport,
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = ApiClient<ReqwestTransport>;

	/// Builds a [`ClientConfig`] whose endpoints all live under the provided base URL,
	/// typically an `httpmock` server address.
	pub fn test_config(base: &str) -> ClientConfig {
		fn endpoint(base: &str, path: &str) -> Url {
			Url::parse(&format!("{base}{path}")).expect("Failed to parse test endpoint URL.")
		}

		ClientConfig::builder()
			.request_token_url(endpoint(base, "/oauth/request_token"))
			.access_token_url(endpoint(base, "/oauth/access_token"))
			.authorize_url(endpoint(base, "/oauth/authorize"))
			.resource_base_url(endpoint(base, "/1/user/"))
			.consumer_key("test-consumer")
			.consumer_secret("test-consumer-secret")
			.oauth_version("1.0")
			.signature_method(SignatureMethod::HmacSha1)
			.build()
			.expect("Test client configuration should build successfully.")
	}

	/// Constructs an [`ApiClient`] backed by the crate's default reqwest transport.
	pub fn build_reqwest_test_client(config: ClientConfig) -> ReqwestTestClient {
		ApiClient::new(config)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use oauth1_courier as _;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
