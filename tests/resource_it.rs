// crates.io
use httpmock::prelude::*;
// self
use oauth1_courier::{
	_preludet::*,
	client::ResourceRequest,
	error::ResourceError,
};

const ACCESS_TOKEN: &str = "acc-token";
const ACCESS_SECRET: &str = "acc-secret";

#[tokio::test]
async fn missing_parameters_reject_without_a_network_call() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let catch_all = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200).body("{}");
		})
		.await;
	let cases = [
		(ResourceRequest::new("", "GET", ACCESS_TOKEN, ACCESS_SECRET), "path"),
		(ResourceRequest::new("/profile.json", "", ACCESS_TOKEN, ACCESS_SECRET), "method"),
		(ResourceRequest::new("/profile.json", "GET", "", ACCESS_SECRET), "access_token"),
		(ResourceRequest::new("/profile.json", "GET", ACCESS_TOKEN, ""), "access_token_secret"),
	];

	for (request, expected) in cases {
		let err = client
			.request_resource(request)
			.await
			.expect_err("Empty required parameters should reject.");

		assert!(
			matches!(err, Error::InvalidParameter { name } if name == expected),
			"Expected InvalidParameter for `{expected}`",
		);
	}

	catch_all.assert_calls_async(0).await;
}

#[tokio::test]
async fn omitted_user_id_targets_the_default_segment() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1/user/-/profile.json").header_exists("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"user\":{\"displayName\":\"Courier\"}}");
		})
		.await;
	let outcome = client
		.request_resource(ResourceRequest::new("/profile.json", "GET", ACCESS_TOKEN, ACCESS_SECRET))
		.await
		.expect("Profile call should succeed.");

	assert_eq!(outcome.data, "{\"user\":{\"displayName\":\"Courier\"}}");
	assert_eq!(outcome.response.status, 200);
	assert_eq!(
		outcome.response.headers.get("content-type").map(String::as_str),
		Some("application/json"),
	);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn explicit_user_id_replaces_the_default_segment() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1/user/123/profile.json");
			then.status(200).body("{}");
		})
		.await;

	client
		.request_resource(
			ResourceRequest::new("/profile.json", "GET", ACCESS_TOKEN, ACCESS_SECRET)
				.for_user("123"),
		)
		.await
		.expect("Profile call for an explicit user should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn query_strings_survive_url_construction() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/1/user/-/activities.json")
				.query_param("afterDate", "2024-01-01");
			then.status(200).body("{\"activities\":[]}");
		})
		.await;
	let outcome = client
		.request_resource(ResourceRequest::new(
			"/activities.json?afterDate=2024-01-01",
			"GET",
			ACCESS_TOKEN,
			ACCESS_SECRET,
		))
		.await
		.expect("Query-string resource call should succeed.");

	assert_eq!(outcome.data, "{\"activities\":[]}");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn non_success_statuses_surface_as_resource_errors() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1/user/-/missing.json");
			then.status(404).body("{\"errors\":[{\"errorType\":\"not_found\"}]}");
		})
		.await;
	let err = client
		.request_resource(ResourceRequest::new("/missing.json", "GET", ACCESS_TOKEN, ACCESS_SECRET))
		.await
		.expect_err("Non-2xx responses should reject.");

	assert!(
		matches!(
			&err,
			Error::Resource(ResourceError::Status { status: 404, body })
				if body.contains("not_found"),
		),
		"Expected a status rejection, got {err:?}",
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn unsupported_verbs_reject_without_a_network_call() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let catch_all = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200).body("{}");
		})
		.await;
	let err = client
		.request_resource(ResourceRequest::new("/profile.json", "BREW", ACCESS_TOKEN, ACCESS_SECRET))
		.await
		.expect_err("Verbs outside the signable set should reject.");

	assert!(matches!(err, Error::Resource(ResourceError::Method(_))));

	catch_all.assert_calls_async(0).await;
}

#[tokio::test]
async fn unresolvable_resource_endpoint_surfaces_a_transport_error() {
	let client = build_reqwest_test_client(test_config("http://courier.invalid"));
	let err = client
		.request_resource(ResourceRequest::new("/profile.json", "GET", ACCESS_TOKEN, ACCESS_SECRET))
		.await
		.expect_err("Unresolvable resource endpoints should reject.");

	assert!(
		matches!(&err, Error::Resource(ResourceError::Transport(_))),
		"Expected a pass-through transport failure, got {err:?}",
	);
}

#[tokio::test]
async fn concurrent_resource_calls_stay_independent() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(test_config(&server.base_url()));
	let profile_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1/user/-/profile.json");
			then.status(200).body("profile-data");
		})
		.await;
	let sleep_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1/user/-/sleep.json");
			then.status(200).body("sleep-data");
		})
		.await;
	let (profile, sleep) = tokio::join!(
		client.request_resource(ResourceRequest::new(
			"/profile.json",
			"GET",
			ACCESS_TOKEN,
			ACCESS_SECRET,
		)),
		client.request_resource(ResourceRequest::new(
			"/sleep.json",
			"GET",
			ACCESS_TOKEN,
			ACCESS_SECRET,
		)),
	);
	let profile = profile.expect("Concurrent profile call should succeed.");
	let sleep = sleep.expect("Concurrent sleep call should succeed.");

	assert_eq!(profile.data, "profile-data");
	assert_eq!(sleep.data, "sleep-data");

	profile_mock.assert_calls_async(1).await;
	sleep_mock.assert_calls_async(1).await;
}
