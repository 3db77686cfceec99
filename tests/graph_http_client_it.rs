#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use oauth2::AuthorizationCode;
// self
use fb_login::{
	config::ClientConfig,
	error::{BadResponseError, Error, ErrorKind},
	flows::{GraphClient, LoginStage, ReqwestGraphClient},
	http::ReqwestHttpClient,
	provider::GraphEndpoints,
	reqwest::blocking::Client,
	time::{Date, Month},
	url::Url,
};

const APP_ID: &str = "app-it";
const APP_SECRET: &str = "secret-it";
const REDIRECT_URL: &str = "https://app.example.com/callback";

fn build_client(server: &MockServer) -> ReqwestGraphClient {
	let base = Url::parse(&server.url("/")).expect("Mock server URL should parse successfully.");
	let endpoints = GraphEndpoints::builder()
		.dialog(base.clone())
		.graph(base)
		.build()
		.expect("Mock endpoints should build successfully.");
	let http_client = Client::builder()
		.danger_accept_invalid_certs(true)
		.build()
		.expect("Test reqwest client should build successfully.");

	GraphClient::with_http_client(
		ClientConfig::new(APP_ID, APP_SECRET, REDIRECT_URL, "email"),
		endpoints,
		ReqwestHttpClient::with_client(http_client),
	)
}

#[test]
fn full_login_reaches_profile() {
	let server = MockServer::start();
	let client = build_client(&server);
	let mut stage = LoginStage::Init;
	let authorize = client.authorization_url();

	assert_eq!(authorize.path(), "/dialog/oauth");
	assert!(authorize.query_pairs().any(|(key, value)| key == "response_type" && value == "code"));

	stage = stage.advance().expect("Init should advance to the dialog redirect.");

	let token_mock = server.mock(|when, then| {
		when.method(GET)
			.path("/oauth/access_token")
			.query_param("client_id", APP_ID)
			.query_param("client_secret", APP_SECRET)
			.query_param("redirect_uri", REDIRECT_URL)
			.query_param("code", "valid-code");
		then.status(200)
			.header("content-type", "text/plain")
			.body("access_token=access-success&expires=5183999");
	});
	let profile_mock = server.mock(|when, then| {
		when.method(GET)
			.path("/me")
			.query_param("access_token", "access-success")
			.query_param("fields", "id,name,birthday,gender,picture.type(large),email");
		then.status(200).header("content-type", "application/json").body(
			r#"{"id":"4","name":"Mark","email":"mark@example.com","gender":"male","birthday":"14/05/1984","picture":{"data":{"url":"https://cdn.example.com/4.jpg"}}}"#,
		);
	});
	let callback = Url::parse("https://app.example.com/callback?code=valid-code")
		.expect("Callback URL should parse successfully.");

	stage = stage.advance().expect("Dialog redirect should advance to the callback.");

	let token = client.exchange_callback(&callback).expect("Code exchange should succeed.");

	token_mock.assert();
	stage = stage.advance().expect("Callback should advance to the token.");

	assert_eq!(token.secret(), "access-success");
	assert_eq!(token.expires_in_seconds(), 5_183_999);

	let profile = client.fetch_profile(token.secret()).expect("Profile fetch should succeed.");

	profile_mock.assert();
	stage = stage.advance().expect("Token should advance to the profile.");

	assert_eq!(stage, LoginStage::ProfileFetched);
	assert_eq!(profile.id, Some(4));
	assert_eq!(profile.email, "mark@example.com");
	assert_eq!(profile.display_name, "Mark");
	assert_eq!(profile.photo_url, "https://cdn.example.com/4.jpg");
	assert_eq!(
		profile.birthday,
		Some(Date::from_calendar_date(1984, Month::May, 14).expect("Fixture date should be valid."))
	);
}

#[test]
fn json_token_body_is_accepted() {
	let server = MockServer::start();
	let client = build_client(&server);
	let mock = server.mock(|when, then| {
		when.method(GET).path("/oauth/access_token").query_param("code", "json-code");
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"access_token":"access-json","token_type":"bearer","expires_in":3600}"#);
	});
	let token = client
		.exchange_code(&AuthorizationCode::new("json-code".into()))
		.expect("JSON token response should be accepted.");

	mock.assert();

	assert_eq!(token.secret(), "access-json");
	assert_eq!(token.expires_in_seconds(), 3600);
}

#[test]
fn provider_error_object_is_surfaced() {
	let server = MockServer::start();
	let client = build_client(&server);
	let mock = server.mock(|when, then| {
		when.method(GET).path("/me");
		then.status(200).header("content-type", "application/json").body(
			r#"{"error":{"message":"Invalid OAuth access token.","type":"OAuthException","code":190}}"#,
		);
	});
	let err = client.fetch_profile("expired").expect_err("Provider error should fail the fetch.");

	mock.assert();

	assert_eq!(err.kind(), ErrorKind::BadResponse);
	assert!(matches!(
		err,
		Error::BadResponse(BadResponseError::ProviderRejected { code: Some(190), .. })
	));
}

#[test]
fn non_success_status_is_a_transport_error() {
	let server = MockServer::start();
	let client = build_client(&server);
	let mock = server.mock(|when, then| {
		when.method(GET).path("/oauth/access_token");
		then.status(500).body("upstream exploded");
	});
	let err = client
		.exchange_code(&AuthorizationCode::new("any-code".into()))
		.expect_err("HTTP 500 should fail the exchange.");

	mock.assert();

	match err {
		Error::Transport(transport) => assert_eq!(transport.http_status(), Some(500)),
		other => panic!("Unexpected error: {other:?}."),
	}
}

#[test]
fn missing_profile_name_is_a_bad_response() {
	let server = MockServer::start();
	let client = build_client(&server);
	let mock = server.mock(|when, then| {
		when.method(GET).path("/me");
		then.status(200)
			.header("content-type", "application/json")
			.body(r#"{"id":7,"email":"nameless@example.com"}"#);
	});
	let err = client.fetch_profile("token").expect_err("Profile without a name should fail.");

	mock.assert();

	assert!(matches!(
		err,
		Error::BadResponse(BadResponseError::MissingProfileField { field: "name" })
	));
}
