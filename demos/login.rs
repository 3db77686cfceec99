//! Walks a complete Facebook login against a local mock Graph API: print the dialog URL, parse
//! the redirect, trade the code for a token, and fetch the profile.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use fb_login::{
	config::ClientConfig,
	flows::{GraphClient, LoginStage},
	http::ReqwestHttpClient,
	provider::GraphEndpoints,
	reqwest::blocking::Client,
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start();
	let token_mock = server.mock(|when, then| {
		when.method(GET).path("/v19.0/oauth/access_token").query_param("code", "demo-code");
		then.status(200).body("access_token=demo-access&expires=5183999");
	});
	let profile_mock = server.mock(|when, then| {
		when.method(GET).path("/v19.0/me").query_param("access_token", "demo-access");
		then.status(200).header("content-type", "application/json").body(
			r#"{"id":"1001","name":"Demo User","email":"demo@example.com","birthday":"01/02/1990"}"#,
		);
	});
	let base = Url::parse(&server.url("/"))?;
	let endpoints =
		GraphEndpoints::builder().dialog(base.clone()).graph(base).api_version("v19.0").build()?;
	let http_client =
		ReqwestHttpClient::with_client(Client::builder().danger_accept_invalid_certs(true).build()?);
	let client = GraphClient::with_http_client(
		ClientConfig::new(
			"demo-app",
			"demo-secret",
			"https://app.example.com/callback",
			"email,user_birthday",
		),
		endpoints,
		http_client,
	);
	let mut stage = LoginStage::Init;

	println!("Send the user to: {}.", client.authorization_url());

	stage = stage.advance().unwrap_or(stage);

	// The provider would redirect the browser here after consent.
	let callback = Url::parse("https://app.example.com/callback?code=demo-code")?;
	let login = client.exchange_callback(&callback).and_then(|token| {
		stage = LoginStage::TokenAcquired;

		client.fetch_profile(token.secret())
	});

	match login {
		Ok(profile) => {
			stage = LoginStage::ProfileFetched;

			println!(
				"Logged in {} <{}> (birthday: {:?}).",
				profile.display_name, profile.email, profile.birthday
			);
		},
		Err(e) => {
			stage = stage.fail(&e);

			println!("Login failed: {e}.");
		},
	}

	println!("Final stage: {stage}.");

	token_mock.assert();
	profile_mock.assert();

	Ok(())
}
