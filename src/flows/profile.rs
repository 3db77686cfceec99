//! Authenticated profile fetch.

// self
use crate::{
	_prelude::*,
	auth::UserProfile,
	flows::GraphClient,
	http::GraphHttpClient,
	obs::{self, FlowKind},
	provider,
	response::ProfileResponse,
};

impl<C> GraphClient<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Fetches and validates the profile of the user who granted `access_token`.
	///
	/// Fails when the response lacks an email or name. A birthday that cannot be parsed is
	/// logged and returned as `None` instead.
	pub fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
		obs::observe(FlowKind::ProfileFetch, "fetch_profile", || {
			let url = provider::profile_url(&self.config, &self.endpoints, access_token);
			let body = self.http_client.get(&url).map_err(|e| Error::Transport(e.into()))?;
			let profile = ProfileResponse::from_body(&body)?.validate()?;

			Ok(profile)
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::Month;
	// self
	use super::*;
	use crate::{
		_preludet::*,
		error::{BadResponseError, ErrorKind},
	};

	#[test]
	fn profile_is_normalized() {
		let client = static_client(Some(
			r#"{"id":"10","email":"ernado@ya.ru","name":"Alexander Razumov","gender":"male","birthday":"10/10/1994","picture":{"data":{"url":"https://cdn.example.com/p.jpg"}}}"#,
		));
		let profile = client.fetch_profile("TOK123").expect("Profile fetch should succeed.");
		let birthday = profile.birthday.expect("Birthday should be parsed.");

		assert_eq!(profile.id, Some(10));
		assert_eq!(profile.email, "ernado@ya.ru");
		assert_eq!(profile.display_name, "Alexander Razumov");
		assert_eq!(profile.photo_url, "https://cdn.example.com/p.jpg");
		assert_eq!(birthday.year(), 1994);
		assert_eq!(birthday.month(), Month::October);
		assert_eq!(
			client.http_client.requested().as_deref(),
			Some(
				"https://graph.facebook.com/me?access_token=TOK123&fields=id%2Cname%2Cbirthday%2Cgender%2Cpicture.type%28large%29%2Cemail"
			)
		);
	}

	#[test]
	fn missing_email_is_a_bad_response() {
		let err = static_client(Some(r#"{"name":"Alexander Razumov"}"#))
			.fetch_profile("TOK123")
			.expect_err("Profile without email should fail.");

		assert!(matches!(
			err,
			Error::BadResponse(BadResponseError::MissingProfileField { field: "email" })
		));
	}

	#[test]
	fn invalid_json_is_a_decode_error() {
		let err = static_client(Some("[[[]}"))
			.fetch_profile("TOK123")
			.expect_err("Broken JSON should fail.");

		assert_eq!(err.kind(), ErrorKind::Decode);
	}

	#[test]
	fn transport_failure_is_reported() {
		let err = static_client(None)
			.fetch_profile("TOK123")
			.expect_err("Missing response should fail.");

		assert_eq!(err.kind(), ErrorKind::Transport);
	}

	#[test]
	fn unparsable_birthday_is_left_unknown() {
		let profile = static_client(Some(
			r#"{"email":"ernado@ya.ru","name":"Alexander Razumov","birthday":"1994"}"#,
		))
		.fetch_profile("TOK123")
		.expect("Bad birthday should not fail the fetch.");

		assert_eq!(profile.birthday, None);
		assert!(profile.is_valid());
	}
}
