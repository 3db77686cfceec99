//! Profile endpoint wire format.

// crates.io
use serde::{
	Deserializer,
	de::{Error as _, Unexpected},
};
// self
use crate::{
	_prelude::*,
	auth::{self, UserProfile},
	error::{BadResponseError, DecodeError},
	obs,
	response::{self, GraphApiError},
};

const ENDPOINT: &str = "profile";

/// `/me` payload after decoding, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileResponse {
	/// User identifier; Graph sends it as a JSON string of digits.
	#[serde(deserialize_with = "deserialize_id")]
	pub id: Option<u64>,
	/// Full name.
	pub name: Option<String>,
	/// Gender text.
	pub gender: Option<String>,
	/// Primary email.
	pub email: Option<String>,
	/// Birthday text (`DD/MM/YYYY`).
	pub birthday: Option<String>,
	/// Nested picture object (`picture.data.url`).
	pub picture: Picture,
	/// Provider error object, when the body carried one instead of a profile.
	pub error: Option<GraphApiError>,
}
impl ProfileResponse {
	/// Decodes a profile endpoint body.
	pub fn from_body(body: &[u8]) -> Result<Self, DecodeError> {
		response::decode_json(ENDPOINT, body)
	}

	/// Enforces the identity fields and normalizes the rest.
	///
	/// An unparsable birthday is logged and left unknown; it never fails validation.
	pub fn validate(self) -> Result<UserProfile, BadResponseError> {
		if let Some(error) = self.error {
			return Err(error.into());
		}

		let email = required(self.email, "email")?;
		let display_name = required(self.name, "name")?;
		let birthday = self
			.birthday
			.as_deref()
			.map(str::trim)
			.filter(|raw| !raw.is_empty())
			.and_then(|raw| match auth::parse_birthday(raw) {
				Ok(date) => Some(date),
				Err(e) => {
					obs::birthday_unparsed(raw, &e);

					None
				},
			});

		Ok(UserProfile {
			id: self.id,
			display_name,
			gender: self.gender.unwrap_or_default(),
			email,
			photo_url: self.picture.data.url.unwrap_or_default(),
			birthday,
		})
	}
}

/// `picture` envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Picture {
	/// Picture payload.
	pub data: PictureData,
}

/// `picture.data` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PictureData {
	/// Image URL.
	pub url: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, BadResponseError> {
	value.filter(|v| !v.is_empty()).ok_or(BadResponseError::MissingProfileField { field })
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Number(u64),
		Text(String),
	}

	match Option::<RawId>::deserialize(deserializer)? {
		None => Ok(None),
		Some(RawId::Number(id)) => Ok(Some(id)),
		Some(RawId::Text(id)) => id
			.parse()
			.map(Some)
			.map_err(|_| D::Error::invalid_value(Unexpected::Str(&id), &"a numeric identifier")),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::Month;
	// self
	use super::*;

	const FULL_PROFILE: &str = r#"{
		"id": "1487207854850126",
		"email": "ernado@ya.ru",
		"gender": "male",
		"name": "Alexander Razumov",
		"birthday": "10/10/1994",
		"picture": {"data": {"is_silhouette": false, "url": "https://cdn.example.com/p.jpg"}},
		"locale": "ru_RU",
		"verified": true
	}"#;

	fn validate(body: &str) -> Result<UserProfile, BadResponseError> {
		ProfileResponse::from_body(body.as_bytes())
			.expect("Profile fixture should decode.")
			.validate()
	}

	#[test]
	fn full_profile_is_normalized() {
		let profile = validate(FULL_PROFILE).expect("Full profile should validate.");
		let birthday = profile.birthday.expect("Birthday should be parsed.");

		assert_eq!(profile.id, Some(1_487_207_854_850_126));
		assert_eq!(profile.email, "ernado@ya.ru");
		assert_eq!(profile.display_name, "Alexander Razumov");
		assert_eq!(profile.gender, "male");
		assert_eq!(profile.photo_url, "https://cdn.example.com/p.jpg");
		assert_eq!(birthday.year(), 1994);
		assert_eq!(birthday.month(), Month::October);
	}

	#[test]
	fn numeric_ids_are_accepted() {
		let profile = validate(r#"{"id": 42, "email": "a@b.c", "name": "A"}"#)
			.expect("Numeric id should validate.");

		assert_eq!(profile.id, Some(42));
		assert_eq!(profile.birthday, None);
		assert_eq!(profile.photo_url, "");
	}

	#[test]
	fn non_numeric_id_is_a_decode_error() {
		let err = ProfileResponse::from_body(br#"{"id": "abc", "email": "a@b.c", "name": "A"}"#)
			.expect_err("Non-numeric id should fail decoding.");

		assert!(matches!(err, DecodeError::Json { endpoint: "profile", .. }));
	}

	#[test]
	fn identity_fields_are_required() {
		assert_eq!(
			validate(r#"{"name": "A"}"#).expect_err("Missing email should fail."),
			BadResponseError::MissingProfileField { field: "email" }
		);
		assert_eq!(
			validate(r#"{"email": "a@b.c", "name": ""}"#).expect_err("Empty name should fail."),
			BadResponseError::MissingProfileField { field: "name" }
		);
		assert_eq!(
			validate(r#"{"response": {"error": "500"}}"#).expect_err("Unknown shape should fail."),
			BadResponseError::MissingProfileField { field: "email" }
		);
	}

	#[test]
	fn provider_error_object_is_rejected() {
		let err = validate(
			r#"{"error": {"message": "Invalid OAuth access token.", "type": "OAuthException", "code": 190}}"#,
		)
		.expect_err("Provider error should fail validation.");

		assert!(matches!(err, BadResponseError::ProviderRejected { code: Some(190), .. }));
	}

	#[test]
	fn unparsable_birthday_is_unknown() {
		let profile = validate(r#"{"email": "a@b.c", "name": "A", "birthday": "10/1994"}"#)
			.expect("Partial birthday should not fail validation.");

		assert_eq!(profile.birthday, None);
	}

	#[test]
	fn syntax_errors_are_decode_errors() {
		let err = ProfileResponse::from_body(b"[[[]}").expect_err("Broken JSON should fail.");

		assert!(matches!(err, DecodeError::Json { .. }));
	}
}
