//! Token endpoint wire format.
//!
//! The legacy endpoint answers with `access_token=...&expires=...` form data; versioned
//! endpoints answer with JSON carrying `expires_in`. Both decode into [`TokenResponse`].

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{BadResponseError, DecodeError},
	response::{self, GraphApiError},
};

const ENDPOINT: &str = "token";

/// Token endpoint payload after decoding, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenResponse {
	/// Raw `access_token` value.
	pub access_token: Option<String>,
	/// Raw lifetime (`expires`, or `expires_in` when `expires` is absent), kept textual so
	/// validation can report exactly what was received.
	pub expires: Option<String>,
	/// Provider error object, when the body carried one instead of a token.
	pub error: Option<GraphApiError>,
}
impl TokenResponse {
	/// Decodes a token endpoint body, detecting JSON versus form encoding.
	pub fn from_body(body: &[u8]) -> Result<Self, DecodeError> {
		if response::looks_like_json(body) {
			let wire: JsonTokenResponse = response::decode_json(ENDPOINT, body)?;

			return Ok(Self {
				access_token: wire.access_token,
				expires: wire.expires.or(wire.expires_in).map(|raw| raw.0),
				error: wire.error,
			});
		}

		let mut form = response::decode_form(ENDPOINT, body)?;

		Ok(Self {
			access_token: form.remove("access_token"),
			expires: form.remove("expires").or_else(|| form.remove("expires_in")),
			error: None,
		})
	}

	/// Enforces a non-empty token and an integral, non-negative lifetime.
	pub fn validate(self) -> Result<AccessToken, BadResponseError> {
		if let Some(error) = self.error {
			return Err(error.into());
		}

		let token = self
			.access_token
			.filter(|value| !value.is_empty())
			.ok_or(BadResponseError::MissingAccessToken)?;
		let raw_expiry = self
			.expires
			.map(|value| value.trim().to_owned())
			.filter(|value| !value.is_empty())
			.ok_or(BadResponseError::MissingExpiry)?;
		let expires_in_seconds = raw_expiry
			.parse::<u64>()
			.map_err(|_| BadResponseError::InvalidExpiry { value: raw_expiry.clone() })?;

		AccessToken::new(token, expires_in_seconds)
	}
}

#[derive(Debug, Deserialize)]
struct JsonTokenResponse {
	#[serde(default)]
	access_token: Option<String>,
	#[serde(default)]
	expires: Option<RawScalar>,
	#[serde(default)]
	expires_in: Option<RawScalar>,
	#[serde(default)]
	error: Option<GraphApiError>,
}

/// Number-or-string JSON scalar normalized to its textual form.
#[derive(Debug)]
struct RawScalar(String);
impl<'de> Deserialize<'de> for RawScalar {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Scalar {
			Number(serde_json::Number),
			Text(String),
		}

		Ok(match Scalar::deserialize(deserializer)? {
			Scalar::Number(value) => Self(value.to_string()),
			Scalar::Text(value) => Self(value),
		})
	}
}
