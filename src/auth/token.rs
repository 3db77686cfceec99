//! Access token issued by the token exchange.

// self
use crate::{_prelude::*, error::BadResponseError};

/// Bearer credential plus its advertised lifetime.
///
/// The crate never persists tokens; callers decide how long to keep one. `Debug` output
/// redacts the token string. Deserialization goes through [`AccessToken::new`], so an empty
/// token never round-trips into a value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "AccessTokenParts")]
pub struct AccessToken {
	token: oauth2::AccessToken,
	expires_in_seconds: u64,
}
impl AccessToken {
	/// Creates a token, rejecting empty token strings.
	pub fn new(
		token: impl Into<String>,
		expires_in_seconds: u64,
	) -> Result<Self, BadResponseError> {
		let token = token.into();

		if token.is_empty() {
			return Err(BadResponseError::MissingAccessToken);
		}

		Ok(Self { token: oauth2::AccessToken::new(token), expires_in_seconds })
	}

	/// Lifetime in seconds as reported by the provider.
	pub fn expires_in_seconds(&self) -> u64 {
		self.expires_in_seconds
	}

	/// Returns the raw token value. Callers must avoid logging this string.
	pub fn secret(&self) -> &str {
		self.token.secret()
	}

	/// A token is usable only when its string is non-empty.
	pub fn is_valid(&self) -> bool {
		!self.secret().is_empty()
	}

	/// Lifetime as a [`Duration`], saturating at `i64::MAX` seconds.
	pub fn expires_in(&self) -> Duration {
		Duration::seconds(i64::try_from(self.expires_in_seconds).unwrap_or(i64::MAX))
	}

	/// Absolute expiry instant for a token received at `issued_at`.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> OffsetDateTime {
		issued_at.saturating_add(self.expires_in())
	}
}

impl TryFrom<AccessTokenParts> for AccessToken {
	type Error = BadResponseError;

	fn try_from(parts: AccessTokenParts) -> Result<Self, Self::Error> {
		Self::new(parts.token, parts.expires_in_seconds)
	}
}

#[derive(Deserialize)]
struct AccessTokenParts {
	token: String,
	expires_in_seconds: u64,
}
