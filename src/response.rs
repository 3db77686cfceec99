//! Wire-format decoding and validation for Graph responses.
//!
//! Each distinct wire format has an explicit schema type: [`TokenResponse`] (form-encoded, or
//! JSON on newer API versions) and [`ProfileResponse`] (JSON). Decoding only checks syntax;
//! `validate` methods then enforce the semantic minimum and produce the domain types.

pub mod profile;
pub mod token;

pub use profile::*;
pub use token::*;

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::percent_decode_str;
// self
use crate::{
	_prelude::*,
	error::{BadResponseError, DecodeError},
};

/// Error object Graph returns in place of the expected payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphApiError {
	/// Human-readable description.
	pub message: String,
	/// Error family (e.g. `OAuthException`).
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// Numeric error code.
	pub code: Option<i64>,
}
impl From<GraphApiError> for BadResponseError {
	fn from(e: GraphApiError) -> Self {
		Self::ProviderRejected { message: e.message, kind: e.kind, code: e.code }
	}
}

/// Decodes a JSON body, keeping the failing field path for diagnostics.
pub(crate) fn decode_json<T>(endpoint: &'static str, body: &[u8]) -> Result<T, DecodeError>
where
	T: for<'de> Deserialize<'de>,
{
	let deserializer = &mut serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(deserializer)
		.map_err(|source| DecodeError::Json { endpoint, source })
}

/// Splits a form-encoded body into owned key/value pairs.
///
/// Later duplicates overwrite earlier ones. Escapes are decoded strictly: a `%` not followed by
/// two hex digits, or an escape sequence that decodes to invalid UTF-8, fails instead of being
/// passed through or replaced.
pub(crate) fn decode_form(
	endpoint: &'static str,
	body: &[u8],
) -> Result<HashMap<String, String>, DecodeError> {
	let text =
		std::str::from_utf8(body).map_err(|source| DecodeError::Utf8 { endpoint, source })?;
	let leading = text.len() - text.trim_start().len();
	let mut pairs = HashMap::new();
	let mut offset = leading;

	for pair in text.trim().split('&') {
		let start = offset;

		offset += pair.len() + 1;

		if pair.is_empty() {
			continue;
		}

		let (key, value, value_at) = match pair.split_once('=') {
			Some((key, value)) => (key, value, start + key.len() + 1),
			None => (pair, "", start + pair.len()),
		};

		pairs.insert(
			decode_form_component(endpoint, key, start)?,
			decode_form_component(endpoint, value, value_at)?,
		);
	}

	Ok(pairs)
}

fn decode_form_component(
	endpoint: &'static str,
	raw: &str,
	offset: usize,
) -> Result<String, DecodeError> {
	let bytes = raw.as_bytes();

	if let Some(at) = bytes.iter().enumerate().find_map(|(i, b)| {
		let well_formed = bytes
			.get(i + 1..i + 3)
			.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));

		(*b == b'%' && !well_formed).then_some(i)
	}) {
		return Err(DecodeError::Form { endpoint, offset: offset + at, source: None });
	}

	let spaced = raw.replace('+', " ");

	percent_decode_str(&spaced)
		.decode_utf8()
		.map(Cow::into_owned)
		.map_err(|source| DecodeError::Form { endpoint, offset, source: Some(source) })
}

/// Returns `true` when the body looks like a JSON object.
pub(crate) fn looks_like_json(body: &[u8]) -> bool {
	body.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{')
}
